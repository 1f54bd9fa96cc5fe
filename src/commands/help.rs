use crate::console::ConsoleSession;
use gsb::{Caller, Command, CommandBuilder, Outcome, Session, SignaturePattern};
use lazy_static::lazy_static;
use std::sync::{Arc, OnceLock};

lazy_static! {
    static ref TOPIC: Arc<SignaturePattern> =
        Arc::new(SignaturePattern::new("[topic]").expect("help signature is valid"));
}

struct HelpEntry {
    names: Vec<String>,
    description: String,
    help: String,
}

/// What `help` knows about. Built once every command has been registered.
pub struct HelpIndex(Vec<HelpEntry>);

impl HelpIndex {
    pub fn new(commands: &[Arc<Command<ConsoleSession>>]) -> Self {
        Self(
            commands
                .iter()
                .map(|command| HelpEntry {
                    names: command.names().to_vec(),
                    description: command.description().to_string(),
                    help: command.help().to_string(),
                })
                .collect(),
        )
    }
}

pub fn create(index: Arc<OnceLock<HelpIndex>>) -> CommandBuilder<ConsoleSession> {
    CommandBuilder::new(move |caller: &Caller<'_, ConsoleSession>| {
        let Some(index) = index.get() else {
            return Outcome::failed("help index has not been built");
        };
        let session = caller.session();

        match caller.kwarg("topic") {
            None => {
                session.notify("Commands:");
                for entry in &index.0 {
                    session.notify(&format!(
                        "  {} - {}",
                        entry.names.join(", "),
                        entry.description
                    ));
                }
            }
            Some(topic) => {
                let mut found = false;
                for entry in index.0.iter().filter(|entry| entry.names.iter().any(|n| n == topic)) {
                    session.notify(&format!("{}: {}", entry.names.join(", "), entry.description));
                    session.notify(&format!("  {}", entry.help));
                    found = true;
                }
                if !found {
                    session.notify(&format!("There is no help on {topic}."));
                }
            }
        }
        Outcome::Completed
    })
    .names(["help", "?"])
    .description("List commands, or explain one.")
    .help("help [command]")
    .args_pattern(TOPIC.clone())
}
