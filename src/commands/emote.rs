use crate::console::ConsoleSession;
use gsb::{Caller, CommandBuilder, Outcome, Session};

pub fn create() -> CommandBuilder<ConsoleSession> {
    CommandBuilder::new(emote)
        .names(["emote", "me"])
        .description("Act something out.")
        .help("emote <action>")
}

fn emote(caller: &Caller<'_, ConsoleSession>) -> Outcome {
    let action = caller.arg(0).unwrap_or_default();
    caller.session().notify(&format!("* {action}"));
    Outcome::Completed
}
