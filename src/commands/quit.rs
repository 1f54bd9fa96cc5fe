use crate::console::{ConsoleSession, ParserRequest};
use gsb::{Caller, CommandBuilder, ConfigError, Outcome, Parser, ParserConfig, ParserHooks, Session};
use std::sync::Arc;

pub fn create(confirm: Arc<Parser<ConsoleSession>>) -> CommandBuilder<ConsoleSession> {
    CommandBuilder::new(move |caller: &Caller<'_, ConsoleSession>| {
        caller
            .session()
            .request(ParserRequest::Push(Arc::clone(&confirm)));
        Outcome::Completed
    })
    .names(["quit", "q"])
    .description("Leave the console.")
    .help("quit")
}

struct ConfirmHooks;

impl ParserHooks<ConsoleSession> for ConfirmHooks {
    fn on_attach(
        &self,
        _parser: &Parser<ConsoleSession>,
        session: &ConsoleSession,
        _previous: Option<&Parser<ConsoleSession>>,
    ) {
        session.notify("Really quit? (yes/no)");
    }

    fn huh(&self, _parser: &Parser<ConsoleSession>, caller: &Caller<'_, ConsoleSession>) {
        caller.session().notify("Please answer yes or no.");
    }
}

/// The parser a session is handed while it confirms `quit`.
pub fn confirm_parser(config: &ParserConfig) -> Result<Parser<ConsoleSession>, ConfigError> {
    let mut parser = Parser::from_config(config)?.with_hooks(ConfirmHooks);
    parser.register(
        CommandBuilder::new(yes)
            .names(["yes", "y"])
            .description("Quit.")
            .no_args_pattern(),
    );
    parser.register(
        CommandBuilder::new(no)
            .names(["no", "n"])
            .description("Stay.")
            .no_args_pattern(),
    );
    Ok(parser)
}

fn yes(caller: &Caller<'_, ConsoleSession>) -> Outcome {
    let session = caller.session();
    session.notify("Goodbye.");
    session.quit();
    Outcome::Completed
}

fn no(caller: &Caller<'_, ConsoleSession>) -> Outcome {
    let session = caller.session();
    session.notify("Okay, staying.");
    session.request(ParserRequest::Pop);
    Outcome::Completed
}
