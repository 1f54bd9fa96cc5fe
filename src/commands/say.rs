use crate::console::ConsoleSession;
use gsb::{Caller, CommandBuilder, Outcome, Session};

pub fn create() -> CommandBuilder<ConsoleSession> {
    CommandBuilder::new(say)
        .description("Say something to everyone in the room.")
        .help("say <message>")
}

fn say(caller: &Caller<'_, ConsoleSession>) -> Outcome {
    let message = caller.arg(0).unwrap_or_default();
    caller.session().notify(&format!("You say: {message}"));
    Outcome::Completed
}
