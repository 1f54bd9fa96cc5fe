use crate::console::ConsoleSession;
use gsb::{Caller, CommandBuilder, Outcome, RegexPattern, Session};
use lazy_static::lazy_static;
use std::sync::Arc;

const THINGS: [(&str, &str); 3] = [
    ("sky", "The sky is a flat, even grey."),
    ("floor", "Bare boards, worn smooth."),
    ("me", "You look like you always do."),
];

lazy_static! {
    static ref AT_TARGET: Arc<RegexPattern> = Arc::new(
        RegexPattern::new(r"(?:at\s+)?(?P<target>.*)").expect("look pattern is valid")
    );
}

/// Two commands share `look`: the first handles `look [at] <thing>` and
/// passes a bare `look` on to the second, which describes the room.
pub fn create() -> Vec<CommandBuilder<ConsoleSession>> {
    vec![
        CommandBuilder::new(look_at)
            .names(["look", "l"])
            .description("Look at something.")
            .help("look [at] <thing>")
            .args_pattern(AT_TARGET.clone()),
        CommandBuilder::new(look_around)
            .names(["look", "l"])
            .description("Look around the room.")
            .help("look")
            .no_args_pattern(),
    ]
}

fn look_at(caller: &Caller<'_, ConsoleSession>) -> Outcome {
    let target = caller.kwarg("target").unwrap_or_default().trim();
    if target.is_empty() {
        return Outcome::Continue;
    }

    let session = caller.session();
    match THINGS.iter().find(|(name, _)| name.eq_ignore_ascii_case(target)) {
        Some((_, description)) => session.notify(description),
        None => session.notify(&format!("You see no {target} here.")),
    }
    Outcome::Completed
}

fn look_around(caller: &Caller<'_, ConsoleSession>) -> Outcome {
    caller
        .session()
        .notify("You are standing in a bare test room. Not much to see.");
    Outcome::Completed
}
