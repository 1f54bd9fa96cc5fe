mod emote;
mod help;
mod look;
mod quit;
mod say;

use crate::console::ConsoleSession;
use gsb::{pattern::TEXT, CommandDefaults, ConfigError, Parser, ParserConfig};
use std::sync::{Arc, OnceLock};
use tracing::warn;

/// Shorthands offered unless the config maps the same character.
const SUBSTITUTIONS: [(char, &str); 2] = [('"', "say"), (':', "emote")];

/// The console's root parser with every command registered.
pub fn build_parser(config: &ParserConfig) -> Result<Parser<ConsoleSession>, ConfigError> {
    let mut parser = Parser::from_config(config)?;
    for (short, name) in SUBSTITUTIONS {
        if !parser.substitutions().contains_key(&short) {
            parser = parser.with_substitution(short, name);
        }
    }

    let confirm = Arc::new(quit::confirm_parser(config)?);
    register_all_commands(&mut parser, confirm);
    Ok(parser)
}

/// Registers the console's commands on `parser`; `quit` hands over to `confirm`.
pub fn register_all_commands(
    parser: &mut Parser<ConsoleSession>,
    confirm: Arc<Parser<ConsoleSession>>,
) {
    {
        let mut social = parser.with_defaults(
            CommandDefaults::new()
                .args_pattern(TEXT.clone())
                .extra("category", "social"),
        );
        social.register(say::create());
        social.register(emote::create());
    }

    for command in look::create() {
        parser.register(command);
    }

    let index = Arc::new(OnceLock::new());
    parser.register(help::create(Arc::clone(&index)));
    parser.register(quit::create(confirm));

    if index.set(help::HelpIndex::new(&parser.all_commands())).is_err() {
        warn!("help index was already built; keeping the first one");
    }
}
