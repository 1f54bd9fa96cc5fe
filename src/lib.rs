//! Command parsing for line-based text servers.
//!
//! A [`Parser`] owns a registry of [`Command`]s keyed by invocation name and
//! resolves each line a [`Session`] sends into zero or more handler calls.
//! Several commands may share a name; they are tried in registration order
//! and a handler can pass the line on to the next one by returning
//! [`Outcome::Continue`].

pub mod command;
pub mod config;
pub mod error;
pub mod parser;
pub mod pattern;
pub mod session;

pub use command::{
    builder::{CommandBuilder, CommandDefaults},
    caller::Caller,
    registry::{Command, CommandRegistry},
    Outcome,
};
pub use config::ParserConfig;
pub use error::{BoxError, ConfigError, PatternError};
pub use parser::{
    hooks::{DefaultHooks, ParserHooks},
    observer::{Observer, TracingObserver},
    Parser,
};
pub use pattern::{ArgsPattern, Captures, RegexPattern, SignaturePattern};
pub use session::{swap_parser, Session};
