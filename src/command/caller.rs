use crate::{error::BoxError, pattern::Captures};
use std::error::Error;

/// Everything known about one line while it is being resolved.
///
/// A caller is created by [`Parser::handle_line`](crate::Parser::handle_line)
/// and dropped when it returns. Fields are filled in as resolution goes on:
/// the session and text first, then the command token and argument text,
/// then the captures of the command being run, and finally the error of the
/// last handler that failed.
pub struct Caller<'s, S> {
    session: &'s S,
    text: String,
    command: Option<String>,
    args_str: Option<String>,
    captures: Option<Captures>,
    exception: Option<BoxError>,
}

impl<'s, S> Caller<'s, S> {
    pub fn new(session: &'s S, text: impl Into<String>) -> Self {
        Self {
            session,
            text: text.into(),
            command: None,
            args_str: None,
            captures: None,
            exception: None,
        }
    }

    pub fn session(&self) -> &'s S {
        self.session
    }

    /// The line being resolved, after substitution.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The command token, or `""` before the line has been split.
    pub fn command(&self) -> &str {
        self.command.as_deref().unwrap_or_default()
    }

    /// Everything after the command token and separator.
    pub fn args_str(&self) -> &str {
        self.args_str.as_deref().unwrap_or_default()
    }

    pub fn captures(&self) -> Option<&Captures> {
        self.captures.as_ref()
    }

    pub fn args(&self) -> &[Option<String>] {
        self.captures
            .as_ref()
            .map(|captures| captures.positional())
            .unwrap_or_default()
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.captures.as_ref()?.get(index)
    }

    pub fn kwarg(&self, name: &str) -> Option<&str> {
        self.captures.as_ref()?.name(name)
    }

    pub fn exception(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.exception.as_deref()
    }

    pub(crate) fn set_command(&mut self, command: impl Into<String>, args_str: impl Into<String>) {
        self.command = Some(command.into());
        self.args_str = Some(args_str.into());
    }

    pub(crate) fn set_captures(&mut self, captures: Captures) {
        self.captures = Some(captures);
    }

    pub(crate) fn set_exception(&mut self, exception: BoxError) {
        self.exception = Some(exception);
    }
}
