use super::Parser;
use crate::{command::caller::Caller, session::Session};

/// Overridable parser behaviour.
///
/// Every method has a default, so an implementation only spells out what it
/// changes. Each call receives the parser it was fired by.
pub trait ParserHooks<S: Session>: Send + Sync {
    /// Consulted before a line is split. Returning `false` drops the line
    /// without any feedback, e.g. to rate limit a session.
    fn pre_command(&self, _parser: &Parser<S>, _caller: &Caller<'_, S>) -> bool {
        true
    }

    /// Never called by [`Parser::handle_line`]. Hosts that wrap the parser
    /// can call it once a line has been resolved.
    fn post_command(&self, _parser: &Parser<S>, _caller: &Caller<'_, S>) {}

    /// Nothing ran for the line.
    fn huh(&self, parser: &Parser<S>, caller: &Caller<'_, S>) {
        let session = caller.session();
        session.notify(&parser.messages().huh);
        if let Some(hint) = parser.suggestion_hint(caller.command()) {
            session.notify(&hint);
        }
    }

    /// A handler failed. The error is available from [`Caller::exception`].
    fn on_error(&self, parser: &Parser<S>, caller: &Caller<'_, S>) {
        caller.session().notify(&parser.messages().error);
    }

    /// `parser` has just become the active parser for `session`.
    fn on_attach(&self, _parser: &Parser<S>, _session: &S, _previous: Option<&Parser<S>>) {}

    /// `parser` is being replaced by `next` for `session`.
    fn on_detach(&self, _parser: &Parser<S>, _session: &S, _next: &Parser<S>) {}
}

/// The stock behaviour of every hook.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHooks;

impl<S: Session> ParserHooks<S> for DefaultHooks {}
