use crate::parser::Parser;
use std::sync::Arc;

/// A connected party that lines come from and messages go back to.
///
/// The parser never writes output itself; every explanation, error and
/// catch-all message goes through `notify`.
pub trait Session {
    fn notify(&self, message: &str);
}

/// Replace the parser attached to `session` with `next`.
///
/// The outgoing parser sees `on_detach` before the incoming one sees
/// `on_attach`. Returns the parser that was detached.
pub fn swap_parser<S: Session>(
    session: &S,
    current: &mut Arc<Parser<S>>,
    next: Arc<Parser<S>>,
) -> Arc<Parser<S>> {
    current.on_detach(session, &next);
    next.on_attach(session, Some(&**current));
    std::mem::replace(current, next)
}
