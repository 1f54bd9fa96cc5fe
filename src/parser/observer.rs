use std::error::Error;
use tracing::{debug, warn};

/// Receives a record of what happened while lines were resolved.
///
/// The parser holds one as `Arc<dyn Observer>`; the default writes
/// `tracing` events.
pub trait Observer: Send + Sync {
    /// A handler failed. Sibling commands are still tried.
    fn handler_failed(&self, names: &[String], line: &str, error: &(dyn Error + Send + Sync));

    /// A handler returned `Outcome::Continue`.
    fn handler_declined(&self, _names: &[String], _line: &str) {}

    /// The argument text did not match a command's pattern.
    fn arguments_rejected(&self, _names: &[String], _args: &str) {}

    /// No command ran for the line.
    fn unresolved(&self, _line: &str) {}

    /// A command registered with bulk defaults set `field` itself, so the
    /// default for it was ignored.
    fn default_overridden(&self, _field: &str, _names: &[String]) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn handler_failed(&self, names: &[String], line: &str, error: &(dyn Error + Send + Sync)) {
        warn!(command = ?names, line, error = %error, "command handler failed");
    }

    fn handler_declined(&self, names: &[String], line: &str) {
        debug!(command = ?names, line, "command handler passed the line on");
    }

    fn arguments_rejected(&self, names: &[String], args: &str) {
        debug!(command = ?names, args, "arguments did not match");
    }

    fn unresolved(&self, line: &str) {
        debug!(line, "no command matched");
    }

    fn default_overridden(&self, field: &str, names: &[String]) {
        warn!(command = ?names, field, "value given twice; keeping the command's own");
    }
}
