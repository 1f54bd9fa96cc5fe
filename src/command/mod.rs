pub mod builder;
pub mod caller;
pub mod registry;

use crate::error::BoxError;
use caller::Caller;
use std::sync::Arc;

/// The function a command runs once its line has been matched.
pub type Handler<S> = Box<dyn Fn(&Caller<'_, S>) -> Outcome + Send + Sync>;

/// Decides whether a command is tried at all for a given caller.
pub type Allowed<S> = Arc<dyn Fn(&Caller<'_, S>) -> bool + Send + Sync>;

/// What a handler reports back to the parser.
#[derive(Debug)]
pub enum Outcome {
    /// The line was handled; no further commands are tried.
    Completed,
    /// The line turned out not to be for this command; try the next one.
    Continue,
    /// The handler failed. The error is reported and the next command is tried.
    Failed(BoxError),
}

impl Outcome {
    pub fn failed(error: impl Into<BoxError>) -> Self {
        Outcome::Failed(error.into())
    }
}

impl<E: Into<BoxError>> From<Result<(), E>> for Outcome {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Outcome::Completed,
            Err(err) => Outcome::Failed(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_result() {
        assert!(matches!(Outcome::from(Ok::<(), String>(())), Outcome::Completed));

        match Outcome::from(Err::<(), _>("no such item")) {
            Outcome::Failed(err) => assert_eq!(err.to_string(), "no such item"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
