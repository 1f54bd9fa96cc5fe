//! Argument patterns.
//!
//! A command may carry an [`ArgsPattern`] that the argument text of a line
//! must match before the command's handler runs. A pattern either yields the
//! captured values or reports no match; what it matches against is up to the
//! implementation.

mod regexp;
mod signature;

pub use regexp::RegexPattern;
pub use signature::SignaturePattern;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use std::{fmt::Debug, sync::Arc};

pub trait ArgsPattern: Debug + Send + Sync {
    /// Match `text`, returning the captures or `None` if it does not fit.
    fn captures(&self, text: &str) -> Option<Captures>;
}

/// Values captured from the argument text of a line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures {
    positional: Vec<Option<String>>,
    named: IndexMap<String, Option<String>>,
}

impl Captures {
    pub fn new(positional: Vec<Option<String>>, named: IndexMap<String, Option<String>>) -> Self {
        Self { positional, named }
    }

    /// Every capture in order. Groups that took no part in the match are `None`.
    pub fn positional(&self) -> &[Option<String>] {
        &self.positional
    }

    pub fn named(&self) -> &IndexMap<String, Option<String>> {
        &self.named
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.positional.get(index).and_then(|value| value.as_deref())
    }

    pub fn name(&self, name: &str) -> Option<&str> {
        self.named.get(name).and_then(|value| value.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

lazy_static! {
    /// At least one character of free text, captured whole.
    pub static ref TEXT: Arc<RegexPattern> =
        Arc::new(RegexPattern::new("(.+)").expect("TEXT pattern is valid"));

    /// A single word with nothing after it.
    pub static ref WORD: Arc<RegexPattern> =
        Arc::new(RegexPattern::new(r"(\S+)\s*$").expect("WORD pattern is valid"));
}
