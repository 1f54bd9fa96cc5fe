use super::{ArgsPattern, Captures};
use crate::error::PatternError;
use regex::Regex;

/// A regular expression matched at the start of the argument text.
///
/// The expression is anchored at the beginning only, so `(\w+)` accepts
/// `"north quickly"` and captures `north`. Add `$` to reject trailing text.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    source: String,
    regex: Regex,
}

impl RegexPattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&format!("^(?:{pattern})"))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl ArgsPattern for RegexPattern {
    fn captures(&self, text: &str) -> Option<Captures> {
        let found = self.regex.captures(text)?;
        let positional = found
            .iter()
            .skip(1)
            .map(|group| group.map(|m| m.as_str().to_string()))
            .collect();
        let named = self
            .regex
            .capture_names()
            .flatten()
            .map(|name| {
                let value = found.name(name).map(|m| m.as_str().to_string());
                (name.to_string(), value)
            })
            .collect();
        Some(Captures::new(positional, named))
    }
}
