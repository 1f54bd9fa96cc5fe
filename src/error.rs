use std::path::PathBuf;
use thiserror::Error;

/// Error type handlers hand back when they fail.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid regular expression: {0}")]
    Regex(#[from] regex::Error),

    #[error("invalid signature template {template:?} near {near:?}")]
    Template { template: String, near: String },

    #[error("capture {0:?} takes the rest of the line and must come last")]
    RestNotLast(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("override config path does not exist: {}", .0.display())]
    Missing(PathBuf),

    #[error("error reading config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("substitution key {0:?} must be exactly one character")]
    SubstitutionKey(String),

    #[error("command separator must not be empty")]
    EmptySeparator,

    #[error("default argument pattern: {0}")]
    Pattern(#[from] PatternError),
}
