pub mod defaults;
use crate::error::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ParserConfig {
    /// Splits the command token from its arguments.
    #[serde(default = "defaults::separator")]
    pub separator: String,

    /// Single-character shorthands, e.g. `'"' = "say"`.
    #[serde(default)]
    pub substitutions: IndexMap<String, String>,

    /// Regular expression used by commands that do not bring their own pattern.
    #[serde(default)]
    pub default_args_pattern: Option<String>,

    #[serde(default)]
    pub messages: MessagesConfig,

    #[serde(default)]
    pub suggestions: SuggestionsConfig,

    /// Where this config was loaded from, if anywhere.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            separator: defaults::separator(),
            substitutions: IndexMap::new(),
            default_args_pattern: None,
            messages: MessagesConfig::default(),
            suggestions: SuggestionsConfig::default(),
            config_path: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MessagesConfig {
    /// Sent when nothing could be made of a line.
    #[serde(default = "defaults::messages::huh")]
    pub huh: String,
    /// Sent when a command handler fails.
    #[serde(default = "defaults::messages::error")]
    pub error: String,
    #[serde(default = "defaults::messages::no_description")]
    pub no_description: String,
    #[serde(default = "defaults::messages::no_help")]
    pub no_help: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        MessagesConfig {
            huh: defaults::messages::huh(),
            error: defaults::messages::error(),
            no_description: defaults::messages::no_description(),
            no_help: defaults::messages::no_help(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SuggestionsConfig {
    #[serde(default = "defaults::suggestions::enabled")]
    pub enabled: bool,
    /// Most names offered for one unknown command.
    #[serde(default = "defaults::suggestions::limit")]
    pub limit: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::suggestions::enabled(),
            limit: defaults::suggestions::limit(),
        }
    }
}

/// Loads parser configuration.
///
/// Sources, in order of priority:
/// 1. `path_override`, if given. It is an error for it not to exist.
/// 2. `config.toml` in the platform-specific user config directory, if present.
/// 3. Built-in defaults.
pub fn load_config(path_override: Option<String>) -> Result<ParserConfig, ConfigError> {
    if let Some(override_path) = path_override {
        let path = PathBuf::from(override_path);
        if !path.exists() {
            return Err(ConfigError::Missing(path));
        }
        return read_config_file(&path);
    }

    if let Some(config_path) = defaults::config_path() {
        if config_path.exists() {
            return read_config_file(&config_path);
        }
    }

    debug!("no config file found, using defaults");
    Ok(ParserConfig::default())
}

fn read_config_file(path: &Path) -> Result<ParserConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: ParserConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.config_path = Some(path.to_path_buf());
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.separator, " ");
        assert!(config.substitutions.is_empty());
        assert_eq!(config.messages.huh, "I don't understand that.");
        assert_eq!(config.messages.error, "There was an error with your command.");
        assert_eq!(config.messages.no_description, "No description available.");
        assert_eq!(config.messages.no_help, "No help available.");
        assert!(config.suggestions.enabled);
        assert_eq!(config.suggestions.limit, 3);
    }

    #[test]
    fn test_load_custom_config_uses_custom_values() {
        let temp_file = NamedTempFile::new().unwrap();
        let custom_config = r#"
        default_args_pattern = "(.*)"

        [substitutions]
        '"' = "say"
        ":" = "emote"

        [messages]
        huh = "Huh?"

        [suggestions]
        limit = 5
        "#;
        fs::write(&temp_file, custom_config).unwrap();

        let config = load_config(Some(temp_file.path().to_str().unwrap().to_string())).unwrap();

        // Custom values should be used
        assert_eq!(
            config.substitutions.iter().collect::<Vec<_>>(),
            vec![
                (&"\"".to_string(), &"say".to_string()),
                (&":".to_string(), &"emote".to_string())
            ]
        );
        assert_eq!(config.default_args_pattern.as_deref(), Some("(.*)"));
        assert_eq!(config.messages.huh, "Huh?");
        assert_eq!(config.suggestions.limit, 5);
        assert_eq!(config.config_path.as_deref(), Some(temp_file.path()));

        // Other values should be defaults
        assert_eq!(config.separator, " ");
        assert_eq!(config.messages.error, "There was an error with your command.");
        assert!(config.suggestions.enabled);
    }

    #[test]
    fn test_invalid_config_loading_returns_err() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(&temp_file, "this is not valid TOML").unwrap();
        let err = load_config(Some(temp_file.path().to_str().unwrap().to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_override_returns_err() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = load_config(Some(path.to_str().unwrap().to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(p) if p == path));
    }
}
