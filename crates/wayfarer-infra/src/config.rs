//! Environment configuration for Wayfarer.
//!
//! The completion provider key is required at startup (the server refuses
//! to boot without it, matching the provider's hard dependency); everything
//! else has a default.

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Model used when `WAYFARER_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
}

/// Provider configuration read from the environment.
pub struct AppConfig {
    /// Completion model identifier.
    pub model: String,
    /// OpenAI API key. Wrapped in `SecretString` so it never shows up in
    /// Debug output or logs.
    pub api_key: SecretString,
}

impl AppConfig {
    /// Read configuration from `OPENAI_API_KEY` and `WAYFARER_MODEL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let model =
            std::env::var("WAYFARER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            model,
            api_key: SecretString::from(api_key),
        })
    }
}

/// Resolve the data directory holding the database and the chat transcript.
///
/// `WAYFARER_DATA_DIR` wins; otherwise `~/.wayfarer`, falling back to a
/// relative `.wayfarer` when no home directory is known.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("WAYFARER_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(".wayfarer"))
        .unwrap_or_else(|| PathBuf::from(".wayfarer"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_ends_with_wayfarer_component() {
        let dir = resolve_data_dir();
        let last = dir.file_name().unwrap().to_string_lossy();
        assert!(last.contains("wayfarer"));
    }
}
