//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application settings by
//! the binary.

use punchline_domain::{DEFAULT_HISTORY_LIMIT, DEFAULT_PERSONA, DEFAULT_PREVIEW_ROWS, Model};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("persona cannot be empty")]
    EmptyPersona,

    #[error("history_limit must be at least 2 (one exchange), got {0}")]
    HistoryLimitTooSmall(usize),

    #[error("preview_rows cannot be 0")]
    InvalidPreviewRows,

    #[error("api_key_name cannot be empty")]
    EmptyApiKeyName,
}

/// Raw chat configuration from TOML (`[chat]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Model identifier sent with every request
    pub model: String,
    /// Instruction leading every request
    pub persona: String,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            persona: DEFAULT_PERSONA.to_string(),
        }
    }
}

/// Raw provider configuration from TOML (`[provider]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL of the Mistral API
    pub base_url: String,
    /// Timeout in seconds for completion calls
    pub timeout_seconds: Option<u64>,
    /// Explicit secrets file (otherwise the default search path is used)
    pub secrets_file: Option<PathBuf>,
    /// Key holding the API key inside the secrets file
    pub api_key_name: String,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mistral.ai".to_string(),
            timeout_seconds: Some(60),
            secrets_file: None,
            api_key_name: "mistral_key".to_string(),
        }
    }
}

/// Raw session configuration from TOML (`[session]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Messages kept in the history (two per exchange)
    pub history_limit: usize,
    /// Data rows shown in a table preview
    pub preview_rows: usize,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

/// Raw output configuration from TOML (`[output]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Raw REPL configuration from TOML (`[repl]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the spinner while the bot is thinking
    pub show_progress: bool,
    /// Path to the line-editing history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Raw logging configuration from TOML (`[logging]`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of the session; disabled when unset
    pub conversation_log: Option<PathBuf>,
    /// Directory for the rolling diagnostic log; disabled when unset
    pub log_dir: Option<PathBuf>,
}

/// Root of the TOML configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub chat: FileChatConfig,
    pub provider: FileProviderConfig,
    pub session: FileSessionConfig,
    pub output: FileOutputConfig,
    pub repl: FileReplConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.provider.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.chat.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.chat.persona.trim().is_empty() {
            return Err(ConfigValidationError::EmptyPersona);
        }

        if self.session.history_limit < 2 {
            return Err(ConfigValidationError::HistoryLimitTooSmall(
                self.session.history_limit,
            ));
        }

        if self.session.preview_rows == 0 {
            return Err(ConfigValidationError::InvalidPreviewRows);
        }

        if self.provider.api_key_name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyApiKeyName);
        }

        Ok(())
    }

    /// The configured model, parsed
    pub fn model(&self) -> Result<Model, ConfigValidationError> {
        self.chat
            .model
            .parse()
            .map_err(|_| ConfigValidationError::EmptyModelName)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[chat]
model = "mistral-small-latest"
persona = "Réponds en alexandrins."

[provider]
base_url = "http://localhost:8080"
timeout_seconds = 120
secrets_file = "/etc/punchline/secrets.toml"
api_key_name = "mistral"

[session]
history_limit = 6
preview_rows = 3

[output]
color = false

[repl]
show_progress = false
history_file = "~/.local/share/punchline/history.txt"

[logging]
conversation_log = "/tmp/punchline.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.model().unwrap(), Model::MistralSmall);
        assert_eq!(config.chat.persona, "Réponds en alexandrins.");
        assert_eq!(config.provider.base_url, "http://localhost:8080");
        assert_eq!(config.provider.timeout_seconds, Some(120));
        assert_eq!(
            config.provider.secrets_file,
            Some(PathBuf::from("/etc/punchline/secrets.toml"))
        );
        assert_eq!(config.provider.api_key_name, "mistral");
        assert_eq!(config.session.history_limit, 6);
        assert_eq!(config.session.preview_rows, 3);
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.logging.conversation_log,
            Some(PathBuf::from("/tmp/punchline.jsonl"))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[chat]
model = "open-mistral-nemo"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.model().unwrap(), Model::OpenMistralNemo);
        assert_eq!(config.chat.persona, DEFAULT_PERSONA);
        assert_eq!(config.session.history_limit, DEFAULT_HISTORY_LIMIT);
        assert_eq!(config.provider.api_key_name, "mistral_key");
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.chat.model, "mistral-large-latest");
        assert_eq!(config.session.history_limit, 10);
        assert_eq!(config.session.preview_rows, 5);
        assert!(config.output.color);
        assert!(config.logging.conversation_log.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = FileConfig::default();
        config.provider.timeout_seconds = Some(0);
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        );
    }

    #[test]
    fn test_validate_empty_model_name() {
        let mut config = FileConfig::default();
        config.chat.model = "  ".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyModelName)
        );
    }

    #[test]
    fn test_validate_history_limit() {
        let mut config = FileConfig::default();
        config.session.history_limit = 1;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::HistoryLimitTooSmall(1))
        );
    }

    #[test]
    fn test_validate_preview_rows() {
        let mut config = FileConfig::default();
        config.session.preview_rows = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidPreviewRows)
        );
    }
}
