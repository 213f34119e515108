//! Error types for tagcombo

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tagcombo
#[derive(Debug, Error)]
pub enum TagcomboError {
    #[error("Not a tagcombo directory: {0}")]
    NotInitialized(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not lock composition store: {0}")]
    Lock(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TagcomboError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagcomboError::NotInitialized(_) => 2,
            TagcomboError::Lock(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagcomboError::NotInitialized(path) => {
                format!(
                    "Not a tagcombo directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'tagcombo init' in your wiki directory\n\
                    • Navigate to an existing wiki directory\n\
                    • Set TAGCOMBO_ROOT environment variable to your wiki path",
                    path.display()
                )
            }
            TagcomboError::Lock(msg) => {
                format!(
                    "Could not lock composition store: {}\n\n\
                    Suggestions:\n\
                    • Another tagcombo process may be editing compositions\n\
                    • Retry once it has finished",
                    msg
                )
            }
            TagcomboError::Config(msg) => {
                if msg.contains("Invalid strategy") {
                    format!(
                        "{}\n\n\
                        Valid strategies: recursive, closure\n\
                        Example: tagcombo config strategy closure",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagcomboError
pub type Result<T> = std::result::Result<T, TagcomboError>;
