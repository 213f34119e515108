//! Config management use case

use crate::domain::ResolveStrategy;
use crate::error::{Result, TagcomboError};
use crate::infrastructure::config::parse_list;
use crate::infrastructure::{Config, FileSystemRepository, WikiRepository};
use std::str::FromStr;

/// Service for managing wiki configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "extensions" => Ok(config.extensions.join(",")),
            "hidden_namespaces" => Ok(config.hidden_namespaces.join(",")),
            "strategy" => Ok(config.strategy.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TagcomboError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: extensions, hidden_namespaces, strategy, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "extensions" => {
                let extensions = parse_list(value);
                if extensions.is_empty() {
                    return Err(TagcomboError::Config(
                        "At least one page extension is required".to_string(),
                    ));
                }
                config.extensions = extensions;
            }
            "hidden_namespaces" => {
                config.hidden_namespaces = parse_list(value);
            }
            "strategy" => {
                config.strategy = ResolveStrategy::from_str(value).map_err(TagcomboError::Config)?;
            }
            "created" => {
                return Err(TagcomboError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TagcomboError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: extensions, hidden_namespaces, strategy",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
