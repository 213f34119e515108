//! Configuration management

use crate::domain::ResolveStrategy;
use crate::error::{Result, TagcomboError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-wiki data directory
pub const DATA_DIR: &str = ".tagcombo";

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "txt".to_string()]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// File extensions treated as wiki pages
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Page namespaces hidden from search results
    #[serde(default)]
    pub hidden_namespaces: Vec<String>,

    #[serde(default)]
    pub strategy: ResolveStrategy,

    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            extensions: default_extensions(),
            hidden_namespaces: Vec::new(),
            strategy: ResolveStrategy::default(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .tagcombo/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DATA_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagcomboError::NotInitialized(path.to_path_buf())
            } else {
                TagcomboError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TagcomboError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .tagcombo/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(DATA_DIR);
        let config_path = data_dir.join("config.toml");

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TagcomboError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Whether `filename` has one of the configured page extensions
    pub fn is_page_file(&self, filename: &str) -> bool {
        Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
    }
}

/// Split a comma separated config value into trimmed, non-empty items
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
