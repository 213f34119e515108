//! File system repository

use crate::domain::tags::NAMESPACE_SEPARATOR;
use crate::error::{Result, TagcomboError};
use crate::infrastructure::composition_store::CompositionStore;
use crate::infrastructure::config::{Config, DATA_DIR};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A page file found in the wiki directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFile {
    /// Namespaced page id, e.g. `projects:alpha`
    pub id: String,
    /// Path relative to the wiki root
    pub path: PathBuf,
}

impl PageFile {
    pub fn new(id: String, path: PathBuf) -> Self {
        PageFile { id, path }
    }
}

/// Abstract repository for wiki operations
pub trait WikiRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .tagcombo/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .tagcombo/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .tagcombo directory exists
    fn is_initialized(&self) -> bool;

    /// Create .tagcombo directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of WikiRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover wiki root by walking up from current directory
    /// First checks TAGCOMBO_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TAGCOMBO_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TagcomboError::Config(format!(
                    "TAGCOMBO_ROOT is set to '{}' but no .tagcombo directory found. \
                    Run 'tagcombo init' in that directory or unset TAGCOMBO_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover wiki root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_data_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(TagcomboError::NotInitialized(start.to_path_buf())),
            }
        }
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }

    /// Composition store of this wiki
    pub fn composition_store(&self) -> CompositionStore {
        CompositionStore::in_dir(&self.root)
    }
}

impl WikiRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let data_dir = self.root.join(DATA_DIR);

        if data_dir.exists() {
            return Err(TagcomboError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&data_dir)?;
        Ok(())
    }
}

// Page operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Read page content (returns empty string if file doesn't exist)
    pub fn read_page(&self, page: &PageFile) -> Result<String> {
        let path = self.root.join(&page.path);

        if !path.exists() {
            return Ok(String::new());
        }

        fs::read_to_string(&path).map_err(TagcomboError::Io)
    }

    /// Turn a relative page path into a namespaced page id
    ///
    /// `projects/alpha.md` becomes `projects:alpha`.
    pub fn page_id_from_relative_path(rel: &Path) -> Option<String> {
        let stem = rel.with_extension("");
        let parts: Vec<&str> = stem
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        if parts.is_empty() {
            return None;
        }
        Some(parts.join(&NAMESPACE_SEPARATOR.to_string()))
    }

    /// List every page file below the root, sorted by id
    ///
    /// Hidden directories (including .tagcombo) are skipped.
    pub fn list_pages(&self, config: &Config) -> Vec<PageFile> {
        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        let mut pages = Vec::new();
        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if !config.is_page_file(name) {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            if let Some(id) = Self::page_id_from_relative_path(rel) {
                pages.push(PageFile::new(id, rel.to_path_buf()));
            }
        }

        pages.sort_by(|a, b| a.id.cmp(&b.id));
        pages
    }
}
