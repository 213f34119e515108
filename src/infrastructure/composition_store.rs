//! Composition persistence
//!
//! All compositions live in one JSON object, `{"tag": "component text", ...}`,
//! stored at `.tagcombo/compositions.json`. The document is always read and
//! written whole.
//!
//! Reading never fails on content: a missing, empty or unparsable document
//! is an empty mapping. Writes of anything that is not an object of strings
//! are refused without touching the stored document.

use crate::domain::tags::CompositionMap;
use crate::error::Result;
use crate::infrastructure::config::DATA_DIR;
use crate::infrastructure::lock::StoreLock;
use log::{debug, warn};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const STORE_FILE: &str = "compositions.json";
const LOCK_FILE: &str = "compositions.lock";

/// File-backed mapping from main tag to composition text
#[derive(Debug, Clone)]
pub struct CompositionStore {
    path: PathBuf,
    lock_path: PathBuf,
}

impl CompositionStore {
    /// Store inside the data directory of the wiki at `root`
    pub fn in_dir(root: &Path) -> Self {
        let data_dir = root.join(DATA_DIR);
        Self {
            path: data_dir.join(STORE_FILE),
            lock_path: data_dir.join(LOCK_FILE),
        }
    }

    /// Store at an explicit file path
    pub fn at(path: PathBuf) -> Self {
        let lock_path = path.with_extension("lock");
        Self { path, lock_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full mapping
    pub fn load(&self) -> CompositionMap {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("cannot read {}: {}", self.path.display(), e);
                }
                return CompositionMap::new();
            }
        };

        if contents.trim().is_empty() {
            return CompositionMap::new();
        }

        match serde_json::from_str::<Value>(&contents) {
            Ok(document) => match mapping_from_document(&document) {
                Some(map) => map,
                None => {
                    warn!(
                        "{} does not hold a JSON object, treating as empty",
                        self.path.display()
                    );
                    CompositionMap::new()
                }
            },
            Err(e) => {
                warn!(
                    "{} is not valid JSON ({}), treating as empty",
                    self.path.display(),
                    e
                );
                CompositionMap::new()
            }
        }
    }

    /// Replace the stored document with `map`
    pub fn save(&self, map: &CompositionMap) -> Result<()> {
        let contents = serde_json::to_string_pretty(map)?;
        self.write_atomic(&contents)
    }

    /// Save an untyped document, refusing anything but an object of strings
    pub fn save_document(&self, document: &Value) -> Result<()> {
        let Some(map) = strict_mapping(document) else {
            warn!("refusing to save composition payload that is not an object of strings");
            return Ok(());
        };
        self.save(&map)
    }

    /// Save raw JSON text, refusing anything but an object of strings
    pub fn save_text(&self, text: &str) -> Result<()> {
        match serde_json::from_str::<Value>(text) {
            Ok(document) => self.save_document(&document),
            Err(e) => {
                warn!("refusing to save malformed composition JSON: {}", e);
                Ok(())
            }
        }
    }

    /// Composition text of `tag`, empty when unset
    pub fn get(&self, tag: &str) -> String {
        if tag.is_empty() {
            return String::new();
        }
        self.load().remove(tag).unwrap_or_default()
    }

    /// Set the composition text of `tag`, rewriting the whole document
    pub fn set(&self, tag: &str, text: &str) -> Result<()> {
        if tag.is_empty() {
            return Ok(());
        }
        debug!("setting composition of '{}' to '{}'", tag, text);

        let _lock = StoreLock::acquire(&self.lock_path)?;
        let mut map = self.load();
        map.insert(tag.to_string(), text.to_string());
        self.save(&map)
    }

    /// Remove the entry for `tag`; returns whether it existed
    pub fn remove(&self, tag: &str) -> Result<bool> {
        if tag.is_empty() {
            return Ok(false);
        }

        let _lock = StoreLock::acquire(&self.lock_path)?;
        let mut map = self.load();
        if map.remove(tag).is_none() {
            return Ok(false);
        }
        self.save(&map)?;
        Ok(true)
    }

    /// Write to a temp file beside the store, then rename into place
    fn write_atomic(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or(STORE_FILE),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

/// Lenient conversion used when reading: non-string values are skipped
fn mapping_from_document(document: &Value) -> Option<CompositionMap> {
    let object = document.as_object()?;
    let mut map = CompositionMap::new();
    for (tag, value) in object {
        match value.as_str() {
            Some(text) => {
                map.insert(tag.clone(), text.to_string());
            }
            None => warn!("skipping non-text composition for '{}'", tag),
        }
    }
    Some(map)
}

/// Strict conversion used when writing: every value must be a string
fn strict_mapping(document: &Value) -> Option<CompositionMap> {
    document
        .as_object()?
        .iter()
        .map(|(tag, value)| value.as_str().map(|text| (tag.clone(), text.to_string())))
        .collect()
}
