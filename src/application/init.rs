//! Initialize wiki use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, WikiRepository};
use std::fs;
use std::path::Path;

/// Initialize tagcombo for the wiki at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    repo.initialize()?;
    repo.save_config(&Config::default())?;

    // Start with an empty composition document
    repo.composition_store().save(&Default::default())?;

    println!("Initialized tagcombo at {}", path.display());

    Ok(())
}
