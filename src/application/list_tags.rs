//! List tags use case

use crate::domain::tags::ContentIndex;
use crate::error::Result;
use crate::infrastructure::repository::WikiRepository;
use crate::infrastructure::{FileSystemIndex, FileSystemRepository};

/// Service for listing all tags used in pages.
pub struct ListTagsService {
    repository: FileSystemRepository,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Every tag carried by at least one page, sorted.
    pub fn execute(&self) -> Result<Vec<String>> {
        let config = self.repository.load_config()?;
        let index = FileSystemIndex::scan(&self.repository, &config);
        Ok(index.all_tags().into_iter().collect())
    }
}
