//! Tag index built from wiki pages
//!
//! Pages declare their tags with a `{{tag>...}}` directive holding whitespace
//! separated tag names, for example `{{tag>project:alpha urgent}}`. A page
//! may carry several directives; their tags are merged.

use crate::domain::tags::MemoryIndex;
use crate::infrastructure::config::Config;
use crate::infrastructure::repository::FileSystemRepository;
use log::{debug, warn};
use regex::Regex;
use std::sync::OnceLock;

/// Regex for tag directives: {{tag>a b ns:c}}
fn tag_directive_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\{\{tag>([^}]*)\}\}").unwrap())
}

/// Extract tags from page text, keeping their original case
pub fn extract_tags(text: &str) -> Vec<String> {
    tag_directive_regex()
        .captures_iter(text)
        .flat_map(|cap| {
            cap[1]
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

pub struct FileSystemIndex;

impl FileSystemIndex {
    /// Scan every page under the repository root
    ///
    /// Unreadable pages are logged and left out, so the index is always
    /// complete for what could be read.
    pub fn scan(repository: &FileSystemRepository, config: &Config) -> MemoryIndex {
        let mut index = MemoryIndex::new();

        for page in repository.list_pages(config) {
            let content = match repository.read_page(&page) {
                Ok(content) => content,
                Err(e) => {
                    warn!("skipping page {}: {}", page.path.display(), e);
                    continue;
                }
            };
            let tags = extract_tags(&content);
            if !tags.is_empty() {
                index.add_page(&page.id, tags);
            }
        }

        debug!("indexed {} tagged pages", index.page_count());
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tags::ContentIndex;
    use crate::infrastructure::repository::WikiRepository;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_tags() {
        let text = "Intro\n{{tag>project:alpha  Urgent}}\nmore {{tag>review}}";
        assert_eq!(extract_tags(text), vec!["project:alpha", "Urgent", "review"]);
    }

    #[test]
    fn test_extract_tags_ignores_hashtags_and_empty_directive() {
        assert!(extract_tags("#work {{tag>}} {{tag>   }}").is_empty());
    }

    #[test]
    fn test_extract_tags_unicode() {
        assert_eq!(extract_tags("{{tag>食物 水果:苹果}}"), vec!["食物", "水果:苹果"]);
    }

    #[test]
    fn test_scan_builds_index() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        fs::create_dir_all(temp.path().join("projects")).unwrap();
        fs::write(
            temp.path().join("projects/alpha.md"),
            "{{tag>project urgent}}",
        )
        .unwrap();
        fs::write(temp.path().join("start.txt"), "{{tag>project}}").unwrap();
        fs::write(temp.path().join("untagged.md"), "nothing here").unwrap();

        let index = FileSystemIndex::scan(&repo, &Config::default());
        assert_eq!(index.page_count(), 2);

        let ids: Vec<String> = index.lookup("project").into_iter().collect();
        assert_eq!(ids, vec!["projects:alpha", "start"]);
        let tags: Vec<String> = index.all_tags().into_iter().collect();
        assert_eq!(tags, vec!["project", "urgent"]);
    }
}
