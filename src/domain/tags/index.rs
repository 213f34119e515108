//! Content index and access collaborators
//!
//! The engine never reads pages itself. It asks a [`ContentIndex`] which
//! pages carry a tag and which tags exist at all, and asks an
//! [`AccessPolicy`] whether the current reader may see a page. Both are
//! total: absence is an empty set or a denial, never an error.

use std::collections::{BTreeMap, BTreeSet};

/// Opaque identifier of an indexed page
pub type ContentId = String;

/// Inverted index from tag to page identifiers
pub trait ContentIndex {
    /// Pages tagged with exactly `tag`
    fn lookup(&self, tag: &str) -> BTreeSet<ContentId>;

    /// Every tag known to the index
    fn all_tags(&self) -> BTreeSet<String>;
}

/// Visibility check for the current reader
pub trait AccessPolicy {
    fn can_view(&self, id: &str) -> bool;
}

impl<F> AccessPolicy for F
where
    F: Fn(&str) -> bool,
{
    fn can_view(&self, id: &str) -> bool {
        self(id)
    }
}

/// Policy that lets every page through
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccessPolicy for AllowAll {
    fn can_view(&self, _id: &str) -> bool {
        true
    }
}

/// In-memory index keyed by page
#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    pages: BTreeMap<ContentId, BTreeSet<String>>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MemoryIndex::add_page`]
    pub fn with_page<I, S>(mut self, id: &str, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_page(id, tags);
        self
    }

    /// Record `tags` on page `id`, merging with tags already recorded
    pub fn add_page<I, S>(&mut self, id: &str, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pages
            .entry(id.to_string())
            .or_default()
            .extend(tags.into_iter().map(Into::into));
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn tags_of(&self, id: &str) -> Option<&BTreeSet<String>> {
        self.pages.get(id)
    }
}

impl ContentIndex for MemoryIndex {
    fn lookup(&self, tag: &str) -> BTreeSet<ContentId> {
        self.pages
            .iter()
            .filter(|(_, tags)| tags.contains(tag))
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn all_tags(&self) -> BTreeSet<String> {
        self.pages.values().flatten().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryIndex {
        MemoryIndex::new()
            .with_page("p1", ["work", "urgent"])
            .with_page("p2", ["work"])
            .with_page("p3", ["home"])
    }

    #[test]
    fn test_lookup_exact_tag() {
        let index = sample();
        let ids: Vec<String> = index.lookup("work").into_iter().collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let index = sample();
        assert!(index.lookup("Work").is_empty());
    }

    #[test]
    fn test_lookup_unknown_tag() {
        assert!(sample().lookup("missing").is_empty());
    }

    #[test]
    fn test_all_tags_deduplicated() {
        let tags: Vec<String> = sample().all_tags().into_iter().collect();
        assert_eq!(tags, vec!["home", "urgent", "work"]);
    }

    #[test]
    fn test_add_page_merges_tags() {
        let mut index = MemoryIndex::new();
        index.add_page("p1", ["a"]);
        index.add_page("p1", ["b"]);
        assert_eq!(index.page_count(), 1);
        assert_eq!(index.tags_of("p1").map(|t| t.len()), Some(2));
    }

    #[test]
    fn test_closure_policy() {
        let policy = |id: &str| id != "secret";
        assert!(policy.can_view("p1"));
        assert!(!policy.can_view("secret"));
        assert!(AllowAll.can_view("secret"));
    }
}
