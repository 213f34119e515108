//! Composition editing use cases

use crate::domain::tags::{
    split_components, CompositionGraph, CompositionMap, ContentIndex, NamespaceExpander,
};
use crate::error::Result;
use crate::infrastructure::repository::WikiRepository;
use crate::infrastructure::{CompositionStore, FileSystemIndex, FileSystemRepository};
use std::collections::BTreeSet;

/// Everything a tag is related to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionView {
    pub tag: String,
    /// Tags this tag is composed of
    pub components: Vec<String>,
    /// Tags composed using this tag
    pub dependents: BTreeSet<String>,
    /// Known tags nested under this tag's namespace, excluding the tag itself
    pub namespace_members: BTreeSet<String>,
}

/// Service for reading and editing compositions
pub struct CompositionService {
    repository: FileSystemRepository,
    store: CompositionStore,
}

impl CompositionService {
    pub fn new(repository: FileSystemRepository) -> Self {
        let store = repository.composition_store();
        CompositionService { repository, store }
    }

    /// Composition text of `tag`
    pub fn get(&self, tag: &str) -> String {
        self.store.get(tag)
    }

    /// Replace the composition of `tag` with `components`
    ///
    /// Components are normalised to single-space separated names.
    pub fn set(&self, tag: &str, components: &[String]) -> Result<String> {
        let text = components
            .iter()
            .flat_map(|c| split_components(c))
            .collect::<Vec<_>>()
            .join(" ");
        self.store.set(tag, &text)?;
        Ok(text)
    }

    pub fn remove(&self, tag: &str) -> Result<bool> {
        self.store.remove(tag)
    }

    /// All stored compositions
    pub fn list(&self) -> CompositionMap {
        self.store.load()
    }

    /// Components, dependents and namespace members of `tag`
    pub fn show(&self, tag: &str) -> Result<CompositionView> {
        let config = self.repository.load_config()?;
        let index = FileSystemIndex::scan(&self.repository, &config);
        let graph = CompositionGraph::new(self.store.load());
        let namespaces = NamespaceExpander::new(index.all_tags());

        let mut namespace_members = namespaces.tags_under_namespace(tag);
        namespace_members.remove(tag);

        Ok(CompositionView {
            tag: tag.to_string(),
            components: graph.components_of(tag),
            dependents: graph.dependents_of(tag),
            namespace_members,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Config;
    use std::fs;
    use tempfile::TempDir;

    fn service() -> (TempDir, CompositionService) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::default()).unwrap();
        (temp, CompositionService::new(repo))
    }

    #[test]
    fn test_set_normalises_whitespace() {
        let (_temp, svc) = service();
        let text = svc
            .set("fruit", &["apple  pear".to_string(), "\ncherry".to_string()])
            .unwrap();
        assert_eq!(text, "apple pear cherry");
        assert_eq!(svc.get("fruit"), "apple pear cherry");
    }

    #[test]
    fn test_set_empty_components_clears_text() {
        let (_temp, svc) = service();
        svc.set("fruit", &["apple".to_string()]).unwrap();
        svc.set("fruit", &[]).unwrap();
        assert_eq!(svc.get("fruit"), "");
        assert!(svc.list().contains_key("fruit"));
    }

    #[test]
    fn test_remove_and_list() {
        let (_temp, svc) = service();
        svc.set("a", &["b".to_string()]).unwrap();
        svc.set("c", &["d".to_string()]).unwrap();
        assert!(svc.remove("a").unwrap());
        assert_eq!(svc.list().keys().collect::<Vec<_>>(), vec!["c"]);
    }

    #[test]
    fn test_show() {
        let (temp, svc) = service();
        fs::write(temp.path().join("p.md"), "{{tag>team team:red team:blue}}").unwrap();
        svc.set("team", &["staff".to_string()]).unwrap();
        svc.set("people", &["team".to_string()]).unwrap();

        let view = svc.show("team").unwrap();
        assert_eq!(view.components, vec!["staff"]);
        assert_eq!(view.dependents.into_iter().collect::<Vec<_>>(), vec!["people"]);
        assert_eq!(
            view.namespace_members.into_iter().collect::<Vec<_>>(),
            vec!["team:blue", "team:red"]
        );
    }
}
