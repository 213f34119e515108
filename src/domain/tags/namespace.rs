//! Tag namespaces
//!
//! Any tag name doubles as a namespace: `project` contains `project` itself
//! plus every known tag shaped like `project:...`. The prefix comparison is
//! case-insensitive and is evaluated against the tag universe captured when
//! the expander is built, so each query sees the current set of tags.

use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;

/// Separator between a namespace and the name nested inside it
pub const NAMESPACE_SEPARATOR: char = ':';

/// Build the anchored pattern matching tags nested under `name`
///
/// The name is escaped, so characters like `.` or `|` only ever match
/// themselves. A pattern that still fails to build yields `None` and matches
/// nothing nested.
fn namespace_pattern(name: &str) -> Option<Regex> {
    let pattern = format!("^{}{}.*$", regex::escape(name), NAMESPACE_SEPARATOR);
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(regex) => Some(regex),
        Err(e) => {
            debug!("namespace '{}' is not a usable prefix: {}", name, e);
            None
        }
    }
}

/// Whether `id` is `namespace` itself or nested under it
///
/// Plain string comparison, case-insensitive. Used for page identifiers,
/// which are never interpreted as patterns.
pub fn namespace_contains(namespace: &str, id: &str) -> bool {
    let namespace = namespace.to_lowercase();
    let id = id.to_lowercase();
    id == namespace
        || id
            .strip_prefix(&namespace)
            .is_some_and(|rest| rest.starts_with(NAMESPACE_SEPARATOR))
}

/// Expands a tag name into every known tag living under it
#[derive(Debug, Clone, Default)]
pub struct NamespaceExpander {
    universe: BTreeSet<String>,
}

impl NamespaceExpander {
    pub fn new(universe: BTreeSet<String>) -> Self {
        Self { universe }
    }

    /// Known tags equal to `name` or nested under `name:`
    pub fn tags_under_namespace(&self, name: &str) -> BTreeSet<String> {
        let pattern = namespace_pattern(name);

        self.universe
            .iter()
            .filter(|tag| {
                tag.as_str() == name || pattern.as_ref().is_some_and(|re| re.is_match(tag))
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expander(tags: &[&str]) -> NamespaceExpander {
        NamespaceExpander::new(tags.iter().map(|t| t.to_string()).collect())
    }

    fn under(e: &NamespaceExpander, name: &str) -> Vec<String> {
        e.tags_under_namespace(name).into_iter().collect()
    }

    #[test]
    fn test_includes_self_and_children() {
        let e = expander(&["ns", "ns:x", "ns:y", "other"]);
        assert_eq!(under(&e, "ns"), vec!["ns", "ns:x", "ns:y"]);
    }

    #[test]
    fn test_children_without_parent_tag() {
        let e = expander(&["ns:x", "ns:y"]);
        assert_eq!(under(&e, "ns"), vec!["ns:x", "ns:y"]);
    }

    #[test]
    fn test_prefix_requires_separator() {
        let e = expander(&["ns", "nsx", "ns_y"]);
        assert_eq!(under(&e, "ns"), vec!["ns"]);
    }

    #[test]
    fn test_nested_namespaces() {
        let e = expander(&["a:b", "a:b:c", "a:bc"]);
        assert_eq!(under(&e, "a:b"), vec!["a:b", "a:b:c"]);
        assert_eq!(under(&e, "a"), vec!["a:b", "a:b:c", "a:bc"]);
    }

    #[test]
    fn test_prefix_case_insensitive() {
        let e = expander(&["Project:Alpha", "project:beta"]);
        assert_eq!(under(&e, "PROJECT"), vec!["Project:Alpha", "project:beta"]);
    }

    #[test]
    fn test_exact_match_case_sensitive() {
        let e = expander(&["Topic"]);
        assert!(under(&e, "topic").is_empty());
        assert_eq!(under(&e, "Topic"), vec!["Topic"]);
    }

    #[test]
    fn test_pattern_characters_match_literally() {
        let e = expander(&["broken(", "broken(:child", "other"]);
        assert_eq!(under(&e, "broken("), vec!["broken(", "broken(:child"]);
    }

    #[test]
    fn test_pattern_characters_do_not_widen_namespace() {
        let e = expander(&[
            "v1.0", "v1.0:rc", "v1x0:beta", "a|b", "a|b:c", "apple", "ant:x",
        ]);
        assert_eq!(under(&e, "v1.0"), vec!["v1.0", "v1.0:rc"]);
        assert_eq!(under(&e, "a|b"), vec!["a|b", "a|b:c"]);
    }

    #[test]
    fn test_unknown_namespace() {
        let e = expander(&["a", "b"]);
        assert!(under(&e, "c").is_empty());
    }

    #[test]
    fn test_namespace_contains() {
        assert!(namespace_contains("wiki", "wiki"));
        assert!(namespace_contains("wiki", "wiki:start"));
        assert!(namespace_contains("Wiki", "wiki:deep:page"));
        assert!(!namespace_contains("wiki", "wikipedia"));
        assert!(!namespace_contains("wiki:start", "wiki"));
    }
}
