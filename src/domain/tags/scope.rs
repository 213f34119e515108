//! Page scope restriction

use crate::domain::tags::index::ContentId;
use crate::domain::tags::namespace::namespace_contains;
use std::collections::BTreeSet;

/// Optional page namespace a search is restricted to
///
/// The scope travels with a query but is applied once, to the combined
/// result, by whoever asked for the search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageScope(Option<String>);

impl PageScope {
    /// Scope covering every page
    pub fn all() -> Self {
        PageScope(None)
    }

    /// Scope from user input; blank input means no restriction
    pub fn new(namespace: &str) -> Self {
        let trimmed = namespace.trim().trim_matches(':');
        if trimmed.is_empty() {
            PageScope(None)
        } else {
            PageScope(Some(trimmed.to_string()))
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn contains(&self, id: &str) -> bool {
        match &self.0 {
            None => true,
            Some(namespace) => namespace_contains(namespace, id),
        }
    }

    /// Drop identifiers outside the scope
    pub fn retain(&self, ids: &mut BTreeSet<ContentId>) {
        if self.0.is_some() {
            ids.retain(|id| self.contains(id));
        }
    }
}

impl From<Option<String>> for PageScope {
    fn from(namespace: Option<String>) -> Self {
        namespace.map(|ns| PageScope::new(&ns)).unwrap_or_default()
    }
}

impl std::fmt::Display for PageScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            None => f.write_str("*"),
            Some(namespace) => write!(f, "{}:*", namespace),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_scope_is_unrestricted() {
        assert_eq!(PageScope::new("  "), PageScope::all());
        assert!(PageScope::new("").contains("any:page"));
    }

    #[test]
    fn test_scope_trims_separators() {
        assert_eq!(PageScope::new(":projects:").namespace(), Some("projects"));
    }

    #[test]
    fn test_retain_keeps_namespace_members() {
        let scope = PageScope::new("projects");
        let mut ids: BTreeSet<ContentId> =
            ["projects:alpha", "projects", "home:start", "projectsx"]
                .iter()
                .map(|s| s.to_string())
                .collect();
        scope.retain(&mut ids);
        let kept: Vec<String> = ids.into_iter().collect();
        assert_eq!(kept, vec!["projects", "projects:alpha"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(PageScope::all().to_string(), "*");
        assert_eq!(PageScope::new("wiki").to_string(), "wiki:*");
    }
}
