//! Tag compositions
//!
//! A composition declares that a main tag also stands for the content of a
//! list of component tags. Compositions are authored as free text, one entry
//! per main tag, with component names separated by any run of whitespace.
//!
//! The graph is derived from the flat mapping on every query and offers both
//! directions of the relation: the components of a tag, and the tags that
//! are composed using it (its dependents).

use std::collections::{BTreeMap, BTreeSet};

/// Flat mapping from main tag to its raw composition text
pub type CompositionMap = BTreeMap<String, String>;

/// Split composition text into component tag names
///
/// Any whitespace (including newlines from multi-line input) separates
/// components. Empty tokens are dropped and input order is kept.
pub fn split_components(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Read-only view over a loaded composition mapping
#[derive(Debug, Clone, Default)]
pub struct CompositionGraph {
    compositions: CompositionMap,
}

impl CompositionGraph {
    pub fn new(compositions: CompositionMap) -> Self {
        Self { compositions }
    }

    /// Components of `tag`, in authored order
    ///
    /// Tags without an entry have no components.
    pub fn components_of(&self, tag: &str) -> Vec<String> {
        self.compositions
            .get(tag)
            .map(|text| split_components(text))
            .unwrap_or_default()
    }

    /// Main tags whose composition lists `tag` as a component
    ///
    /// Scans the whole mapping. Component names are compared exactly, so a
    /// tag is never matched as a substring of a longer name.
    pub fn dependents_of(&self, tag: &str) -> BTreeSet<String> {
        self.compositions
            .iter()
            .filter(|(_, text)| text.split_whitespace().any(|component| component == tag))
            .map(|(main, _)| main.clone())
            .collect()
    }

}

impl From<CompositionMap> for CompositionGraph {
    fn from(compositions: CompositionMap) -> Self {
        Self::new(compositions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(entries: &[(&str, &str)]) -> CompositionGraph {
        CompositionGraph::new(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_split_collapses_whitespace() {
        assert_eq!(
            split_components("  alpha \t beta\n\ngamma  "),
            vec!["alpha", "beta", "gamma"]
        );
    }

    #[test]
    fn test_split_empty_text() {
        assert!(split_components("").is_empty());
        assert!(split_components(" \n\t ").is_empty());
    }

    #[test]
    fn test_components_of_known_tag() {
        let g = graph(&[("fruit", "apple pear")]);
        assert_eq!(g.components_of("fruit"), vec!["apple", "pear"]);
    }

    #[test]
    fn test_components_of_unknown_tag_is_empty() {
        let g = graph(&[("fruit", "apple pear")]);
        assert!(g.components_of("vegetable").is_empty());
    }

    #[test]
    fn test_components_keep_duplicates() {
        let g = graph(&[("fruit", "apple apple")]);
        assert_eq!(g.components_of("fruit"), vec!["apple", "apple"]);
    }

    #[test]
    fn test_dependents_of() {
        let g = graph(&[
            ("fruit", "apple pear"),
            ("food", "fruit bread"),
            ("red", "apple cherry"),
        ]);
        let deps: Vec<String> = g.dependents_of("apple").into_iter().collect();
        assert_eq!(deps, vec!["fruit", "red"]);
    }

    #[test]
    fn test_dependents_require_exact_name() {
        let g = graph(&[("fruit", "pineapple apple-pie")]);
        assert!(g.dependents_of("apple").is_empty());
    }

    #[test]
    fn test_dependents_case_sensitive() {
        let g = graph(&[("fruit", "Apple")]);
        assert!(g.dependents_of("apple").is_empty());
        assert_eq!(g.dependents_of("Apple").len(), 1);
    }

    #[test]
    fn test_self_composition_is_its_own_dependent() {
        let g = graph(&[("loop", "loop other")]);
        assert!(g.dependents_of("loop").contains("loop"));
    }
}
