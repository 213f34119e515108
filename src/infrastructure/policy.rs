//! Page visibility from configuration

use crate::domain::tags::{namespace_contains, AccessPolicy};
use crate::infrastructure::config::Config;

/// Denies pages inside any of the configured hidden namespaces
#[derive(Debug, Clone, Default)]
pub struct HiddenNamespacePolicy {
    hidden: Vec<String>,
}

impl HiddenNamespacePolicy {
    pub fn new(hidden: Vec<String>) -> Self {
        let hidden = hidden
            .into_iter()
            .map(|ns| ns.trim().trim_matches(':').to_string())
            .filter(|ns| !ns.is_empty())
            .collect();
        Self { hidden }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.hidden_namespaces.clone())
    }
}

impl AccessPolicy for HiddenNamespacePolicy {
    fn can_view(&self, id: &str) -> bool {
        !self.hidden.iter().any(|ns| namespace_contains(ns, id))
    }
}
