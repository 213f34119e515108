//! Resolution strategy selection

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a query term is expanded through compositions and namespaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolveStrategy {
    /// Depth-first expansion with a per-branch cycle guard
    #[default]
    Recursive,
    /// Breadth-first reachability with one shared visited set
    Closure,
}

impl ResolveStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolveStrategy::Recursive => "recursive",
            ResolveStrategy::Closure => "closure",
        }
    }
}

impl std::fmt::Display for ResolveStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolveStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recursive" => Ok(ResolveStrategy::Recursive),
            "closure" => Ok(ResolveStrategy::Closure),
            _ => Err(format!(
                "Invalid strategy: '{}'. Valid strategies are: recursive, closure",
                s
            )),
        }
    }
}
