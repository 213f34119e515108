//! Tag combination engine

pub mod composition;
pub mod index;
pub mod namespace;
pub mod query;
pub mod resolver;
pub mod scope;

// Re-export main types
pub use composition::{split_components, CompositionGraph, CompositionMap};
pub use index::{AccessPolicy, AllowAll, ContentId, ContentIndex, MemoryIndex};
pub use namespace::{namespace_contains, NamespaceExpander, NAMESPACE_SEPARATOR};
pub use query::{QueryEvaluator, QueryTerm, TermOperator};
pub use resolver::TagResolver;
pub use scope::PageScope;
