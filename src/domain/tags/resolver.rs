//! Tag resolution
//!
//! Expands a single tag into every page reachable from it. A tag reaches:
//!
//! - the pages tagged with it directly,
//! - everything its composition components reach,
//! - everything the tags nested in its namespace reach.
//!
//! Compositions are hand-authored and may loop back on themselves. The
//! recursive strategy carries the set of tags on the current path and refuses
//! to expand a tag twice along one path; a tag skipped on one branch is still
//! expanded on any sibling branch that does not pass through it.
//!
//! # Examples
//!
//! ```
//! use tagcombo::domain::tags::{
//!     AllowAll, CompositionGraph, MemoryIndex, NamespaceExpander, PageScope, TagResolver,
//! };
//! use tagcombo::domain::ResolveStrategy;
//! use tagcombo::domain::tags::ContentIndex;
//!
//! let index = MemoryIndex::new()
//!     .with_page("apple-pie", ["apple"])
//!     .with_page("salad", ["pear"]);
//! let graph = CompositionGraph::new([("fruit".to_string(), "apple pear".to_string())].into());
//! let resolver = TagResolver::new(
//!     graph,
//!     NamespaceExpander::new(index.all_tags()),
//!     &index,
//!     &AllowAll,
//!     ResolveStrategy::Recursive,
//! );
//!
//! let ids = resolver.resolve("fruit", &PageScope::all());
//! assert_eq!(ids.len(), 2);
//! ```

use crate::domain::strategy::ResolveStrategy;
use crate::domain::tags::composition::CompositionGraph;
use crate::domain::tags::index::{AccessPolicy, ContentId, ContentIndex};
use crate::domain::tags::namespace::NamespaceExpander;
use crate::domain::tags::scope::PageScope;
use log::trace;
use std::collections::{BTreeSet, HashSet, VecDeque};

/// Resolves tags against one snapshot of compositions and tags
pub struct TagResolver<'a> {
    graph: CompositionGraph,
    namespaces: NamespaceExpander,
    index: &'a dyn ContentIndex,
    policy: &'a dyn AccessPolicy,
    strategy: ResolveStrategy,
}

impl<'a> TagResolver<'a> {
    pub fn new(
        graph: CompositionGraph,
        namespaces: NamespaceExpander,
        index: &'a dyn ContentIndex,
        policy: &'a dyn AccessPolicy,
        strategy: ResolveStrategy,
    ) -> Self {
        Self {
            graph,
            namespaces,
            index,
            policy,
            strategy,
        }
    }

    /// Every visible page reachable from `tag`
    pub fn resolve(&self, tag: &str, scope: &PageScope) -> BTreeSet<ContentId> {
        match self.strategy {
            ResolveStrategy::Recursive => self.resolve_within(tag, scope, &BTreeSet::new()),
            ResolveStrategy::Closure => self.resolve_closure(tag, scope),
        }
    }

    /// Recursive expansion of `tag`, skipping tags already on `visited`
    ///
    /// `visited` is the path from the top-level term down to `tag`; each
    /// child call receives its own copy extended with `tag`.
    pub fn resolve_within(
        &self,
        tag: &str,
        scope: &PageScope,
        visited: &BTreeSet<String>,
    ) -> BTreeSet<ContentId> {
        if visited.contains(tag) {
            trace!("'{}' already on path, skipping", tag);
            return BTreeSet::new();
        }
        trace!(
            "resolving '{}' at depth {} (scope {})",
            tag,
            visited.len(),
            scope
        );

        let mut ids = self.index.lookup(tag);
        let components = self.graph.components_of(tag);
        let subtags = self.namespaces.tags_under_namespace(tag);

        let mut path = visited.clone();
        path.insert(tag.to_string());

        for component in &components {
            ids.extend(self.resolve_within(component, scope, &path));
        }

        // Namespace members go last: membership outranks authored composition.
        for subtag in &subtags {
            ids.extend(self.resolve_within(subtag, scope, &path));
        }

        ids.retain(|id| self.policy.can_view(id));
        ids
    }

    /// Breadth-first expansion over the whole reachable tag set
    ///
    /// Every tag reachable from `tag` is looked up exactly once, and the
    /// access policy runs once over the union. Yields the same set as
    /// [`TagResolver::resolve_within`] with an empty path.
    pub fn resolve_closure(&self, tag: &str, scope: &PageScope) -> BTreeSet<ContentId> {
        let reachable = self.reachable_tags(tag);
        trace!(
            "'{}' reaches {} tags (scope {})",
            tag,
            reachable.len(),
            scope
        );

        let mut ids: BTreeSet<ContentId> = reachable
            .iter()
            .flat_map(|t| self.index.lookup(t))
            .collect();
        ids.retain(|id| self.policy.can_view(id));
        ids
    }

    /// Tags reachable from `tag` over component and namespace edges, `tag` included
    pub fn reachable_tags(&self, tag: &str) -> BTreeSet<String> {
        let mut scheduled: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        let mut reached = BTreeSet::new();

        scheduled.insert(tag.to_string());
        queue.push_back(tag.to_string());

        while let Some(current) = queue.pop_front() {
            let next = self
                .graph
                .components_of(&current)
                .into_iter()
                .chain(self.namespaces.tags_under_namespace(&current));
            for candidate in next {
                if scheduled.insert(candidate.clone()) {
                    queue.push_back(candidate);
                }
            }
            reached.insert(current);
        }

        reached
    }
}
