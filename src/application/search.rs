//! Search use case
//!
//! Evaluates a tag query against the pages of the wiki: loads the current
//! compositions, indexes the pages, folds the query terms and finally
//! restricts the result to the requested page namespace.

use crate::domain::tags::{
    ContentId, ContentIndex, NamespaceExpander, PageScope, QueryEvaluator, TagResolver,
};
use crate::domain::ResolveStrategy;
use crate::error::Result;
use crate::infrastructure::repository::WikiRepository;
use crate::infrastructure::{FileSystemIndex, FileSystemRepository, HiddenNamespacePolicy};
use log::debug;

/// Options for a search
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Query text (`tag`, `+tag`, `-tag` terms)
    pub query: String,

    /// Page namespace to restrict results to
    pub scope: Option<String>,

    /// Override of the configured strategy
    pub strategy: Option<ResolveStrategy>,
}

/// Service for searching pages by combined tags
pub struct SearchService {
    repository: FileSystemRepository,
}

impl SearchService {
    pub fn new(repository: FileSystemRepository) -> Self {
        SearchService { repository }
    }

    /// Run the search, returning matching page ids in sorted order
    pub fn execute(&self, options: SearchOptions) -> Result<Vec<ContentId>> {
        let config = self.repository.load_config()?;
        let strategy = options.strategy.unwrap_or(config.strategy);

        let compositions = self.repository.composition_store().load();
        let index = FileSystemIndex::scan(&self.repository, &config);
        let policy = HiddenNamespacePolicy::from_config(&config);

        let resolver = TagResolver::new(
            compositions.into(),
            NamespaceExpander::new(index.all_tags()),
            &index,
            &policy,
            strategy,
        );
        let evaluator = QueryEvaluator::new(resolver);

        let scope = PageScope::from(options.scope);
        let mut ids = evaluator.evaluate(&options.query, &scope);
        scope.retain(&mut ids);

        debug!(
            "query '{}' matched {} pages within {}",
            options.query,
            ids.len(),
            scope
        );
        Ok(ids.into_iter().collect())
    }
}
