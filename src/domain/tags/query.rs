//! Query parsing and evaluation
//!
//! A query is a whitespace separated list of tag terms, folded left to right
//! into an accumulator that starts empty:
//!
//! - `tag` adds the pages of `tag` (union)
//! - `+tag` keeps only pages that also belong to `tag` (intersection)
//! - `-tag` removes the pages of `tag` (difference)
//!
//! Because the accumulator starts empty, a query whose first term is `+tag`
//! stays empty until a plain term adds something.
//!
//! # Examples
//!
//! ```
//! use tagcombo::domain::tags::{QueryTerm, TermOperator};
//!
//! let terms = QueryTerm::parse_all("work +urgent -done");
//! assert_eq!(terms.len(), 3);
//! assert_eq!(terms[1].operator, TermOperator::Intersect);
//! assert_eq!(terms[1].tag, "urgent");
//! ```

use crate::domain::tags::index::ContentId;
use crate::domain::tags::resolver::TagResolver;
use crate::domain::tags::scope::PageScope;
use log::debug;
use std::collections::BTreeSet;

/// How a term's pages combine with the accumulated result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermOperator {
    /// Plain term
    Union,
    /// `+` term
    Intersect,
    /// `-` term
    Exclude,
}

/// One parsed query term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerm {
    pub tag: String,
    pub operator: TermOperator,
}

impl QueryTerm {
    pub fn new(tag: &str, operator: TermOperator) -> Self {
        Self {
            tag: tag.to_string(),
            operator,
        }
    }

    /// Classify a single token by its leading character
    pub fn parse(token: &str) -> Self {
        if let Some(tag) = token.strip_prefix('+') {
            QueryTerm::new(tag, TermOperator::Intersect)
        } else if let Some(tag) = token.strip_prefix('-') {
            QueryTerm::new(tag, TermOperator::Exclude)
        } else {
            QueryTerm::new(token, TermOperator::Union)
        }
    }

    /// Split query text into terms, in order
    ///
    /// Newlines count as spaces and empty tokens are dropped.
    pub fn parse_all(text: &str) -> Vec<Self> {
        text.split_whitespace().map(QueryTerm::parse).collect()
    }

    /// Combine this term's pages into `acc`
    pub fn apply(&self, acc: BTreeSet<ContentId>, ids: BTreeSet<ContentId>) -> BTreeSet<ContentId> {
        match self.operator {
            TermOperator::Union => {
                let mut acc = acc;
                acc.extend(ids);
                acc
            }
            TermOperator::Intersect => acc.intersection(&ids).cloned().collect(),
            TermOperator::Exclude => acc.difference(&ids).cloned().collect(),
        }
    }
}

impl std::fmt::Display for QueryTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.operator {
            TermOperator::Union => write!(f, "{}", self.tag),
            TermOperator::Intersect => write!(f, "+{}", self.tag),
            TermOperator::Exclude => write!(f, "-{}", self.tag),
        }
    }
}

/// Evaluates query text with a [`TagResolver`]
pub struct QueryEvaluator<'a> {
    resolver: TagResolver<'a>,
}

impl<'a> QueryEvaluator<'a> {
    pub fn new(resolver: TagResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Fold every term of `text` into one page set
    ///
    /// `scope` is handed to the resolver untouched; restricting the result
    /// to it is left to the caller.
    pub fn evaluate(&self, text: &str, scope: &PageScope) -> BTreeSet<ContentId> {
        QueryTerm::parse_all(text)
            .iter()
            .fold(BTreeSet::new(), |acc, term| {
                let ids = self.resolver.resolve(&term.tag, scope);
                debug!("term '{}' resolved to {} pages", term, ids.len());
                term.apply(acc, ids)
            })
    }
}
