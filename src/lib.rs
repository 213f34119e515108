//! tagcombo - Compound tag search for wiki pages
//!
//! Resolves queries such as `project +urgent -archive` against the pages of a
//! wiki directory, where tags can be composed of other tags and tag
//! namespaces group everything nested under them.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagcomboError;
