//! Application layer - Use cases and orchestration

pub mod compositions;
pub mod init;
pub mod list_tags;
pub mod manage_config;
pub mod search;

pub use compositions::{CompositionService, CompositionView};
pub use list_tags::ListTagsService;
pub use manage_config::ConfigService;
pub use search::{SearchOptions, SearchService};
