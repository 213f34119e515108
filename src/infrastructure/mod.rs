//! Infrastructure layer - External I/O and persistence

pub mod composition_store;
pub mod config;
pub mod lock;
pub mod page_index;
pub mod policy;
pub mod repository;

pub use composition_store::CompositionStore;
pub use config::Config;
pub use lock::StoreLock;
pub use page_index::FileSystemIndex;
pub use policy::HiddenNamespacePolicy;
pub use repository::{FileSystemRepository, PageFile, WikiRepository};
