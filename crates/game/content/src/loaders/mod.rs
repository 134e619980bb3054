//! Content loaders for reading rule-book data from files.
//!
//! Entity catalogs and the status table are RON; engine configuration is TOML.
//! All loaders deserialize straight into `lancer-core` types.

pub mod catalog;
pub mod config;
pub mod statuses;

pub use catalog::{CatalogLoader, EntityCatalog};
pub use config::ConfigLoader;
pub use statuses::StatusLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
