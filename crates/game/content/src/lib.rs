//! Rule-book content and loaders for `lancer-core`.
//!
//! This crate houses static content and provides loaders for RON/TOML data
//! files:
//! - Entity catalogs (data-driven via RON)
//! - The standard status and condition table (embedded RON)
//! - Engine configuration (data-driven via TOML)
//!
//! All loaders use lancer-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, EntityCatalog, LoadResult, StatusLoader};
