//! Status table loader.
//!
//! The standard statuses and conditions ship embedded; homebrew tables load
//! from RON files with the same format and replace entries by lid.

use std::path::Path;

use lancer_core::{Entity, EntityKind, StatusRegistry};

use crate::loaders::{LoadResult, read_file};

const DEFAULT_STATUSES: &str = include_str!("../../data/statuses.ron");

/// Loader for status tables.
pub struct StatusLoader;

impl StatusLoader {
    /// Registry of the standard statuses and conditions.
    pub fn defaults() -> LoadResult<StatusRegistry> {
        let statuses = Self::parse(DEFAULT_STATUSES)
            .map_err(|e| anyhow::anyhow!("Failed to parse statuses.ron: {}", e))?;
        Ok(StatusRegistry::from_statuses(&statuses))
    }

    /// Load a status table from a RON file.
    ///
    /// RON format: `Vec<Entity>`, every entry of kind `Status`.
    pub fn load(path: &Path) -> LoadResult<Vec<Entity>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse status table {}: {}", path.display(), e))
    }

    /// The standard registry with a homebrew table layered on top.
    pub fn defaults_with(path: &Path) -> LoadResult<StatusRegistry> {
        let mut registry = Self::defaults()?;
        for status in Self::load(path)? {
            registry.insert(&status);
        }
        Ok(registry)
    }

    fn parse(content: &str) -> LoadResult<Vec<Entity>> {
        let entities: Vec<Entity> = ron::from_str(content)?;
        if let Some(other) = entities
            .iter()
            .find(|entity| !matches!(entity.kind, EntityKind::Status(_)))
        {
            anyhow::bail!(
                "entry '{}' is a {}, not a status",
                other.id,
                other.entry_type()
            );
        }
        Ok(entities)
    }
}
