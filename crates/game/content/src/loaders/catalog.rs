//! Entity catalog loader.
//!
//! Loads entity snapshots (frames, systems, talents, ...) from RON files.

use std::collections::HashSet;
use std::path::Path;

use lancer_core::{ActorContext, CompiledEffects, EffectCompiler, Entity, StatusRegistry};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Entities owned by one actor, in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityCatalog {
    pub entities: Vec<Entity>,
}

impl EntityCatalog {
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Compile every entity in the catalog for its owning actor.
    pub fn compile(
        &self,
        compiler: &EffectCompiler,
        actor: &ActorContext,
    ) -> LoadResult<CompiledEffects> {
        compiler
            .compile_all(&self.entities, actor)
            .map_err(|e| anyhow::anyhow!("Failed to compile catalog: {}", e))
    }

    /// Status projections of the catalog's status entities.
    pub fn status_registry(&self) -> StatusRegistry {
        StatusRegistry::from_statuses(&self.entities)
    }
}

/// Loader for entity catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load an entity catalog from a RON file.
    ///
    /// RON format: `Vec<Entity>`. Entity ids must be unique.
    pub fn load(path: &Path) -> LoadResult<EntityCatalog> {
        let content = read_file(path)?;
        let catalog = Self::parse_str(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;
        debug!(path = %path.display(), entities = catalog.len(), "loaded entity catalog");
        Ok(catalog)
    }

    pub fn parse_str(content: &str) -> LoadResult<EntityCatalog> {
        let entities: Vec<Entity> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse entity catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for entity in &entities {
            if !seen.insert(entity.id.as_str()) {
                anyhow::bail!("Duplicate entity id '{}' in catalog", entity.id);
            }
        }

        Ok(EntityCatalog { entities })
    }
}
