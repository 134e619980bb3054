//! Engine configuration loader.

use std::path::Path;

use lancer_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their defaults. A `default_npc_tier` outside the
    /// rule-book tiers is rejected.
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        Self::parse_str(&content)
    }

    pub fn parse_str(content: &str) -> LoadResult<EngineConfig> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let tiers = EngineConfig::MIN_NPC_TIER..=EngineConfig::MAX_NPC_TIER;
        if !tiers.contains(&config.default_npc_tier) {
            anyhow::bail!(
                "default_npc_tier {} is outside {}..={}",
                config.default_npc_tier,
                EngineConfig::MIN_NPC_TIER,
                EngineConfig::MAX_NPC_TIER
            );
        }

        Ok(config)
    }
}
