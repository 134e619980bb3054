/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineConfig {
    /// NPC tier used when the actor context does not carry one.
    pub default_npc_tier: u8,
    /// Log dropped bonuses through `tracing`. Diagnostics are returned
    /// regardless.
    pub warn_unsupported: bool,
}

impl EngineConfig {
    // ===== rule-book constants =====
    pub const MIN_NPC_TIER: u8 = 1;
    pub const MAX_NPC_TIER: u8 = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_NPC_TIER: u8 = Self::MIN_NPC_TIER;

    pub fn new() -> Self {
        Self {
            default_npc_tier: Self::DEFAULT_NPC_TIER,
            warn_unsupported: true,
        }
    }

    pub fn with_default_npc_tier(mut self, tier: u8) -> Self {
        self.default_npc_tier = tier;
        self
    }

    pub fn quiet(mut self) -> Self {
        self.warn_unsupported = false;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
