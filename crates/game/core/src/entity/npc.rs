/// NPC class statline for a single tier.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct NpcTierStats {
    pub activations: i32,
    pub armor: i32,
    pub evasion: i32,
    pub edef: i32,
    pub speed: i32,
    pub sensor_range: i32,
    pub save: i32,
    pub hull: i32,
    pub agi: i32,
    pub sys: i32,
    pub eng: i32,
    pub size: f64,
    pub hp: i32,
    pub structure: i32,
    pub stress: i32,
    pub heatcap: i32,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcClass {
    /// One entry per tier, tier 1 first.
    pub base_stats: Vec<NpcTierStats>,
}

impl NpcClass {
    /// Base stats for a 1-based tier.
    pub fn tier(&self, tier: u8) -> Option<&NpcTierStats> {
        usize::from(tier)
            .checked_sub(1)
            .and_then(|index| self.base_stats.get(index))
    }
}
