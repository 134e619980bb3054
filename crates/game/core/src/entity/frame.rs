use crate::bonus::Bonus;

/// Base statline printed on a frame.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FrameStats {
    pub armor: i32,
    pub edef: i32,
    pub evasion: i32,
    pub save: i32,
    pub sensor_range: i32,
    /// Half sizes exist, hence the float.
    pub size: f64,
    pub speed: i32,
    pub tech_attack: i32,
    pub hp: i32,
    pub structure: i32,
    pub stress: i32,
    pub heatcap: i32,
    pub repcap: i32,
    pub sp: i32,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CoreSystem {
    pub name: String,
    /// Always on while the frame is equipped.
    pub passive_bonuses: Vec<Bonus>,
    /// Only while the mech's core power is active.
    pub active_bonuses: Vec<Bonus>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameTrait {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: Vec<Bonus>,
    #[cfg_attr(feature = "serde", serde(default = "unlocked_by_default"))]
    pub unlocked: bool,
}

#[cfg(feature = "serde")]
fn unlocked_by_default() -> bool {
    true
}

impl FrameTrait {
    pub fn new(name: impl Into<String>, bonuses: Vec<Bonus>) -> Self {
        Self {
            name: name.into(),
            bonuses,
            unlocked: true,
        }
    }

    pub fn locked(mut self) -> Self {
        self.unlocked = false;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub stats: FrameStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub core_system: CoreSystem,
    #[cfg_attr(feature = "serde", serde(default))]
    pub traits: Vec<FrameTrait>,
}
