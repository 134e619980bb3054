//! Entity snapshots - read-only views of the rule-book entities the pipeline
//! consumes.
//!
//! The host owns the documents; it hands the engine an [`Entity`] whenever
//! equip state, destroyed state or bonus-bearing fields change. Entity
//! subtypes are a tagged variant ([`EntityKind`]) so every stage of the
//! pipeline dispatches with an exhaustive `match`.

pub mod frame;
pub mod npc;
pub mod weapon;

pub use frame::{CoreSystem, Frame, FrameStats, FrameTrait};
pub use npc::{NpcClass, NpcTierStats};
pub use weapon::{MechWeapon, WeaponMod, WeaponProfile};

use crate::bonus::Bonus;
use crate::types::{EntryType, StatusType};

/// Payload for items whose only rule content is a flat bonus list.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BonusList {
    pub bonuses: Vec<Bonus>,
}

impl BonusList {
    pub fn new(bonuses: Vec<Bonus>) -> Self {
        Self { bonuses }
    }
}

/// Pilot skill triggers (HASE) and level bonus (GRIT).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Pilot {
    pub hull: i32,
    pub agi: i32,
    pub sys: i32,
    pub eng: i32,
    pub grit: i32,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TalentRank {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: Vec<Bonus>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Talent {
    pub ranks: Vec<TalentRank>,
    /// Zero-based index of the highest unlocked rank.
    #[cfg_attr(feature = "serde", serde(default))]
    pub curr_rank: usize,
}

impl Talent {
    /// Ranks up to and including the current one.
    pub fn unlocked_ranks(&self) -> &[TalentRank] {
        let end = self.curr_rank.saturating_add(1).min(self.ranks.len());
        &self.ranks[..end]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Status {
    /// Lookup id, dashes stripped (`"lockon"`, `"dangerzone"`).
    pub lid: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status_type: StatusType,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Frame(Frame),
    Pilot(Pilot),
    NpcClass(NpcClass),
    MechWeapon(MechWeapon),
    WeaponMod(WeaponMod),
    CoreBonus(BonusList),
    Talent(Talent),
    MechSystem(BonusList),
    PilotArmor(BonusList),
    PilotGear(BonusList),
    PilotWeapon(BonusList),
    Status(Status),
}

impl EntityKind {
    pub const fn entry_type(&self) -> EntryType {
        match self {
            Self::Frame(_) => EntryType::Frame,
            Self::Pilot(_) => EntryType::Pilot,
            Self::NpcClass(_) => EntryType::NpcClass,
            Self::MechWeapon(_) => EntryType::MechWeapon,
            Self::WeaponMod(_) => EntryType::WeaponMod,
            Self::CoreBonus(_) => EntryType::CoreBonus,
            Self::Talent(_) => EntryType::Talent,
            Self::MechSystem(_) => EntryType::MechSystem,
            Self::PilotArmor(_) => EntryType::PilotArmor,
            Self::PilotGear(_) => EntryType::PilotGear,
            Self::PilotWeapon(_) => EntryType::PilotWeapon,
            Self::Status(_) => EntryType::Status,
        }
    }
}

/// Read-only snapshot of one entity owned by an actor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    /// Stable document id; becomes the origin of generated effects.
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
    /// Explicit equip state. Absent means the category default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped: Option<bool>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub destroyed: bool,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: String::new(),
            equipped: None,
            destroyed: false,
            kind,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn equipped(mut self, equipped: bool) -> Self {
        self.equipped = Some(equipped);
        self
    }

    pub fn destroyed(mut self) -> Self {
        self.destroyed = true;
        self
    }

    pub const fn entry_type(&self) -> EntryType {
        self.kind.entry_type()
    }

    /// Equipped, or inherently active for categories without an equip slot.
    pub fn is_equipped(&self) -> bool {
        self.equipped
            .unwrap_or(!self.entry_type().requires_equip())
    }

    /// Whether this entity currently contributes effects at all.
    pub fn is_active(&self) -> bool {
        !self.destroyed && self.is_equipped()
    }
}

/// Facts about the owning actor that some entities read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ActorContext {
    /// The mech's core power is active; frames add their active core bonuses.
    pub core_active: bool,
    /// NPC tier (1-based). Falls back to the configured default.
    pub npc_tier: Option<u8>,
}

impl ActorContext {
    pub fn with_core_active(mut self) -> Self {
        self.core_active = true;
        self
    }

    pub fn with_npc_tier(mut self, tier: u8) -> Self {
        self.npc_tier = Some(tier);
        self
    }
}
