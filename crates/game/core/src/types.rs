//! Rule-book enumerations shared by entities, bonuses and effects.
//!
//! Every enum parses from and displays as the snake_case identifier used in
//! rule-book data (`"main"`, `"cqb"`, `"only_drone"`), so bonus filter maps and
//! catalogs can be written by hand.

/// Item or actor category an entity snapshot belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum EntryType {
    CoreBonus,
    Frame,
    MechSystem,
    MechWeapon,
    NpcClass,
    Pilot,
    PilotArmor,
    PilotGear,
    PilotWeapon,
    Status,
    Talent,
    WeaponMod,
}

impl EntryType {
    /// Returns true for items that only apply while explicitly equipped.
    ///
    /// Everything else (talents, core bonuses, classes, statuses) is inherently
    /// active once it is on an actor.
    pub const fn requires_equip(&self) -> bool {
        matches!(
            self,
            Self::MechSystem
                | Self::MechWeapon
                | Self::WeaponMod
                | Self::Frame
                | Self::PilotGear
                | Self::PilotArmor
                | Self::PilotWeapon
        )
    }
}

/// Kind of actor an effect is being resolved against.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum ActorType {
    Mech,
    Pilot,
    Npc,
    Deployable,
    Drone,
}

/// Restriction on which actors an effect or modification may land on.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum EffectTarget {
    Mech,
    Pilot,
    OnlyDeployable,
    OnlyDrone,
}

impl EffectTarget {
    /// Whether an actor of the given type accepts changes with this restriction.
    pub const fn admits(&self, actor: ActorType) -> bool {
        matches!(
            (self, actor),
            (Self::Mech, ActorType::Mech)
                | (Self::Pilot, ActorType::Pilot)
                | (Self::OnlyDeployable, ActorType::Deployable)
                | (Self::OnlyDrone, ActorType::Drone)
        )
    }
}

/// Mount size of a mech weapon.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum WeaponSize {
    Aux,
    Main,
    Heavy,
    Superheavy,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum WeaponType {
    Rifle,
    Cannon,
    Launcher,
    Cqb,
    Nexus,
    Melee,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum DamageType {
    Kinetic,
    Energy,
    Explosive,
    Heat,
    Burn,
    Variable,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum RangeType {
    Range,
    Threat,
    Thrown,
    Line,
    Cone,
    Blast,
    Burst,
}

/// Classification of a status entity, carried through to its effect.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum StatusType {
    Status,
    Condition,
    #[default]
    Effect,
}

/// A single damage entry (`"1d6+2"` kinetic, `3` heat, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Damage {
    pub damage_type: DamageType,
    pub val: String,
}

impl Damage {
    pub fn new(damage_type: DamageType, val: impl Into<String>) -> Self {
        Self {
            damage_type,
            val: val.into(),
        }
    }
}

/// A single range entry (`Range 10`, `Threat 1`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub range_type: RangeType,
    pub val: i32,
}

impl Range {
    pub const fn new(range_type: RangeType, val: i32) -> Self {
        Self { range_type, val }
    }
}
