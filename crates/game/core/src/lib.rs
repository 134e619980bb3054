//! Bonus and effect aggregation rules for Lancer mechs, pilots and NPCs.
//!
//! `lancer-core` turns read-only entity snapshots into the effects a host
//! applies to derive actor stats. Everything here is pure: the same snapshot
//! always compiles to the same effects, so callers recompute in full whenever
//! an entity changes and use [`ChangeWatch`] to skip redundant writes.
//!
//! The pipeline is [`extract_bonuses`] → [`convert`] → [`EffectCompiler`], and
//! [`resolve`] documents how the host folds the result onto an actor.
pub mod bonus;
pub mod compile;
pub mod config;
pub mod convert;
pub mod effect;
pub mod entity;
pub mod error;
pub mod resolve;
pub mod types;
pub mod watch;

pub use bonus::{AllowMap, Bonus, BonusKind, BonusValue};
pub use compile::{
    CompiledEffects, EffectCompiler, PreparedProfile, StatusConfig, StatusRegistry,
    extract_bonuses, prepare_weapon, status_config,
};
pub use config::EngineConfig;
pub use convert::{bonus_affects_weapon, convert};
pub use effect::{ChangeValue, Effect, EffectMode, Modification, Priority};
pub use entity::{
    ActorContext, BonusList, CoreSystem, Entity, EntityKind, Frame, FrameStats, FrameTrait,
    MechWeapon, NpcClass, NpcTierStats, Pilot, Status, Talent, TalentRank, WeaponMod,
    WeaponProfile,
};
pub use error::{EffectError, EngineError, ErrorContext, ErrorSeverity, UnsupportedBonus};
pub use resolve::{AttributeMap, resolve};
pub use types::{
    ActorType, Damage, DamageType, EffectTarget, EntryType, Range, RangeType, StatusType,
    WeaponSize, WeaponType,
};
pub use watch::ChangeWatch;
