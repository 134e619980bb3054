//! Effect Compiler - assembles the single effect an entity contributes.
//!
//! # Pipeline
//!
//! ```text
//! Entity snapshot
//!      ↓  extract_bonuses   (per-kind bonus list)
//! [ Bonus ]
//!      ↓  convert           (table lookup, unknown ids dropped + reported)
//! [ Modification ]  +  innate block (frame / NPC class / pilot / status)
//!      ↓
//! Effect (origin, label, icon, changes, target, transfer, ephemeral)
//! ```
//!
//! The compiler is stateless: the same snapshot always yields the same
//! output, so the host can recompute in full on every relevant change.

pub mod extract;
pub mod innate;
pub mod status;
pub mod weapon;

pub use extract::extract_bonuses;
pub use innate::{frame_innate, npc_class_innate, pilot_innate};
pub use status::{StatusConfig, StatusRegistry, status_config, status_innate};
pub use weapon::{PreparedProfile, prepare_weapon};

use tracing::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::convert::convert;
use crate::effect::Effect;
use crate::entity::{ActorContext, Entity, EntityKind};
use crate::error::{EffectError, ErrorContext, UnsupportedBonus};

/// Output of compiling one entity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompiledEffects {
    /// Zero or one effect.
    pub effects: Vec<Effect>,
    /// Bonuses that were dropped because their kind is not supported.
    pub warnings: Vec<UnsupportedBonus>,
}

impl CompiledEffects {
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn effect(&self) -> Option<&Effect> {
        self.effects.first()
    }

    pub fn into_effect(self) -> Option<Effect> {
        self.effects.into_iter().next()
    }
}

#[derive(Clone, Debug, Default)]
pub struct EffectCompiler {
    config: EngineConfig,
}

impl EffectCompiler {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compile the effect one entity contributes to its owning actor.
    ///
    /// Destroyed or unequipped entities contribute nothing. Unsupported bonus
    /// kinds are dropped and reported in [`CompiledEffects::warnings`]; every
    /// other problem with the snapshot is returned as an error.
    pub fn compile(
        &self,
        entity: &Entity,
        actor: &ActorContext,
    ) -> Result<CompiledEffects, EffectError> {
        if !entity.is_active() {
            trace!(
                entity = %entity.id,
                destroyed = entity.destroyed,
                "inactive entity contributes no effects"
            );
            return Ok(CompiledEffects::default());
        }

        let mut compiled = CompiledEffects::default();
        let mut changes = Vec::new();

        for bonus in extract_bonuses(entity, actor)? {
            let label = format!("{} - {}", entity.name, bonus.id);
            match convert(&entity.id, &label, bonus) {
                Some(converted) => changes.extend(converted),
                None => {
                    if self.config.warn_unsupported {
                        warn!(entity = %entity.id, bonus = %bonus.id, "bonus of type {} not yet supported", bonus.id);
                    }
                    compiled.warnings.push(UnsupportedBonus {
                        origin: entity.id.clone(),
                        label,
                        id: bonus.id.clone(),
                    });
                }
            }
        }

        match &entity.kind {
            EntityKind::Frame(frame) => changes.extend(frame_innate(frame)),
            EntityKind::NpcClass(class) => {
                let tier = actor.npc_tier.unwrap_or(self.config.default_npc_tier);
                let stats = class.tier(tier).ok_or_else(|| EffectError::NpcTierOutOfRange {
                    tier,
                    available: class.base_stats.len(),
                    context: ErrorContext::new().with_entity(entity),
                })?;
                changes.extend(npc_class_innate(stats));
            }
            EntityKind::Pilot(pilot) => changes.extend(pilot_innate(pilot)),
            EntityKind::Status(status) => changes.extend(status_innate(status)),
            _ => {}
        }

        if changes.is_empty() {
            debug!(entity = %entity.id, "entity has no modifications");
            return Ok(compiled);
        }

        let target = Effect::infer_target(&changes);
        let mut effect = Effect::new(&entity.id, &entity.name, &entity.icon).with_changes(changes);
        effect.target = target;

        match &entity.kind {
            EntityKind::Pilot(_) => {
                effect.label = "Pilot Stats".to_owned();
                effect = effect.applied_directly();
            }
            EntityKind::Status(status) => {
                effect.status_id = Some(status.lid.clone());
                effect.status_type = Some(status.status_type);
                effect = effect.applied_directly();
            }
            _ => {}
        }

        debug!(
            entity = %entity.id,
            kind = %entity.entry_type(),
            changes = effect.changes.len(),
            dropped = compiled.warnings.len(),
            "compiled effect"
        );
        compiled.effects.push(effect);
        Ok(compiled)
    }

    /// Compile every entity of an actor, in order.
    ///
    /// Stops at the first precondition violation.
    pub fn compile_all<'a>(
        &self,
        entities: impl IntoIterator<Item = &'a Entity>,
        actor: &ActorContext,
    ) -> Result<CompiledEffects, EffectError> {
        let mut all = CompiledEffects::default();
        for entity in entities {
            let compiled = self.compile(entity, actor)?;
            all.effects.extend(compiled.effects);
            all.warnings.extend(compiled.warnings);
        }
        Ok(all)
    }
}
