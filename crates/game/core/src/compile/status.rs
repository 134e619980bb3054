//! Statuses and conditions - flag effects and the status-icon registry.

use crate::effect::{Modification, Priority};
use crate::entity::{Entity, EntityKind, Status};
use crate::types::StatusType;

/// The single flag change a status makes: `system.statuses.<lid> = true`.
pub fn status_innate(status: &Status) -> Vec<Modification> {
    vec![Modification::set(
        format!("system.statuses.{}", status.lid),
        Priority::EFFECT,
        true,
    )]
}

/// Projection of a status used by the host's built-in status-icon registry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusConfig {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub origin: String,
    pub changes: Vec<Modification>,
    pub status_type: StatusType,
}

pub fn status_config(entity: &Entity, status: &Status) -> StatusConfig {
    StatusConfig {
        id: status.lid.clone(),
        label: entity.name.clone(),
        icon: entity.icon.clone(),
        origin: entity.id.clone(),
        changes: status_innate(status),
        status_type: status.status_type,
    }
}

/// Status configs keyed by lid, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusRegistry {
    entries: Vec<StatusConfig>,
}

impl StatusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from any entities; non-status entities are ignored.
    pub fn from_statuses<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> Self {
        let mut registry = Self::new();
        for entity in entities {
            registry.insert(entity);
        }
        registry
    }

    /// Register a status entity. A later status with the same lid replaces the
    /// earlier one in place. Returns false for non-status entities.
    pub fn insert(&mut self, entity: &Entity) -> bool {
        let EntityKind::Status(status) = &entity.kind else {
            return false;
        };
        let config = status_config(entity, status);
        match self.entries.iter_mut().find(|e| e.id == config.id) {
            Some(existing) => *existing = config,
            None => self.entries.push(config),
        }
        true
    }

    pub fn get(&self, lid: &str) -> Option<&StatusConfig> {
        self.entries.iter().find(|e| e.id == lid)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusConfig> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{ChangeValue, EffectMode};
    use crate::entity::BonusList;

    fn status(id: &str, name: &str, lid: &str, status_type: StatusType) -> Entity {
        Entity::new(
            id,
            name,
            EntityKind::Status(Status {
                lid: lid.into(),
                status_type,
            }),
        )
        .with_icon(format!("icons/{lid}.svg"))
    }

    #[test]
    fn status_sets_its_flag_at_effect_priority() {
        let changes = status_innate(&Status {
            lid: "lockon".into(),
            status_type: StatusType::Condition,
        });
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].key, "system.statuses.lockon");
        assert_eq!(changes[0].mode, EffectMode::Override);
        assert_eq!(changes[0].priority, Priority::EFFECT);
        assert_eq!(changes[0].value, ChangeValue::Flag(true));
    }

    #[test]
    fn registry_keeps_order_and_replaces_duplicates() {
        let entities = [
            status("s1", "Prone", "prone", StatusType::Status),
            status("s2", "Slowed", "slow", StatusType::Condition),
            Entity::new("g", "Gear", EntityKind::PilotGear(BonusList::default())),
            status("s3", "Prone (homebrew)", "prone", StatusType::Status),
        ];
        let registry = StatusRegistry::from_statuses(&entities);

        assert_eq!(registry.len(), 2);
        let ids: Vec<_> = registry.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["prone", "slow"]);

        let prone = registry.get("prone").unwrap();
        assert_eq!(prone.label, "Prone (homebrew)");
        assert_eq!(prone.origin, "s3");
        assert_eq!(prone.icon, "icons/prone.svg");
        assert!(registry.get("stunned").is_none());
    }
}
