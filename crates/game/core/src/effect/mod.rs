//! Compiled effects - the applyable output of the aggregation pipeline.
//!
//! An [`Effect`] bundles every [`Modification`] one entity contributes to its
//! owning actor. The host merges the changes of all active effects, ordered by
//! [`Priority`], to derive final attributes (see [`crate::resolve`]).

pub mod modification;

pub use modification::{ChangeValue, EffectMode, Modification, Priority};

use crate::types::{EffectTarget, StatusType};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    /// Id of the entity that owns this effect.
    pub origin: String,
    pub label: String,
    pub icon: String,
    pub changes: Vec<Modification>,
    /// Actor restriction for the whole effect. `None` applies anywhere.
    pub target: Option<EffectTarget>,
    /// Applied to the owning actor rather than the item itself.
    pub transfer: bool,
    /// Regenerated from source data, never hand-edited.
    pub ephemeral: bool,
    pub disabled: bool,
    pub status_id: Option<String>,
    pub status_type: Option<StatusType>,
}

impl Effect {
    /// Create an empty generated effect for an item-sourced origin.
    pub fn new(origin: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            label: label.into(),
            icon: icon.into(),
            changes: Vec::new(),
            target: None,
            transfer: true,
            ephemeral: true,
            disabled: false,
            status_id: None,
            status_type: None,
        }
    }

    /// Create a user-authored effect, which survives regeneration.
    pub fn user(origin: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            ephemeral: false,
            transfer: false,
            ..Self::new(origin, label, String::new())
        }
    }

    pub fn with_changes(mut self, changes: impl IntoIterator<Item = Modification>) -> Self {
        self.changes.extend(changes);
        self
    }

    /// Applied directly to an actor, not carried over from an item.
    pub fn applied_directly(mut self) -> Self {
        self.transfer = false;
        self
    }

    /// Derive the effect-wide restriction from its changes: the shared target
    /// when every change agrees, `None` otherwise.
    pub fn infer_target(changes: &[Modification]) -> Option<EffectTarget> {
        let (first, rest) = changes.split_first()?;
        rest.iter()
            .all(|change| change.target == first.target)
            .then_some(first.target)
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inferred_target_requires_agreement() {
        let mech = Modification::add("system.hp.max", Priority::BONUS, 2)
            .with_target(EffectTarget::Mech);
        let pilot = Modification::add("system.hp.max", Priority::BONUS, 2)
            .with_target(EffectTarget::Pilot);

        assert_eq!(
            Effect::infer_target(&[mech.clone(), mech.clone()]),
            Some(EffectTarget::Mech)
        );
        assert_eq!(Effect::infer_target(&[mech, pilot]), None);
        assert_eq!(Effect::infer_target(&[]), None);
    }

    #[test]
    fn user_effects_are_not_ephemeral() {
        let effect = Effect::user("actor-1", "Custom");
        assert!(!effect.ephemeral);
        assert!(!effect.transfer);
        assert!(Effect::new("item-1", "Item", "icon.svg").ephemeral);
    }
}
