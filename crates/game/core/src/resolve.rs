//! Reference resolver - folds effects onto a flat attribute map.
//!
//! This is the merge the host performs with the compiled effects: every
//! applicable change is ordered by [`Priority`] (stable, so changes at the same
//! tier apply in effect order) and applied in turn. `Add` sums onto numeric
//! values (numeric text included), concatenates other text, and ORs flags; `Override` replaces.

use std::collections::BTreeMap;

use tracing::trace;

use crate::effect::{ChangeValue, Effect, EffectMode, Modification};
use crate::types::{ActorType, EffectTarget};

/// Attribute path → value, ordered by path.
pub type AttributeMap = BTreeMap<String, ChangeValue>;

/// Resolve `effects` against `base` for an actor of the given type.
///
/// Disabled effects are skipped, as are effects or individual changes whose
/// target does not admit `actor_type`.
pub fn resolve<'a>(
    base: &AttributeMap,
    effects: impl IntoIterator<Item = &'a Effect>,
    actor_type: ActorType,
) -> AttributeMap {
    let admits = |target: Option<EffectTarget>| target.is_none_or(|t| t.admits(actor_type));

    let mut changes: Vec<&Modification> = effects
        .into_iter()
        .filter(|effect| !effect.disabled && admits(effect.target))
        .flat_map(|effect| &effect.changes)
        .filter(|change| admits(change.target))
        .collect();
    changes.sort_by_key(|change| change.priority);

    let mut attributes = base.clone();
    for change in changes {
        let next = match change.mode {
            EffectMode::Override => change.value.clone(),
            EffectMode::Add => add(attributes.get(&change.key), &change.value),
        };
        trace!(key = %change.key, value = %next, "applied {change}");
        attributes.insert(change.key.clone(), next);
    }
    attributes
}

fn add(current: Option<&ChangeValue>, delta: &ChangeValue) -> ChangeValue {
    let Some(current) = current else {
        return delta.clone();
    };
    match (current, delta) {
        (ChangeValue::Flag(a), ChangeValue::Flag(b)) => ChangeValue::Flag(*a || *b),
        (ChangeValue::Number(_), _) | (_, ChangeValue::Number(_)) => {
            match (numeric(current), numeric(delta)) {
                (Some(a), Some(b)) => ChangeValue::Number(a + b),
                _ => ChangeValue::Text(format!("{current}{delta}")),
            }
        }
        _ => ChangeValue::Text(format!("{current}{delta}")),
    }
}

/// Numbers, and text that parses as one (`"2"`, `" -1 "`). Dice stay text.
fn numeric(value: &ChangeValue) -> Option<f64> {
    match value {
        ChangeValue::Number(n) => Some(*n),
        ChangeValue::Text(s) => s.trim().parse().ok(),
        ChangeValue::Flag(_) => None,
    }
}
