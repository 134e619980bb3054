//! Bonus records - the rule-book adjustments attached to equippable entities.

pub mod kind;
pub mod record;

pub use kind::BonusKind;
pub use record::{AllowMap, Bonus, BonusValue};
