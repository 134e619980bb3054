//! Bonus Converter - maps one bonus record to primitive modifications.
//!
//! Conversion is a table lookup ([`table::BONUS_TABLE`]) followed by the
//! mode/priority rule:
//!
//! | bonus flags             | mode       | priority             |
//! |-------------------------|------------|----------------------|
//! | neither                 | `Add`      | [`Priority::BONUS`]  |
//! | `replace` / `overwrite` | `Override` | [`Priority::REPLACE`]|

pub mod filter;
pub mod table;

pub use filter::bonus_affects_weapon;
pub use table::{BONUS_TABLE, BonusTarget};

use tracing::trace;

use crate::bonus::Bonus;
use crate::effect::{ChangeValue, EffectMode, Modification, Priority};

/// Convert a bonus into the modifications it makes.
///
/// Returns `None` for ids the table does not recognize; the caller reports
/// those and carries on with the remaining bonuses.
pub fn convert(origin: &str, label: &str, bonus: &Bonus) -> Option<Vec<Modification>> {
    let kind = bonus.kind()?;
    let entry = table::lookup(kind)?;

    let (mode, priority) = if bonus.is_replacement() {
        (EffectMode::Override, Priority::REPLACE)
    } else {
        (EffectMode::Add, Priority::BONUS)
    };
    let value = match entry.literal {
        Some(literal) => ChangeValue::Number(literal),
        None => ChangeValue::from(&bonus.value),
    };

    trace!(origin, label, %kind, key = entry.key, "converted bonus");

    Some(vec![
        Modification::new(entry.key, mode, priority, value).with_target(entry.target),
    ])
}
