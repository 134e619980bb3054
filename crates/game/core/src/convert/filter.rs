//! Weapon applicability of a bonus.

use crate::bonus::{AllowMap, Bonus};
use crate::entity::MechWeapon;
use crate::error::EffectError;

fn denies<K: Ord>(map: &Option<AllowMap<K>>, key: &K) -> bool {
    map.as_ref()
        .and_then(|allow| allow.get(key))
        .is_some_and(|allowed| !allowed)
}

/// Whether a bonus applies to a weapon in its current configuration.
///
/// Default-allow, explicit-deny: the bonus is excluded only when one of its
/// allow-maps marks the weapon's size, the active profile's type, or any of
/// the active profile's damage or range types as `false`.
pub fn bonus_affects_weapon(weapon: &MechWeapon, bonus: &Bonus) -> Result<bool, EffectError> {
    let profile = weapon.active_profile()?;

    if denies(&bonus.weapon_sizes, &weapon.size) {
        return Ok(false);
    }
    if denies(&bonus.weapon_types, &profile.weapon_type) {
        return Ok(false);
    }
    if profile
        .damage
        .iter()
        .any(|damage| denies(&bonus.damage_types, &damage.damage_type))
    {
        return Ok(false);
    }
    if profile
        .range
        .iter()
        .any(|range| denies(&bonus.range_types, &range.range_type))
    {
        return Ok(false);
    }

    Ok(true)
}
