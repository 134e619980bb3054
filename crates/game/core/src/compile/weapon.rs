//! Weapon preparation - folds the owning mech's damage and range bonuses into
//! a weapon's active profile.

use crate::bonus::{Bonus, BonusKind};
use crate::convert::bonus_affects_weapon;
use crate::entity::MechWeapon;
use crate::error::EffectError;
use crate::types::{Damage, DamageType, Range, RangeType, WeaponType};

/// Additions computed for a weapon's active profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreparedProfile {
    pub bonus_damage: Vec<Damage>,
    pub bonus_range: Vec<Range>,
    pub bonus_tags: Vec<String>,
    /// Limited uses after the mech's limited bonus. `None` if not limited.
    pub uses_max: Option<i32>,
}

/// Prepare a weapon against the bonuses of the mech carrying it.
///
/// Installed mod additions come first. Then every `damage` bonus that passes
/// [`bonus_affects_weapon`] adds a damage entry typed like the profile's first
/// damage (variable when it has none), and every passing `range` bonus adds a
/// threat entry for melee weapons or a range entry otherwise.
pub fn prepare_weapon<'a>(
    weapon: &MechWeapon,
    mech_bonuses: impl IntoIterator<Item = &'a Bonus>,
    limited_bonus: i32,
) -> Result<PreparedProfile, EffectError> {
    let profile = weapon.active_profile()?;

    let mut prepared = match &weapon.installed_mod {
        Some(installed) => PreparedProfile {
            bonus_damage: installed.added_damage.clone(),
            bonus_range: installed.added_range.clone(),
            bonus_tags: installed.added_tags.clone(),
            uses_max: None,
        },
        None => PreparedProfile::default(),
    };
    prepared.uses_max = weapon.limited.map(|base| base + limited_bonus);

    for bonus in mech_bonuses {
        let kind = match bonus.kind() {
            Some(kind) if kind.targets_weapons() => kind,
            _ => continue,
        };
        if !bonus_affects_weapon(weapon, bonus)? {
            continue;
        }

        match kind {
            BonusKind::Damage => {
                let damage_type = profile
                    .damage
                    .first()
                    .map_or(DamageType::Variable, |d| d.damage_type);
                prepared
                    .bonus_damage
                    .push(Damage::new(damage_type, bonus.value.to_string()));
            }
            BonusKind::Range => {
                let range_type = if profile.weapon_type == WeaponType::Melee {
                    RangeType::Threat
                } else {
                    RangeType::Range
                };
                prepared
                    .bonus_range
                    .push(Range::new(range_type, bonus.value.as_int().unwrap_or(0)));
            }
            _ => {}
        }
    }

    Ok(prepared)
}
