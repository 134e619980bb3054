use crate::bonus::Bonus;
use crate::error::{EffectError, ErrorContext};
use crate::types::{Damage, Range, WeaponSize, WeaponType};

/// One firing mode of a mech weapon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponProfile {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub weapon_type: WeaponType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: Vec<Damage>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: Vec<Range>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: Vec<Bonus>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
}

impl WeaponProfile {
    pub fn new(weapon_type: WeaponType) -> Self {
        Self {
            name: String::new(),
            weapon_type,
            damage: Vec::new(),
            range: Vec::new(),
            bonuses: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_damage(mut self, damage: Damage) -> Self {
        self.damage.push(damage);
        self
    }

    pub fn with_range(mut self, range: Range) -> Self {
        self.range.push(range);
        self
    }

    pub fn with_bonus(mut self, bonus: Bonus) -> Self {
        self.bonuses.push(bonus);
        self
    }
}

/// Weapon modification data, both as a standalone item and as installed on a
/// weapon.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WeaponMod {
    pub bonuses: Vec<Bonus>,
    pub added_damage: Vec<Damage>,
    pub added_range: Vec<Range>,
    pub added_tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MechWeapon {
    pub size: WeaponSize,
    pub profiles: Vec<WeaponProfile>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub selected_profile: usize,
    /// Mod currently installed on this weapon.
    #[cfg_attr(feature = "serde", serde(default))]
    pub installed_mod: Option<WeaponMod>,
    /// Base uses from the limited tag.
    #[cfg_attr(feature = "serde", serde(default))]
    pub limited: Option<i32>,
}

impl MechWeapon {
    pub fn new(size: WeaponSize, profiles: Vec<WeaponProfile>) -> Self {
        Self {
            size,
            profiles,
            selected_profile: 0,
            installed_mod: None,
            limited: None,
        }
    }

    /// The currently selected profile.
    ///
    /// A selection that points past the profile list is malformed upstream data
    /// and is reported rather than silently falling back to another profile.
    pub fn active_profile(&self) -> Result<&WeaponProfile, EffectError> {
        self.profiles
            .get(self.selected_profile)
            .ok_or(EffectError::MissingActiveProfile {
                selected: self.selected_profile,
                available: self.profiles.len(),
                context: ErrorContext::new(),
            })
    }
}
