use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::types::{DamageType, RangeType, WeaponSize, WeaponType};

use super::BonusKind;

/// Declared value of a bonus: a number (`2`) or a dice/text expression (`"1d6"`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum BonusValue {
    Number(f64),
    Text(String),
}

impl BonusValue {
    /// Integer reading of the value, following rule-book "parse the leading
    /// integer" semantics for text (`"+2"` → 2, `"3 spaces"` → 3).
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Number(n) => Some(*n as i32),
            Self::Text(s) => leading_int(s),
        }
    }
}

impl Default for BonusValue {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl From<i32> for BonusValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<f64> for BonusValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for BonusValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for BonusValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for BonusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

fn leading_int(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i32>().ok().map(|n| sign * n)
}

/// Allow-map over one weapon attribute. Absent entries are allowed.
pub type AllowMap<K> = BTreeMap<K, bool>;

/// One rule-book bonus attached to an equippable entity.
///
/// Bonuses are read-only snapshots of source data; the `id` stays a string so
/// ids this engine does not recognize survive loading and can be reported.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bonus {
    #[cfg_attr(feature = "serde", serde(alias = "lid"))]
    pub id: String,
    #[cfg_attr(feature = "serde", serde(alias = "val", default))]
    pub value: BonusValue,
    #[cfg_attr(feature = "serde", serde(default))]
    pub replace: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub overwrite: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub weapon_sizes: Option<AllowMap<WeaponSize>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub weapon_types: Option<AllowMap<WeaponType>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub damage_types: Option<AllowMap<DamageType>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub range_types: Option<AllowMap<RangeType>>,
}

impl Bonus {
    pub fn new(id: impl Into<String>, value: impl Into<BonusValue>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Create a bonus for a recognized kind.
    pub fn of(kind: BonusKind, value: impl Into<BonusValue>) -> Self {
        Self::new(kind.as_ref(), value)
    }

    /// The recognized kind of this bonus, if any.
    pub fn kind(&self) -> Option<BonusKind> {
        BonusKind::from_str(&self.id).ok()
    }

    /// Whether this bonus asks to replace rather than add to its target.
    ///
    /// `replace` and `overwrite` are treated identically.
    pub fn is_replacement(&self) -> bool {
        self.replace || self.overwrite
    }

    /// Mark as replacing (builder pattern).
    pub fn replacing(mut self) -> Self {
        self.replace = true;
        self
    }

    pub fn with_weapon_sizes(mut self, entries: impl IntoIterator<Item = (WeaponSize, bool)>) -> Self {
        self.weapon_sizes = Some(entries.into_iter().collect());
        self
    }

    pub fn with_weapon_types(mut self, entries: impl IntoIterator<Item = (WeaponType, bool)>) -> Self {
        self.weapon_types = Some(entries.into_iter().collect());
        self
    }

    pub fn with_damage_types(mut self, entries: impl IntoIterator<Item = (DamageType, bool)>) -> Self {
        self.damage_types = Some(entries.into_iter().collect());
        self
    }

    pub fn with_range_types(mut self, entries: impl IntoIterator<Item = (RangeType, bool)>) -> Self {
        self.range_types = Some(entries.into_iter().collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_integer_parsing() {
        assert_eq!(BonusValue::from("2").as_int(), Some(2));
        assert_eq!(BonusValue::from("+3").as_int(), Some(3));
        assert_eq!(BonusValue::from("-1").as_int(), Some(-1));
        assert_eq!(BonusValue::from("1d6").as_int(), Some(1));
        assert_eq!(BonusValue::from("d6").as_int(), None);
        assert_eq!(BonusValue::from(4).as_int(), Some(4));
    }

    #[test]
    fn replace_and_overwrite_are_equivalent() {
        let plain = Bonus::of(BonusKind::Hp, 2);
        assert!(!plain.is_replacement());

        let replace = plain.clone().replacing();
        let overwrite = Bonus {
            overwrite: true,
            ..plain
        };
        assert!(replace.is_replacement());
        assert!(overwrite.is_replacement());
    }

    #[test]
    fn unrecognized_id_has_no_kind() {
        assert_eq!(Bonus::new("hp", 1).kind(), Some(BonusKind::Hp));
        assert_eq!(Bonus::new("license_point", 1).kind(), None);
    }
}
