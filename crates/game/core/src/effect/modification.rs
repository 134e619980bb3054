//! Primitive stat modifications.

use std::fmt;

use crate::bonus::BonusValue;
use crate::types::EffectTarget;

/// How a modification combines with the value already at its key.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum EffectMode {
    Add,
    Override,
}

/// Resolution tier of a modification. Lower tiers apply first and are the
/// easiest to supersede.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Priority(pub i32);

impl Priority {
    /// Frame and NPC class base stats.
    pub const FRAME: Self = Self(10);

    /// Ordinary item bonuses.
    pub const BONUS: Self = Self(20);

    /// Pilot HASE/GRIT contributions to the mech.
    pub const PILOT: Self = Self(30);

    /// Statuses, conditions and transient effects.
    pub const EFFECT: Self = Self(40);

    /// Bonuses flagged `replace` or `overwrite`.
    pub const REPLACE: Self = Self(50);
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value carried by a modification.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum ChangeValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl ChangeValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<i32> for ChangeValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<f64> for ChangeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for ChangeValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for ChangeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<&BonusValue> for ChangeValue {
    fn from(value: &BonusValue) -> Self {
        match value {
            BonusValue::Number(n) => Self::Number(*n),
            BonusValue::Text(s) => Self::Text(s.clone()),
        }
    }
}

impl fmt::Display for ChangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One change to one actor attribute.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modification {
    /// Attribute path on the actor, e.g. `system.hp.max`.
    pub key: String,
    pub mode: EffectMode,
    pub priority: Priority,
    pub value: ChangeValue,
    /// Actor restriction implied by the bonus kind that produced this change.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub target: Option<EffectTarget>,
}

impl Modification {
    pub fn new(
        key: impl Into<String>,
        mode: EffectMode,
        priority: Priority,
        value: impl Into<ChangeValue>,
    ) -> Self {
        Self {
            key: key.into(),
            mode,
            priority,
            value: value.into(),
            target: None,
        }
    }

    /// Shorthand for an [`EffectMode::Add`] change.
    pub fn add(key: impl Into<String>, priority: Priority, value: impl Into<ChangeValue>) -> Self {
        Self::new(key, EffectMode::Add, priority, value)
    }

    /// Shorthand for an [`EffectMode::Override`] change.
    pub fn set(key: impl Into<String>, priority: Priority, value: impl Into<ChangeValue>) -> Self {
        Self::new(key, EffectMode::Override, priority, value)
    }

    /// Restrict to an actor type (builder pattern).
    pub fn with_target(mut self, target: EffectTarget) -> Self {
        self.target = Some(target);
        self
    }
}

impl fmt::Display for Modification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.mode {
            EffectMode::Add => "+=",
            EffectMode::Override => "=",
        };
        write!(f, "{} {} {} @{}", self.key, op, self.value, self.priority)
    }
}
