//! Common error infrastructure for lancer-core.
//!
//! Two failure classes exist in the pipeline:
//!
//! - **Diagnostics** ([`UnsupportedBonus`]): a single bonus could not be
//!   converted. The record is dropped and compilation continues.
//! - **Errors** ([`EffectError`]): a precondition on the entity snapshot does
//!   not hold. Compilation of that entity stops and the error propagates to the
//!   caller, which is expected to surface it to the user.

use crate::entity::Entity;
use crate::types::EntryType;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable - the offending record is skipped, the rest still applies.
    ///
    /// Examples: bonus kind not supported
    Recoverable,

    /// Validation error - the snapshot carries an impossible selection.
    ///
    /// Examples: NPC tier beyond the class's statlines
    Validation,

    /// Internal error - upstream data preparation produced a malformed snapshot.
    ///
    /// Examples: weapon without an active profile
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an upstream bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Contextual information attached to errors for debugging and diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Id of the entity being compiled (if known).
    pub entity: Option<String>,

    pub entry_type: Option<EntryType>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entity: None,
            entry_type: None,
        }
    }

    /// Attaches the entity under compilation (builder pattern).
    #[must_use]
    pub fn with_entity(mut self, entity: &Entity) -> Self {
        self.entity = Some(entity.id.clone());
        self.entry_type = Some(entity.entry_type());
        self
    }
}

/// Common trait for all lancer-core errors and diagnostics.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Include `ErrorContext` in variants that need debugging info
/// - Classify severity based on recoverability, not impact
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the context information for this error, if available.
    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Precondition violations found while compiling an entity.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EffectError {
    #[error("weapon has no active profile (selected {selected} of {available})")]
    MissingActiveProfile {
        selected: usize,
        available: usize,
        context: ErrorContext,
    },

    #[error("npc class has no base stats for tier {tier} ({available} tiers defined)")]
    NpcTierOutOfRange {
        tier: u8,
        available: usize,
        context: ErrorContext,
    },
}

impl EffectError {
    /// Attach the entity under compilation to this error's context.
    #[must_use]
    pub fn for_entity(mut self, entity: &Entity) -> Self {
        let context = match &mut self {
            Self::MissingActiveProfile { context, .. } | Self::NpcTierOutOfRange { context, .. } => {
                context
            }
        };
        *context = core::mem::take(context).with_entity(entity);
        self
    }
}

impl EngineError for EffectError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingActiveProfile { .. } => ErrorSeverity::Internal,
            Self::NpcTierOutOfRange { .. } => ErrorSeverity::Validation,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::MissingActiveProfile { context, .. } | Self::NpcTierOutOfRange { context, .. } => {
                Some(context)
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingActiveProfile { .. } => "EFFECT_MISSING_ACTIVE_PROFILE",
            Self::NpcTierOutOfRange { .. } => "EFFECT_NPC_TIER_OUT_OF_RANGE",
        }
    }
}

/// A bonus whose id the converter does not recognize.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("bonus of type {id} not yet supported ({label})")]
pub struct UnsupportedBonus {
    pub origin: String,
    pub label: String,
    pub id: String,
}

impl EngineError for UnsupportedBonus {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "BONUS_UNSUPPORTED"
    }
}
