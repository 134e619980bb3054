//! Dirty tracking for regenerated values.
//!
//! The host recomputes effects in full whenever an entity changes, but only
//! needs to rewrite them when the result actually differs.

/// Holds the last value written and whether it changed since the last take.
#[derive(Clone, Debug, Default)]
pub struct ChangeWatch<T> {
    value: T,
    dirty: bool,
}

impl<T: PartialEq> ChangeWatch<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            dirty: false,
        }
    }

    /// Store a freshly computed value. Returns true (and marks dirty) when it
    /// differs from the stored one; an equal value is discarded.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.dirty = true;
        true
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Acknowledge the current value, clearing the dirty flag.
    pub fn take(&mut self) -> &T {
        self.dirty = false;
        &self.value
    }
}
