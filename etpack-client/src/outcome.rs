//! Fail-soft results
//!
//! Ledger and synchronizer operations never raise: a read always yields a
//! usable value and a write always completes. What they do report is whether
//! the value came from the backing store or from a fallback, and why.

use std::fmt;

/// Why a read fell back or a write was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Degradation {
    /// Slot missing or blank
    Empty,
    /// Local storage read or write failed
    Storage(String),
    /// Slot content is not valid JSON of the expected shape
    Corrupt(String),
    /// Remote store unreachable or returned an error
    Remote(String),
    /// Remote store answered with an empty list
    RemoteEmpty,
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("slot is empty"),
            Self::Storage(msg) => write!(f, "storage unavailable: {msg}"),
            Self::Corrupt(msg) => write!(f, "slot content unreadable: {msg}"),
            Self::Remote(msg) => write!(f, "remote store failed: {msg}"),
            Self::RemoteEmpty => f.write_str("remote list is empty"),
        }
    }
}

/// Result of a fail-soft read
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Value read from the backing store
    Fresh(T),
    /// Fallback value substituted after a degradation
    Fallback { value: T, reason: Degradation },
}

impl<T> Outcome<T> {
    pub fn fallback(value: T, reason: Degradation) -> Self {
        Self::Fallback { value, reason }
    }

    pub fn value(&self) -> &T {
        match self {
            Self::Fresh(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Fresh(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn reason(&self) -> Option<&Degradation> {
        match self {
            Self::Fresh(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }

    /// Transform the value, keeping the degradation
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Fresh(value) => Outcome::Fresh(f(value)),
            Self::Fallback { value, reason } => Outcome::Fallback {
                value: f(value),
                reason,
            },
        }
    }
}

/// Result of a fail-soft write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Slot rewritten
    Written,
    /// Nothing to write (e.g. update of an unknown id)
    Skipped,
    /// Write attempted and lost
    Dropped(Degradation),
}

impl WriteOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let fresh = Outcome::Fresh(3);
        assert_eq!(*fresh.value(), 3);
        assert!(!fresh.is_fallback());
        assert!(fresh.reason().is_none());

        let fallback = Outcome::fallback(vec![1], Degradation::Empty);
        assert!(fallback.is_fallback());
        assert_eq!(fallback.reason(), Some(&Degradation::Empty));

        let mapped = fallback.map(|v| v.len());
        assert_eq!(mapped, Outcome::fallback(1, Degradation::Empty));
        assert_eq!(mapped.into_value(), 1);
    }

    #[test]
    fn test_degradation_display() {
        assert_eq!(
            Degradation::Remote("timeout".into()).to_string(),
            "remote store failed: timeout"
        );
    }
}
