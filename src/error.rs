//! Error types for the draft engine.
//!
//! Two families, kept apart so callers can tell "the draft cannot start"
//! from "that action is not allowed right now":
//!
//! - `ConfigurationError`: the pool or draft size makes a draft impossible.
//! - `InvalidStateError`: the call does not fit the draft's current phase.
//!
//! A rejected call never changes engine state.

use thiserror::Error;

/// The pool and draft size cannot produce a draft.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("card pool is empty")]
    EmptyPool,

    #[error("draft size must be positive")]
    ZeroDraftSize,

    #[error("draft size {draft_size} exceeds pool size {pool_size}")]
    DraftSizeExceedsPool { draft_size: usize, pool_size: usize },
}

/// The requested operation does not fit the current draft phase.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidStateError {
    #[error("draft has not been started")]
    NotStarted,

    #[error("draft is already complete")]
    Complete,

    #[error("draft is in progress")]
    InProgress,

    #[error("draft is not complete yet")]
    NotComplete,
}

/// Any error the engine reports.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("cannot start draft: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("action not allowed: {0}")]
    InvalidState(#[from] InvalidStateError),
}

impl DraftError {
    /// True for errors that prevent a draft from starting.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, DraftError::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConfigurationError::DraftSizeExceedsPool {
            draft_size: 10,
            pool_size: 4,
        };
        assert_eq!(err.to_string(), "draft size 10 exceeds pool size 4");

        let wrapped: DraftError = err.into();
        assert_eq!(
            wrapped.to_string(),
            "cannot start draft: draft size 10 exceeds pool size 4"
        );
        assert!(wrapped.is_configuration());
    }

    #[test]
    fn test_invalid_state_is_distinct() {
        let err: DraftError = InvalidStateError::Complete.into();
        assert!(!err.is_configuration());
        assert_eq!(err, DraftError::InvalidState(InvalidStateError::Complete));
    }
}
