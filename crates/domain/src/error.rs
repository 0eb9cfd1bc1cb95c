//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ModeKitError`]
//! via `#[from]`; adapters wrap their infrastructure errors through the
//! [`ModeKitError::Storage`] variant.

use crate::profile::TriggerKind;

/// Top-level error type returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum ModeKitError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// An operation referenced an unknown record.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// An operation was attempted in a state that no longer accepts it.
    #[error("invalid state")]
    InvalidState(#[from] InvalidStateError),

    /// The storage layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A profile name must be a non-empty string.
    #[error("profile name must not be empty")]
    EmptyName,

    /// A profile may hold at most one trigger configuration per kind.
    #[error("duplicate trigger configuration for kind `{kind}`")]
    DuplicateTriggerKind { kind: TriggerKind },
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} `{id}` not found")]
pub struct NotFoundError {
    /// The record type, e.g. `"Profile"`.
    pub entity: &'static str,
    /// The identifier that failed to resolve.
    pub id: String,
}

/// An editor session was mutated after reaching a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("editor session already {state}")]
pub struct InvalidStateError {
    /// The terminal state the session is in (`"committed"` or `"discarded"`).
    pub state: &'static str,
}
