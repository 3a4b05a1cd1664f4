//! Error types for state machine operations.

use thiserror::Error;

/// Errors returned by [`StateMachine`](crate::StateMachine) mutations.
///
/// A failed call never touches the cursor: `current`, `previous` and `next`
/// are exactly what they were before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsmError {
    /// The requested state is not a key of the state table.
    #[error("'{state}' is not an existing state")]
    InvalidState { state: String },

    /// The current state has no transition for the requested event.
    #[error("'{event}' is not an existing transition from state '{state}'")]
    InvalidTransition { event: String, state: String },
}

/// Discriminant of an [`FsmError`], for callers that only care about the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidState,
    InvalidTransition,
}

impl FsmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidState { .. } => ErrorKind::InvalidState,
            Self::InvalidTransition { .. } => ErrorKind::InvalidTransition,
        }
    }

    /// The offending identifier: the unknown state name or the unknown event name.
    pub fn identifier(&self) -> &str {
        match self {
            Self::InvalidState { state } => state,
            Self::InvalidTransition { event, .. } => event,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FsmError>;
