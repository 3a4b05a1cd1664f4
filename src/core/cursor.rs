//! Runtime position of a state machine.
//!
//! The cursor holds the current state plus a single undo slot and a single
//! redo slot. It is not a history stack: each slot remembers at most one
//! state, and undoing empties the undo slot.

use serde::{Deserialize, Serialize};

/// Current state plus one-step undo/redo history.
///
/// The cursor performs no validation; [`StateMachine`](crate::StateMachine)
/// decides which moves are legal and then drives the cursor.
///
/// # Example
///
/// ```rust
/// use fsm_lite::core::MachineCursor;
///
/// let mut cursor = MachineCursor::at("normal");
/// cursor.advance("active");
///
/// assert_eq!(cursor.previous(), Some("normal"));
/// assert!(cursor.undo());
/// assert_eq!(cursor.current(), "normal");
/// assert_eq!(cursor.next(), Some("active"));
///
/// // The undo slot was consumed.
/// assert!(!cursor.undo());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineCursor {
    current: String,
    previous: Option<String>,
    next: Option<String>,
}

impl MachineCursor {
    /// Place a cursor on `state` with empty history.
    pub fn at(state: impl Into<String>) -> Self {
        Self {
            current: state.into(),
            previous: None,
            next: None,
        }
    }

    /// State the cursor is on.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Undo slot: the state a successful `undo` returns to.
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Redo slot: the state a successful `redo` returns to.
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Whether the undo slot is armed.
    pub fn can_undo(&self) -> bool {
        self.previous.is_some()
    }

    /// Whether the redo slot is armed.
    pub fn can_redo(&self) -> bool {
        self.next.is_some()
    }

    /// Move to `to`, remembering the current state in the undo slot.
    ///
    /// The redo slot is left as it is.
    pub fn advance(&mut self, to: impl Into<String>) {
        let to = to.into();
        let from = std::mem::replace(&mut self.current, to);
        self.previous = Some(from);
    }

    /// Step back to the undo slot. Returns `false` if it is empty.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.previous.take() else {
            return false;
        };
        let current = std::mem::replace(&mut self.current, previous);
        self.next = Some(current);
        true
    }

    /// Step forward to the redo slot. Returns `false` if it is empty.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.next.take() else {
            return false;
        };
        let current = std::mem::replace(&mut self.current, next);
        self.previous = Some(current);
        true
    }

    /// Empty both slots without moving.
    pub fn clear_history(&mut self) {
        self.previous = None;
        self.next = None;
    }

    /// Jump to `state` and empty both slots.
    pub fn rewind(&mut self, state: impl Into<String>) {
        self.current = state.into();
        self.clear_history();
    }
}
