//! Core data model of the state machine.
//!
//! This module contains the plain data the machine is made of:
//! - The state/transition table, built once and then read-only
//! - The cursor: current state plus one-slot undo/redo history
//! - The error type returned by rejected moves
//!
//! Nothing here logs or validates against the table; that is the job of
//! [`StateMachine`](crate::StateMachine).

mod cursor;
mod error;
mod table;

pub use cursor::MachineCursor;
pub use error::{ErrorKind, FsmError, Result};
pub use table::{StateDef, StateTable, TransitionMap};
