//! fsm-lite: a minimal finite state machine with one-step undo/redo
//!
//! A machine is configured once with a table of named states, each listing
//! the events it accepts and the state each event leads to. At runtime it
//! tracks the current state, follows transitions by event name, and keeps
//! exactly one step of undo/redo history.
//!
//! # Core Concepts
//!
//! - **State table**: read-only mapping of state names to their transitions
//! - **Cursor**: current state plus a single undo slot and a single redo slot
//! - **Errors**: rejected moves return a tagged [`FsmError`] and change nothing
//!
//! Every machine starts in the state named `"normal"`, and [`StateMachine::reset`]
//! returns there. The configured `initial` name is kept for reference only.
//!
//! # Example
//!
//! ```rust
//! use fsm_lite::{FsmError, MachineConfig, StateMachine};
//!
//! let config = MachineConfig::from_json(r#"{
//!     "initial": "normal",
//!     "states": {
//!         "normal": { "transitions": { "study": "busy" } },
//!         "busy": { "transitions": { "get_tired": "sleeping" } },
//!         "sleeping": { "transitions": { "get_up": "normal" } }
//!     }
//! }"#).unwrap();
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("study").unwrap();
//! assert_eq!(machine.get_state(), "busy");
//!
//! let err = machine.trigger("get_up").unwrap_err();
//! assert!(matches!(err, FsmError::InvalidTransition { .. }));
//!
//! assert!(machine.undo());
//! assert_eq!(machine.get_state(), "normal");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use config::{ConfigError, MachineConfig};
pub use self::core::{ErrorKind, FsmError, MachineCursor, StateDef, StateTable, TransitionMap};
pub use machine::{StateMachine, START_STATE};
