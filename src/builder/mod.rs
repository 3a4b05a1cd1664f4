//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and a macro for writing state
//! tables with minimal boilerplate. Both produce a
//! [`MachineConfig`](crate::config::MachineConfig).

pub mod error;
pub mod machine;
pub mod macros;
pub mod state;

pub use error::BuildError;
pub use machine::ConfigBuilder;
pub use state::StateBuilder;
