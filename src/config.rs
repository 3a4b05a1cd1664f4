//! Machine configuration.
//!
//! A configuration is the `initial` state name plus the full state table.
//! It can be built in code, with [`ConfigBuilder`](crate::builder::ConfigBuilder),
//! with the [`fsm_config!`](crate::fsm_config) macro, or parsed from JSON:
//!
//! ```json
//! {
//!   "initial": "normal",
//!   "states": {
//!     "normal": { "transitions": { "go": "active" } },
//!     "active": { "transitions": { "stop": "normal" } }
//!   }
//! }
//! ```

use crate::core::StateTable;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid JSON or did not have the config shape
    #[error("Invalid machine config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration a [`StateMachine`](crate::StateMachine) is constructed from.
///
/// `initial` is stored and reported by the machine but does not choose the
/// starting state: machines always start (and reset) at `"normal"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub initial: String,
    pub states: StateTable,
}

impl MachineConfig {
    pub fn new(initial: impl Into<String>, states: StateTable) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration from JSON text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm_lite::config::MachineConfig;
    ///
    /// let config = MachineConfig::from_json(
    ///     r#"{ "initial": "normal", "states": { "normal": { "transitions": {} } } }"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(config.initial, "normal");
    /// assert!(config.states.contains("normal"));
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Convert an already-parsed JSON value into a configuration.
    ///
    /// Object key order in the value is kept, so states appear in the same
    /// order as with [`from_json`](Self::from_json).
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
