//! Builder for machine configurations.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::config::MachineConfig;
use crate::core::{StateDef, StateTable};
use crate::machine::StateMachine;

/// Builder for [`MachineConfig`] with a fluent API.
///
/// Stricter than constructing a config by hand: an initial state and at
/// least one state are required, and each state may only be defined once.
///
/// # Example
///
/// ```rust
/// use fsm_lite::builder::{ConfigBuilder, StateBuilder};
///
/// let mut machine = ConfigBuilder::new()
///     .initial("normal")
///     .state("normal", StateBuilder::new().on("go", "active"))
///     .state("active", StateBuilder::new().on("stop", "normal"))
///     .build_machine()
///     .unwrap();
///
/// machine.trigger("go").unwrap();
/// assert_eq!(machine.get_state(), "active");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: Vec<(String, StateDef)>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state name (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a state using a builder.
    pub fn state(self, name: impl Into<String>, builder: StateBuilder) -> Self {
        self.state_def(name, builder.build())
    }

    /// Add a pre-built state definition.
    pub fn state_def(mut self, name: impl Into<String>, def: StateDef) -> Self {
        self.states.push((name.into(), def));
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing or a state is repeated.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut table = StateTable::new();
        for (name, def) in self.states {
            if table.contains(&name) {
                return Err(BuildError::DuplicateState(name));
            }
            table.insert(name, def);
        }

        Ok(MachineConfig::new(initial, table))
    }

    /// Build the configuration and construct a machine from it.
    pub fn build_machine(self) -> Result<StateMachine, BuildError> {
        self.build().map(StateMachine::new)
    }
}
