//! The state machine: a read-only table driven by a mutable cursor.

use crate::config::MachineConfig;
use crate::core::{FsmError, MachineCursor, Result, StateTable};
use tracing::{debug, trace};

/// State every machine starts in, and returns to on [`StateMachine::reset`].
///
/// This is fixed and independent of [`MachineConfig::initial`].
pub const START_STATE: &str = "normal";

/// Finite state machine over string-named states and events.
///
/// The machine owns its own copy of the state table, which is never
/// modified after construction. Moves come in two flavours:
/// - [`trigger`](Self::trigger) follows a transition of the current state;
///   its target is used as-is, even when it is not a key of the table
/// - [`change_state`](Self::change_state) jumps to any state of the table
///
/// Both remember the state they left in a single undo slot.
///
/// # Example
///
/// ```rust
/// use fsm_lite::{fsm_config, StateMachine};
///
/// let mut machine = StateMachine::new(fsm_config! {
///     initial: "normal",
///     states: {
///         "normal" => { "go" => "active" },
///         "active" => { "stop" => "normal" },
///     }
/// });
///
/// assert_eq!(machine.get_state(), "normal");
/// machine.trigger("go").unwrap();
/// assert_eq!(machine.get_state(), "active");
///
/// assert!(machine.undo());
/// assert_eq!(machine.get_state(), "normal");
/// assert!(machine.redo());
/// assert_eq!(machine.get_state(), "active");
/// assert!(!machine.redo());
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    initial: String,
    states: StateTable,
    cursor: MachineCursor,
}

impl StateMachine {
    /// Create a machine from a configuration, positioned at [`START_STATE`].
    pub fn new(config: MachineConfig) -> Self {
        let MachineConfig { initial, states } = config;
        debug!(
            initial = %initial,
            states = states.len(),
            "state machine created"
        );
        Self {
            initial,
            states,
            cursor: MachineCursor::at(START_STATE),
        }
    }

    /// Current state name.
    pub fn get_state(&self) -> &str {
        self.cursor.current()
    }

    /// Jump to `state`, which must be a key of the table.
    ///
    /// Returns the new current state. The redo slot is left untouched.
    pub fn change_state(&mut self, state: &str) -> Result<&str> {
        if !self.states.contains(state) {
            return Err(FsmError::InvalidState {
                state: state.to_string(),
            });
        }

        debug!(from = %self.cursor.current(), to = %state, "state changed");
        self.cursor.advance(state);
        Ok(self.cursor.current())
    }

    /// Follow the transition for `event` from the current state.
    ///
    /// The target is not checked against the table. If the current state is
    /// itself such an unchecked target, it has no transitions and every
    /// event is rejected.
    pub fn trigger(&mut self, event: &str) -> Result<()> {
        let current = self.cursor.current();
        let Some(target) = self
            .states
            .get(current)
            .and_then(|def| def.target(event))
        else {
            return Err(FsmError::InvalidTransition {
                event: event.to_string(),
                state: current.to_string(),
            });
        };

        debug!(from = %current, to = %target, event = %event, "transition triggered");
        let target = target.to_string();
        self.cursor.advance(target);
        Ok(())
    }

    /// Return to [`START_STATE`] and forget all history.
    pub fn reset(&mut self) {
        debug!(from = %self.cursor.current(), to = START_STATE, "state machine reset");
        self.cursor.rewind(START_STATE);
    }

    /// State names in table order.
    ///
    /// With `Some(event)`, only the states that have a transition for that
    /// event are returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm_lite::{fsm_config, StateMachine};
    ///
    /// let machine = StateMachine::new(fsm_config! {
    ///     initial: "normal",
    ///     states: {
    ///         "normal" => { "go" => "active" },
    ///         "active" => { "stop" => "normal" },
    ///     }
    /// });
    ///
    /// assert_eq!(machine.get_states(None), vec!["normal", "active"]);
    /// assert_eq!(machine.get_states(Some("go")), vec!["normal"]);
    /// assert!(machine.get_states(Some("fly")).is_empty());
    /// ```
    pub fn get_states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            None => self.states.names().collect(),
            Some(event) => self
                .states
                .iter()
                .filter(|(_, def)| def.handles(event))
                .map(|(name, _)| name)
                .collect(),
        }
    }

    /// Go back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        if !self.cursor.undo() {
            trace!(state = %self.cursor.current(), "nothing to undo");
            return false;
        }
        debug!(
            from = self.cursor.next().unwrap_or_default(),
            to = %self.cursor.current(),
            "undo"
        );
        true
    }

    /// Re-apply the state left by the last undo. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        if !self.cursor.redo() {
            trace!(state = %self.cursor.current(), "nothing to redo");
            return false;
        }
        debug!(
            from = self.cursor.previous().unwrap_or_default(),
            to = %self.cursor.current(),
            "redo"
        );
        true
    }

    /// Forget the undo and redo slots without moving.
    pub fn clear_history(&mut self) {
        debug!(state = %self.cursor.current(), "history cleared");
        self.cursor.clear_history();
    }

    /// Whether [`undo`](Self::undo) would move.
    pub fn can_undo(&self) -> bool {
        self.cursor.can_undo()
    }

    /// Whether [`redo`](Self::redo) would move.
    pub fn can_redo(&self) -> bool {
        self.cursor.can_redo()
    }

    /// Events accepted from the current state, in table order.
    pub fn events(&self) -> Vec<&str> {
        self.states
            .get(self.cursor.current())
            .map(|def| def.transitions().events().collect())
            .unwrap_or_default()
    }

    /// The configured initial state name, as given at construction.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// The read-only state table.
    pub fn table(&self) -> &StateTable {
        &self.states
    }

    /// Current state and undo/redo slots.
    pub fn cursor(&self) -> &MachineCursor {
        &self.cursor
    }
}

impl From<MachineConfig> for StateMachine {
    fn from(config: MachineConfig) -> Self {
        Self::new(config)
    }
}
