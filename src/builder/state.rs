//! Builder for a single state definition.

use crate::core::{StateDef, TransitionMap};

/// Builder for a [`StateDef`] with a fluent API.
///
/// Later transitions for the same event replace earlier ones.
#[derive(Clone, Debug, Default)]
pub struct StateBuilder {
    transitions: TransitionMap,
}

impl StateBuilder {
    /// Create a builder for a state with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition taken on `event`.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event, target);
        self
    }

    /// Add several transitions at once.
    pub fn transitions<I, E, T>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (E, T)>,
        E: Into<String>,
        T: Into<String>,
    {
        for (event, target) in transitions {
            self.transitions.insert(event, target);
        }
        self
    }

    /// Build the state definition.
    pub fn build(self) -> StateDef {
        StateDef::with_transitions(self.transitions)
    }
}
