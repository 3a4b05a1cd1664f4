//! State and transition tables.
//!
//! The table is plain data: it is built once, handed to a machine, and
//! never mutated afterwards. States and events are raw string identifiers
//! rather than a closed enumeration, so a transition may name a target
//! that is not itself a key of the table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from event name to target state name for a single state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionMap {
    targets: IndexMap<String, String>,
}

impl TransitionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the target for `event`, returning the previous target.
    pub fn insert(&mut self, event: impl Into<String>, target: impl Into<String>) -> Option<String> {
        self.targets.insert(event.into(), target.into())
    }

    /// Target state for `event`, if the event is handled.
    pub fn get(&self, event: &str) -> Option<&str> {
        self.targets.get(event).map(String::as_str)
    }

    pub fn contains(&self, event: &str) -> bool {
        self.targets.contains_key(event)
    }

    /// Event names in insertion order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    /// `(event, target)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.targets
            .iter()
            .map(|(event, target)| (event.as_str(), target.as_str()))
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<E: Into<String>, T: Into<String>> FromIterator<(E, T)> for TransitionMap {
    fn from_iter<I: IntoIterator<Item = (E, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (event, target) in iter {
            map.insert(event, target);
        }
        map
    }
}

/// Definition of a single state: the events it accepts and where they lead.
///
/// # Example
///
/// ```rust
/// use fsm_lite::core::StateDef;
///
/// let normal = StateDef::new().on("go", "active").on("sleep", "idle");
///
/// assert_eq!(normal.target("go"), Some("active"));
/// assert!(!normal.handles("stop"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    #[serde(default)]
    transitions: TransitionMap,
}

impl StateDef {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transitions(transitions: TransitionMap) -> Self {
        Self { transitions }
    }

    /// Add a transition, replacing any existing one for the same event.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event, target);
        self
    }

    pub fn transitions(&self) -> &TransitionMap {
        &self.transitions
    }

    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event)
    }

    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains(event)
    }
}

/// Ordered mapping from state name to [`StateDef`].
///
/// Order is insertion order (document order when deserialized), and it is
/// the order in which [`StateMachine::get_states`](crate::StateMachine::get_states)
/// reports states.
///
/// # Example
///
/// ```rust
/// use fsm_lite::core::{StateDef, StateTable};
///
/// let mut table = StateTable::new();
/// table.insert("normal", StateDef::new().on("go", "active"));
/// table.insert("active", StateDef::new().on("stop", "normal"));
///
/// let names: Vec<&str> = table.names().collect();
/// assert_eq!(names, vec!["normal", "active"]);
/// assert!(table.contains("active"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateTable {
    states: IndexMap<String, StateDef>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a state definition, returning the replaced definition.
    ///
    /// A replaced state keeps its original position in the table.
    pub fn insert(&mut self, name: impl Into<String>, def: StateDef) -> Option<StateDef> {
        self.states.insert(name.into(), def)
    }

    pub fn get(&self, name: &str) -> Option<&StateDef> {
        self.states.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// State names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDef)> {
        self.states.iter().map(|(name, def)| (name.as_str(), def))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Transitions whose target is not a key of this table, as
    /// `(state, event, target)` triples.
    ///
    /// Such targets are legal; this is a diagnostic only.
    pub fn dangling_targets(&self) -> Vec<(&str, &str, &str)> {
        let table = self;
        self.iter()
            .flat_map(move |(state, def)| {
                def.transitions()
                    .iter()
                    .filter(move |(_, target)| !table.contains(target))
                    .map(move |(event, target)| (state, event, target))
            })
            .collect()
    }
}

impl<N: Into<String>> FromIterator<(N, StateDef)> for StateTable {
    fn from_iter<I: IntoIterator<Item = (N, StateDef)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, def) in iter {
            table.insert(name, def);
        }
        table
    }
}
