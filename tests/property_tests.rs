//! Property-based tests for the state machine.
//!
//! These tests use proptest to verify the machine's guarantees hold across
//! many randomly generated tables and operation sequences.

use fsm_lite::core::{StateDef, StateTable};
use fsm_lite::{fsm_config, ErrorKind, MachineConfig, StateMachine};
use proptest::prelude::*;

const NAMES: [&str; 6] = ["normal", "active", "busy", "idle", "hungry", "ghost"];
const EVENTS: [&str; 4] = ["go", "stop", "eat", "sleep"];

prop_compose! {
    fn arbitrary_name()(index in 0..NAMES.len()) -> String {
        NAMES[index].to_string()
    }
}

prop_compose! {
    fn arbitrary_event()(index in 0..EVENTS.len()) -> String {
        EVENTS[index].to_string()
    }
}

prop_compose! {
    // "normal" is always present; targets may name states outside the table.
    fn arbitrary_table()(
        extra in prop::collection::vec(arbitrary_name(), 0..4),
        transitions in prop::collection::vec(
            prop::collection::vec((arbitrary_event(), arbitrary_name()), 0..4),
            5,
        ),
    ) -> StateTable {
        let mut names = vec!["normal".to_string()];
        for name in extra {
            if name != "ghost" && !names.contains(&name) {
                names.push(name);
            }
        }
        names
            .into_iter()
            .zip(transitions)
            .map(|(name, pairs)| {
                let def = pairs
                    .into_iter()
                    .fold(StateDef::new(), |def, (event, target)| def.on(event, target));
                (name, def)
            })
            .collect()
    }
}

#[derive(Clone, Debug)]
enum Op {
    Change(String),
    Trigger(String),
    Undo,
    Redo,
    Reset,
    ClearHistory,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_name().prop_map(Op::Change),
        arbitrary_event().prop_map(Op::Trigger),
        Just(Op::Undo),
        Just(Op::Redo),
        Just(Op::Reset),
        Just(Op::ClearHistory),
    ]
}

fn apply(machine: &mut StateMachine, op: &Op) {
    match op {
        Op::Change(state) => {
            let _ = machine.change_state(state);
        }
        Op::Trigger(event) => {
            let _ = machine.trigger(event);
        }
        Op::Undo => {
            machine.undo();
        }
        Op::Redo => {
            machine.redo();
        }
        Op::Reset => machine.reset(),
        Op::ClearHistory => machine.clear_history(),
    }
}

fn machine_for(table: StateTable) -> StateMachine {
    StateMachine::new(MachineConfig::new("normal", table))
}

proptest! {
    #[test]
    fn change_state_to_known_state_sticks(table in arbitrary_table(), pick in any::<prop::sample::Index>()) {
        let names: Vec<String> = table.names().map(str::to_string).collect();
        let target = pick.get(&names).clone();
        let mut machine = machine_for(table);

        prop_assert_eq!(machine.change_state(&target).unwrap(), target.as_str());
        prop_assert_eq!(machine.get_state(), target.as_str());
    }

    #[test]
    fn change_state_to_unknown_state_fails_cleanly(
        table in arbitrary_table(),
        ops in prop::collection::vec(arbitrary_op(), 0..8),
        target in arbitrary_name(),
    ) {
        prop_assume!(!table.contains(&target));
        let mut machine = machine_for(table);
        for op in &ops {
            apply(&mut machine, op);
        }
        let before = machine.cursor().clone();

        let err = machine.change_state(&target).unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::InvalidState);
        prop_assert_eq!(err.identifier(), target.as_str());
        prop_assert_eq!(machine.cursor(), &before);
    }

    #[test]
    fn trigger_follows_table_or_fails_cleanly(
        table in arbitrary_table(),
        ops in prop::collection::vec(arbitrary_op(), 0..8),
        event in arbitrary_event(),
    ) {
        let mut machine = machine_for(table.clone());
        for op in &ops {
            apply(&mut machine, op);
        }
        let before = machine.cursor().clone();
        let expected = table
            .get(before.current())
            .and_then(|def| def.target(&event))
            .map(str::to_string);

        match (machine.trigger(&event), expected) {
            (Ok(()), Some(target)) => {
                prop_assert_eq!(machine.get_state(), target.as_str());
                prop_assert_eq!(machine.cursor().previous(), Some(before.current()));
                prop_assert_eq!(machine.cursor().next(), before.next());
            }
            (Err(err), None) => {
                prop_assert_eq!(err.kind(), ErrorKind::InvalidTransition);
                prop_assert_eq!(err.identifier(), event.as_str());
                prop_assert_eq!(machine.cursor(), &before);
            }
            (result, expected) => {
                prop_assert!(false, "trigger returned {:?}, table says {:?}", result, expected);
            }
        }
    }

    #[test]
    fn fresh_machine_has_nothing_to_undo(table in arbitrary_table()) {
        let mut machine = machine_for(table);

        prop_assert!(!machine.undo());
        prop_assert!(!machine.redo());
        prop_assert_eq!(machine.get_state(), "normal");
    }

    #[test]
    fn reset_always_returns_to_normal(
        table in arbitrary_table(),
        ops in prop::collection::vec(arbitrary_op(), 0..16),
    ) {
        let mut machine = machine_for(table);
        for op in &ops {
            apply(&mut machine, op);
        }

        machine.reset();

        prop_assert_eq!(machine.get_state(), "normal");
        prop_assert!(!machine.undo());
        prop_assert!(!machine.redo());
    }

    #[test]
    fn clear_history_keeps_state_and_disarms_history(
        table in arbitrary_table(),
        ops in prop::collection::vec(arbitrary_op(), 0..16),
    ) {
        let mut machine = machine_for(table);
        for op in &ops {
            apply(&mut machine, op);
        }
        let state = machine.get_state().to_string();

        machine.clear_history();

        prop_assert_eq!(machine.get_state(), state.as_str());
        prop_assert!(!machine.undo());
        prop_assert!(!machine.redo());
        prop_assert_eq!(machine.get_state(), state.as_str());
    }

    #[test]
    fn undo_then_redo_restores_state(
        table in arbitrary_table(),
        ops in prop::collection::vec(arbitrary_op(), 0..16),
    ) {
        let mut machine = machine_for(table);
        for op in &ops {
            apply(&mut machine, op);
        }
        let state = machine.get_state().to_string();

        if machine.undo() {
            prop_assert!(!machine.undo());
            prop_assert!(machine.redo());
            prop_assert_eq!(machine.get_state(), state.as_str());
            prop_assert!(!machine.redo());
        }
    }

    #[test]
    fn get_states_filters_in_table_order(table in arbitrary_table(), event in arbitrary_event()) {
        let machine = machine_for(table.clone());

        let all: Vec<&str> = table.names().collect();
        prop_assert_eq!(machine.get_states(None), all.clone());

        let expected: Vec<&str> = all
            .into_iter()
            .filter(|name| table.get(name).is_some_and(|def| def.handles(&event)))
            .collect();
        prop_assert_eq!(machine.get_states(Some(event.as_str())), expected);
    }

    #[test]
    fn config_survives_json(table in arbitrary_table(), initial in arbitrary_name()) {
        let config = MachineConfig::new(initial, table);

        let text = config.to_json_pretty().unwrap();
        prop_assert_eq!(MachineConfig::from_json(&text).unwrap(), config);
    }
}

#[test]
fn documented_go_stop_sequence() {
    let mut machine = StateMachine::new(fsm_config! {
        initial: "normal",
        states: {
            "normal" => { "go" => "active" },
            "active" => { "stop" => "normal" },
        }
    });

    assert_eq!(machine.get_state(), "normal");
    machine.trigger("go").unwrap();
    assert_eq!(machine.get_state(), "active");
    assert!(machine.undo());
    assert_eq!(machine.get_state(), "normal");
    assert!(machine.redo());
    assert_eq!(machine.get_state(), "active");
    assert!(!machine.redo());

    assert_eq!(machine.get_states(None), vec!["normal", "active"]);
    assert_eq!(machine.get_states(Some("go")), vec!["normal"]);
}

#[test]
fn history_is_one_slot_not_a_stack() {
    let mut machine = StateMachine::new(fsm_config! {
        initial: "normal",
        states: {
            "normal" => {},
            "busy" => {},
            "hungry" => {},
        }
    });

    machine.change_state("busy").unwrap();
    assert!(machine.undo());
    machine.change_state("hungry").unwrap();

    assert!(machine.undo());
    assert_eq!(machine.get_state(), "normal");
    assert!(!machine.undo());
}
