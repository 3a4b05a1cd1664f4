//! Traffic Light
//!
//! This example drives a small state table by event name and shows the
//! one-step undo/redo history.
//!
//! Key concepts:
//! - Declaring a table with the `fsm_config!` macro
//! - Triggering transitions and handling rejected events
//! - Undo/redo holding a single step, not a stack
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use fsm_lite::{fsm_config, FsmError, StateMachine};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light Example ===\n");

    let mut light = StateMachine::new(fsm_config! {
        initial: "normal",
        states: {
            "normal" => { "power_on" => "red" },
            "red" => { "timer" => "green", "fault" => "flashing" },
            "green" => { "timer" => "yellow", "fault" => "flashing" },
            "yellow" => { "timer" => "red", "fault" => "flashing" },
        }
    });

    println!("Starting state: {}", light.get_state());
    println!("States with a timer: {:?}", light.get_states(Some("timer")));

    for event in ["power_on", "timer", "timer", "timer"] {
        match light.trigger(event) {
            Ok(()) => println!("{event:>10} -> {}", light.get_state()),
            Err(err) => println!("{event:>10} rejected: {err}"),
        }
    }

    // "flashing" is a transition target without its own entry in the table.
    light.trigger("fault").ok();
    println!("After fault: {} (accepts {:?})", light.get_state(), light.events());

    match light.trigger("timer") {
        Err(FsmError::InvalidTransition { event, state }) => {
            println!("No '{event}' transition out of '{state}'");
        }
        other => println!("Unexpected result: {other:?}"),
    }

    let undone = light.undo();
    println!("\nUndo: {undone} -> now {}", light.get_state());
    let undone = light.undo();
    println!("Undo again: {undone} -> still {}", light.get_state());
    let redone = light.redo();
    println!("Redo: {redone} -> now {}", light.get_state());

    light.reset();
    println!("\nAfter reset: {}", light.get_state());

    println!("\n=== Example Complete ===");
}
