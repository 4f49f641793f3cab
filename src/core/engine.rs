use std::collections::HashMap;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::core::state::{GameState, Transition};

const FRAME_BUDGET: Duration = Duration::from_millis(16);

/// Drives the registered game states: one draw + one update per frame,
/// switching states whenever an update asks for it.
pub struct StateRunner {
    states: HashMap<&'static str, Box<dyn GameState>>,
    current: &'static str,
}

impl StateRunner {
    pub fn new(initial: &'static str) -> Self {
        Self {
            states: HashMap::new(),
            current: initial,
        }
    }

    /// Add a state under its own name. Registering the same name twice
    /// replaces the earlier state.
    pub fn register(&mut self, state: Box<dyn GameState>) {
        self.states.insert(state.name(), state);
    }

    /// Name of the state currently in control.
    pub fn current(&self) -> &'static str {
        self.current
    }

    /// Run one frame's update on the current state and apply any transition
    /// it requests. Returns `false` once a state asks to quit.
    pub fn step(&mut self, events: &[Event]) -> Result<bool> {
        let state = self
            .states
            .get_mut(self.current)
            .ok_or_else(|| anyhow!("state '{}' not found in registry", self.current))?;

        match state.update(events) {
            Some(Transition::Switch(next)) => {
                if !self.states.contains_key(next) {
                    return Err(anyhow!("state '{next}' not found in registry"));
                }
                debug!(from = self.current, to = next, "switching state");
                self.current = next;
            }
            Some(Transition::Quit) => return Ok(false),
            None => {}
        }
        Ok(true)
    }

    /// Main loop: draw the current state, drain pending input, step.
    /// Returns once a state requests quit.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            let state = self
                .states
                .get_mut(self.current)
                .ok_or_else(|| anyhow!("state '{}' not found in registry", self.current))?;
            terminal.draw(|f| state.redraw(f))?;

            let events = poll_events(FRAME_BUDGET)?;
            if !self.step(&events)? {
                return Ok(());
            }
        }
    }
}

/// Wait up to `budget` for input, then drain whatever else is already queued
/// so a burst of key repeats lands in a single frame.
fn poll_events(budget: Duration) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    if event::poll(budget)? {
        events.push(event::read()?);
        while event::poll(Duration::from_millis(0))? {
            events.push(event::read()?);
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Frame;

    struct Scripted {
        name: &'static str,
        transition: Option<Transition>,
        updates_seen: usize,
    }

    impl Scripted {
        fn new(name: &'static str, transition: Option<Transition>) -> Self {
            Self {
                name,
                transition,
                updates_seen: 0,
            }
        }
    }

    impl GameState for Scripted {
        fn name(&self) -> &'static str {
            self.name
        }

        fn update(&mut self, _events: &[Event]) -> Option<Transition> {
            self.updates_seen += 1;
            self.transition
        }

        fn redraw(&mut self, _frame: &mut Frame) {}
    }

    #[test]
    fn stays_on_state_when_update_returns_none() {
        let mut runner = StateRunner::new("a");
        runner.register(Box::new(Scripted::new("a", None)));

        assert!(runner.step(&[]).unwrap());
        assert!(runner.step(&[]).unwrap());
        assert_eq!(runner.current(), "a");
    }

    #[test]
    fn switch_hands_control_to_the_named_state() {
        let mut runner = StateRunner::new("a");
        runner.register(Box::new(Scripted::new("a", Some(Transition::Switch("b")))));
        runner.register(Box::new(Scripted::new("b", None)));

        assert!(runner.step(&[]).unwrap());
        assert_eq!(runner.current(), "b");
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut runner = StateRunner::new("a");
        runner.register(Box::new(Scripted::new("a", Some(Transition::Quit))));

        assert!(!runner.step(&[]).unwrap());
    }

    #[test]
    fn switch_to_unregistered_state_is_an_error() {
        let mut runner = StateRunner::new("a");
        runner.register(Box::new(Scripted::new("a", Some(Transition::Switch("missing")))));

        assert!(runner.step(&[]).is_err());
    }

    #[test]
    fn unregistered_current_state_is_an_error() {
        let mut runner = StateRunner::new("nowhere");
        assert!(runner.step(&[]).is_err());
    }
}
