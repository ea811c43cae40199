//! Run/stop control plus the magnet-placement and trace-overlay flags.

use crate::error::PhysicsError;
use crate::observer::SessionObserver;
use alloc::boxed::Box;
use alloc::vec::Vec as AllocVec;
use core::fmt;
use tracing::debug;

/// Whether the integrator is being driven.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RunState {
    #[default]
    Stopped = 0,
    Running = 1,
}

impl TryFrom<u8> for RunState {
    type Error = PhysicsError;

    /// Decode a run state handed over by an untyped host.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(RunState::Stopped),
            1 => Ok(RunState::Running),
            other => Err(PhysicsError::UnknownRunState(other)),
        }
    }
}

/// The composite session state passed to observers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub run_state: RunState,
    pub adding_magnet: bool,
    pub showing_trace: bool,
}

/// Session state machine. Starts `Stopped` with both flags cleared.
///
/// The two flags are independent of the run state; nothing here stops a host
/// from placing magnets while running.
#[derive(Default)]
pub struct SessionStateMachine {
    state: SessionSnapshot,
    observers: AllocVec<Box<dyn SessionObserver>>,
}

impl SessionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn subscribe<O: SessionObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    pub fn start(&mut self) {
        self.transition(|s| s.run_state = RunState::Running);
    }

    pub fn stop(&mut self) {
        self.transition(|s| s.run_state = RunState::Stopped);
    }

    pub fn begin_adding_magnet(&mut self) {
        self.transition(|s| s.adding_magnet = true);
    }

    pub fn cancel_adding_magnet(&mut self) {
        self.transition(|s| s.adding_magnet = false);
    }

    pub fn show_trace(&mut self) {
        self.transition(|s| s.showing_trace = true);
    }

    pub fn hide_trace(&mut self) {
        self.transition(|s| s.showing_trace = false);
    }

    pub fn run_state(&self) -> RunState {
        self.state.run_state
    }

    pub fn is_running(&self) -> bool {
        match self.state.run_state {
            RunState::Running => true,
            RunState::Stopped => false,
        }
    }

    pub fn is_adding_magnet(&self) -> bool {
        self.state.adding_magnet
    }

    pub fn is_showing_trace(&self) -> bool {
        self.state.showing_trace
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn transition(&mut self, apply: impl FnOnce(&mut SessionSnapshot)) {
        apply(&mut self.state);
        let state = self.state;
        debug!(
            run_state = ?state.run_state,
            adding_magnet = state.adding_magnet,
            showing_trace = state.showing_trace,
            "session transition"
        );
        for observer in self.observers.iter_mut() {
            observer.on_transition(&state);
        }
    }
}

impl fmt::Debug for SessionStateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStateMachine")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_run_state() {
        assert_eq!(RunState::try_from(0), Ok(RunState::Stopped));
        assert_eq!(RunState::try_from(1), Ok(RunState::Running));
        assert_eq!(RunState::try_from(7), Err(PhysicsError::UnknownRunState(7)));
    }

    #[test]
    fn initial_state() {
        let s = SessionStateMachine::new();
        assert_eq!(s.snapshot(), SessionSnapshot::default());
        assert!(!s.is_running());
    }
}
