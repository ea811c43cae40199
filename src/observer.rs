//! Observer traits for simulation steps and session transitions.

use crate::float::Float;
use crate::scene::Mass;
use crate::session::SessionSnapshot;

/// Trait for observing physics steps.
///
/// Implement this to record or visualise the trajectory (see
/// [`Trail`](crate::trail::Trail)). All methods have default no-op
/// implementations.
pub trait StepObserver<F: Float> {
    /// Called once the new position and velocity have been committed.
    fn on_step_complete(&mut self, _mass: &Mass<F>) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}

/// Notified synchronously after every session transition with the new state.
///
/// Observers are called in registration order.
pub trait SessionObserver {
    fn on_transition(&mut self, state: &SessionSnapshot);
}

impl<T: FnMut(&SessionSnapshot)> SessionObserver for T {
    fn on_transition(&mut self, state: &SessionSnapshot) {
        self(state)
    }
}
