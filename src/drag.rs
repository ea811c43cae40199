//! Drag-to-reposition: turns pointer samples into a position override and a
//! throw velocity, suspending the session while the drag lasts.
//!
//! Two rules keep a manual throw numerically sane:
//!
//! - the mass is placed at the *previous* sample, one sample behind the
//!   pointer, so a single erratic input never shows up as a jump;
//! - the derived velocity is clamped to [`DragController::max_speed`], so one
//!   fast pointer flick can't inject a huge initial condition.
//!
//! On release the last derived velocity becomes the integrator's starting
//! velocity.

use crate::float::Float;
use crate::scene::SceneModel;
use crate::session::SessionStateMachine;
use crate::vec::Vec3;
use tracing::debug;

/// Default ceiling on the derived drag velocity, in units per second.
pub const DEFAULT_MAX_DRAG_SPEED: f64 = 50.0;

/// A pointer position already mapped into simulation space, with its time in seconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSample<F: Float> {
    pub position: Vec3<F>,
    pub timestamp: F,
}

#[derive(Clone, Debug)]
pub struct DragController<F: Float> {
    prev: Option<DragSample<F>>,
    max_speed: F,
}

impl<F: Float> DragController<F> {
    pub fn new() -> Self {
        DragController { prev: None, max_speed: F::from_f64(DEFAULT_MAX_DRAG_SPEED) }
    }

    /// Override the velocity clamp.
    pub fn with_max_speed(mut self, max_speed: F) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn max_speed(&self) -> F {
        self.max_speed
    }

    pub fn is_dragging(&self) -> bool {
        self.prev.is_some()
    }

    /// Feed one pointer sample while the drag modifier is held.
    ///
    /// The first sample of a drag stops the session and only records the
    /// sample. Every later sample stops it again if the host restarted it
    /// mid-drag; a dragged mass is never integrated. Later samples move the mass to the previous sample and set its
    /// velocity from the displacement between the two. Samples whose
    /// timestamp does not advance keep the last velocity.
    pub fn sample(
        &mut self,
        scene: &mut SceneModel<F>,
        session: &mut SessionStateMachine,
        position: Vec3<F>,
        timestamp: F,
    ) {
        let current = DragSample { position, timestamp };
        let prev = match self.prev.replace(current) {
            Some(prev) => prev,
            None => {
                debug!(?position, "drag started");
                session.stop();
                return;
            }
        };

        if session.is_running() {
            debug!("session restarted mid-drag, stopping");
            session.stop();
        }

        let elapsed = timestamp - prev.timestamp;
        if elapsed > F::zero() {
            scene.mass.velocity = (position - prev.position)
                .scale(F::one() / elapsed)
                .clamp_length(self.max_speed);
        }
        scene.mass.position = prev.position;
    }

    /// End the drag and hand the mass back to the integrator.
    ///
    /// Returns `false` and leaves the session alone when no drag was active.
    pub fn release(&mut self, session: &mut SessionStateMachine) -> bool {
        if self.prev.take().is_none() {
            return false;
        }
        debug!("drag released");
        session.start();
        true
    }
}

impl<F: Float> Default for DragController<F> {
    fn default() -> Self {
        Self::new()
    }
}
