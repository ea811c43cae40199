//! Application context tying the scene, the session and pointer input together.

use crate::config::SceneConfig;
use crate::drag::DragController;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::integrator::{advance, advance_observed};
use crate::preset::{Preset, PresetSpec};
use crate::scene::SceneModel;
use crate::session::SessionStateMachine;
use crate::trail::Trail;
use crate::vec::Vec3;
use tracing::debug;

/// Longest step a single frame may take, in seconds.
///
/// A backgrounded tab can report a gap of many seconds; feeding that to the
/// integrator in one step would throw the mass off the tether.
pub const MAX_FRAME_DT: f64 = 0.1;

/// One scene and its session, driven once per frame by the host.
///
/// The physics functions stay free functions over [`SceneModel`]; this only
/// owns one instance of everything and routes host events to them.
#[derive(Debug)]
pub struct Simulation<F: Float> {
    pub scene: SceneModel<F>,
    pub session: SessionStateMachine,
    drag: DragController<F>,
    trail: Trail<F>,
}

impl<F: Float> Simulation<F> {
    /// Build the scene, apply `preset` and start running.
    pub fn new(config: &SceneConfig<F>, preset: Preset) -> Result<Self, PhysicsError> {
        let mut sim = Simulation {
            scene: config.build()?,
            session: SessionStateMachine::new(),
            drag: DragController::new(),
            trail: Trail::new(),
        };
        sim.apply_preset(preset)?;
        Ok(sim)
    }

    pub fn with_drag_controller(mut self, drag: DragController<F>) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_trail(mut self, trail: Trail<F>) -> Self {
        self.trail = trail;
        self
    }

    /// Advance by the wall-clock time since the last frame, capped at
    /// [`MAX_FRAME_DT`]. Does nothing unless running and not being dragged;
    /// returns whether a step was taken.
    ///
    /// The trail only records while the trace overlay is shown.
    pub fn tick(&mut self, elapsed: F) -> bool {
        if !self.session.is_running() || self.drag.is_dragging() {
            return false;
        }
        let dt = elapsed.clamp(F::zero(), F::from_f64(MAX_FRAME_DT));
        if self.session.is_showing_trace() {
            advance_observed(&mut self.scene, dt, &mut self.trail);
        } else {
            advance(&mut self.scene, dt);
        }
        true
    }

    /// Replace the magnets (and optionally the mass state) with a preset, then run.
    pub fn apply_preset(&mut self, preset: Preset) -> Result<(), PhysicsError> {
        preset.apply(&mut self.scene)?;
        self.session.start();
        Ok(())
    }

    /// Like [`Simulation::apply_preset`] for a layout supplied by the host.
    pub fn apply_preset_spec(&mut self, spec: &PresetSpec<F>) -> Result<(), PhysicsError> {
        debug!(magnets = spec.magnets.len(), "applying custom preset");
        spec.apply(&mut self.scene)?;
        self.session.start();
        Ok(())
    }

    pub fn toggle_running(&mut self) {
        if self.session.is_running() {
            self.session.stop();
        } else {
            self.session.start();
        }
    }

    pub fn toggle_adding_magnet(&mut self) {
        if self.session.is_adding_magnet() {
            self.session.cancel_adding_magnet();
        } else {
            self.session.begin_adding_magnet();
        }
    }

    pub fn toggle_trace(&mut self) {
        if self.session.is_showing_trace() {
            self.session.hide_trace();
        } else {
            self.session.show_trace();
        }
    }

    pub fn clear_trace(&mut self) {
        self.trail.clear();
    }

    /// A click in the scene. Places a default-strength magnet and leaves
    /// placement mode if placement mode is active; otherwise ignored.
    pub fn place_magnet(&mut self, position: Vec3<F>) -> Option<usize> {
        if !self.session.is_adding_magnet() {
            return None;
        }
        let index = self.scene.add_magnet(position);
        self.session.cancel_adding_magnet();
        Some(index)
    }

    /// Feed a pointer sample while the drag modifier is held.
    pub fn drag_to(&mut self, position: Vec3<F>, timestamp: F) {
        self.drag.sample(&mut self.scene, &mut self.session, position, timestamp);
    }

    /// The drag modifier was let go.
    pub fn release_drag(&mut self) -> bool {
        self.drag.release(&mut self.session)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn trail(&self) -> &Trail<F> {
        &self.trail
    }
}
