//! Explicit fixed-step integrator for the tethered mass.

use crate::float::Float;
use crate::force::compute_force;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::scene::SceneModel;
use tracing::trace;

/// Advance the mass by one step of `dt` seconds.
///
/// Position uses the velocity from before the step:
/// `x' = x + v dt + a dt^2 / 2`, `v' = v + a dt`.
///
/// Any `dt >= 0` is accepted as is. Capping long frame gaps is the caller's job
/// (see [`MAX_FRAME_DT`](crate::simulation::MAX_FRAME_DT)).
pub fn advance<F: Float>(scene: &mut SceneModel<F>, dt: F) {
    advance_observed(scene, dt, &mut NoOpStepObserver);
}

/// [`advance`], then notify `observer` with the committed mass state.
pub fn advance_observed<F: Float, O: StepObserver<F>>(
    scene: &mut SceneModel<F>,
    dt: F,
    observer: &mut O,
) {
    let m = scene.mass.m();
    let acceleration = compute_force(scene).scale(F::one() / m);

    let u = scene.mass.velocity;
    let new_position = scene.mass.position + u.scale(dt) + acceleration.scale(dt * dt * F::half());
    let new_velocity = u + acceleration.scale(dt);

    // both computed from the old state, then committed together
    scene.mass.position = new_position;
    scene.mass.velocity = new_velocity;
    trace!(?dt, position = ?new_position, velocity = ?new_velocity, "step");

    observer.on_step_complete(&scene.mass);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;

    #[test]
    fn zero_dt_leaves_state_unchanged() {
        let mut scene = SceneConfig::<f64>::new().build().unwrap();
        let before = scene.mass;
        advance(&mut scene, 0.0);
        assert_eq!(scene.mass, before);
    }
}
