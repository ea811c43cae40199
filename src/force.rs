//! Net force on the tethered mass.
//!
//! The tether is a damped spring, so tension is a signed scalar projected back
//! onto the mass-to-fixture direction. The scalar collects the gravity and
//! magnetic components along the rope, the centripetal term and the spring
//! stretch, minus the damping. Gravity, drag and the magnetic pull are added
//! on top as free vectors.

use crate::float::Float;
use crate::scene::SceneModel;
use crate::vec::Vec3;

/// Damping per unit of tangential speed.
pub const DAMPING: f64 = 1.0;

/// Coupling constant of the inverse-square magnetic pull.
pub const MAGNETIC_COUPLING: f64 = 100.0;

/// Floor on the squared mass-to-magnet distance.
pub const MIN_MAGNET_DISTANCE_SQ: f64 = 0.1;

/// Rope length floor for the centripetal division.
pub const MIN_ROPE_LENGTH: f64 = 1e-6;

/// Every named contribution to the net force, for diagnostics and tests.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ForceBreakdown<F: Float> {
    /// `fixture - mass`.
    pub rope: Vec3<F>,
    /// `|rope|`.
    pub rope_length: F,
    /// Speed perpendicular to the rope.
    pub tangential_speed: F,
    /// `gravity * m`.
    pub gravity: Vec3<F>,
    pub gravity_component: F,
    pub centripetal: F,
    pub spring: F,
    pub spring_damping: F,
    /// Summed magnetic pull, not yet scaled by mass.
    pub magnetic_acceleration: Vec3<F>,
    pub magnetic_component: F,
    /// Combined scalar projected onto the rope direction.
    pub tension: Vec3<F>,
    pub air_resistance: Vec3<F>,
}

impl<F: Float> ForceBreakdown<F> {
    /// Signed scalar carried by the tether.
    pub fn tension_magnitude(&self) -> F {
        self.gravity_component + self.centripetal - self.spring_damping
            + self.spring
            + self.magnetic_component
    }

    /// Sum of all vector terms.
    pub fn total(&self, m: F) -> Vec3<F> {
        self.gravity + self.tension + self.air_resistance + self.magnetic_acceleration.scale(m)
    }
}

/// Compute each term of the net force on `scene.mass`. Reads the scene only.
pub fn force_breakdown<F: Float>(scene: &SceneModel<F>) -> ForceBreakdown<F> {
    let mass = &scene.mass;
    let m = mass.m();
    let gravity = scene.gravity();

    let rope = scene.fixture().position - mass.position;
    let rope_length = rope.length();
    let theta = rope.reverse().angle_between(gravity);
    let gravity_component = m * gravity.length() * theta.cos();

    let vel_angle = rope.angle_between(mass.velocity);
    let tangential_speed = (mass.velocity.length() * vel_angle.sin()).abs();
    // zero rope length implies zero tangential speed, so the floor yields 0 here
    let centripetal = m * tangential_speed * tangential_speed
        / rope_length.max(F::from_f64(MIN_ROPE_LENGTH));

    let spring = (rope_length - scene.spring_rest_length()) * scene.spring_constant();
    let spring_damping = tangential_speed * F::from_f64(DAMPING);

    let magnetic_acceleration = magnetic_acceleration(scene);
    let theta_mag = rope.reverse().angle_between(magnetic_acceleration);
    let magnetic_component = m * magnetic_acceleration.length() * theta_mag.cos();

    let mut breakdown = ForceBreakdown {
        rope,
        rope_length,
        tangential_speed,
        gravity: gravity.scale(m),
        gravity_component,
        centripetal,
        spring,
        spring_damping,
        magnetic_acceleration,
        magnetic_component,
        tension: Vec3::zero(),
        air_resistance: Vec3::zero(),
    };
    breakdown.tension = rope.normalize().scale(breakdown.tension_magnitude());

    let drag = scene.air_resistance() / F::from_f64(10.0);
    breakdown.air_resistance = mass
        .velocity
        .reverse()
        .normalize()
        .scale(drag * tangential_speed * tangential_speed);

    breakdown
}

/// Net force on the mass at its current position and velocity.
pub fn compute_force<F: Float>(scene: &SceneModel<F>) -> Vec3<F> {
    force_breakdown(scene).total(scene.mass.m())
}

/// Summed inverse-square pull of every magnet, per unit mass.
pub fn magnetic_acceleration<F: Float>(scene: &SceneModel<F>) -> Vec3<F> {
    let coupling = F::from_f64(MAGNETIC_COUPLING);
    let floor = F::from_f64(MIN_MAGNET_DISTANCE_SQ);
    let position = scene.mass.position;

    scene.magnets().iter().fold(Vec3::zero(), |acc, magnet| {
        let d_sq = position.distance_sq(magnet.position).max(floor);
        let direction = (magnet.position - position).normalize();
        acc + direction.scale(coupling * magnet.m / d_sq)
    })
}
