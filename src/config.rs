//! Scene configuration.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::scene::{Magnet, SceneModel};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;
use serde::{Deserialize, Serialize};

/// Parameters a [`SceneModel`] is built from.
///
/// Defaults reproduce the classic scene: a 10 kg mass hanging from a 10 m
/// tether, pulled out horizontally and released from rest. Serde support lets
/// a host load this from JSON or YAML; missing fields take their defaults.
///
/// # Builder Pattern
/// ```
/// use magpend::config::SceneConfig;
/// use magpend::vec::Vec3;
///
/// let scene = SceneConfig::<f64>::new()
///     .with_gravity(9.81)
///     .with_spring_constant(250.0)
///     .with_initial_velocity(Vec3::new(0.0, 0.0, 5.0))
///     .build()
///     .unwrap();
/// assert_eq!(scene.spring_constant(), 250.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig<F: Float> {
    /// Gravity magnitude, applied along -y. Default: 10.
    pub gravity: F,
    /// Spring constant of the tether. Default: 100.
    pub spring_constant: F,
    /// Length at which the tether carries no spring force. Default: 10.
    pub spring_rest_length: F,
    /// Quadratic drag coefficient. Default: 5.
    pub air_resistance: F,
    /// Mass of the bob. Default: 10.
    pub mass: F,
    /// Pivot position. Default: (0, 10, 0).
    pub fixture_position: Vec3<F>,
    /// Initial bob position. Default: (10, 10, 0).
    pub initial_position: Vec3<F>,
    /// Initial bob velocity. Default: zero.
    pub initial_velocity: Vec3<F>,
    /// Magnets present at startup. Default: none.
    pub magnets: AllocVec<Magnet<F>>,
}

impl<F: Float> SceneConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        let ten = F::from_f64(10.0);
        SceneConfig {
            gravity: ten,
            spring_constant: F::from_f64(100.0),
            spring_rest_length: ten,
            air_resistance: F::from_f64(5.0),
            mass: ten,
            fixture_position: Vec3::new(F::zero(), ten, F::zero()),
            initial_position: Vec3::new(ten, ten, F::zero()),
            initial_velocity: Vec3::zero(),
            magnets: AllocVec::new(),
        }
    }

    /// Set the gravity magnitude.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the spring constant.
    pub fn with_spring_constant(mut self, k: F) -> Self {
        self.spring_constant = k;
        self
    }

    /// Set the spring rest length.
    pub fn with_spring_rest_length(mut self, length: F) -> Self {
        self.spring_rest_length = length;
        self
    }

    /// Set the air resistance coefficient.
    pub fn with_air_resistance(mut self, coefficient: F) -> Self {
        self.air_resistance = coefficient;
        self
    }

    /// Set the bob's mass.
    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    /// Set the pivot position.
    pub fn with_fixture(mut self, position: Vec3<F>) -> Self {
        self.fixture_position = position;
        self
    }

    /// Set the bob's starting position.
    pub fn with_initial_position(mut self, position: Vec3<F>) -> Self {
        self.initial_position = position;
        self
    }

    /// Set the bob's starting velocity.
    pub fn with_initial_velocity(mut self, velocity: Vec3<F>) -> Self {
        self.initial_velocity = velocity;
        self
    }

    /// Add a magnet present at startup.
    pub fn with_magnet(mut self, magnet: Magnet<F>) -> Self {
        self.magnets.push(magnet);
        self
    }

    /// Validate and build the scene.
    pub fn build(&self) -> Result<SceneModel<F>, PhysicsError> {
        SceneModel::from_config(self)
    }
}

impl<F: Float> Default for SceneConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
