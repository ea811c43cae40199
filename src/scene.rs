//! The mutable simulation state: tethered mass, fixture, magnets and tuning parameters.

use crate::config::SceneConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Strength given to a magnet placed without an explicit value.
pub const DEFAULT_MAGNET_STRENGTH: f64 = 10.0;

/// Upper bound on magnet strength.
pub const MAX_MAGNET_STRENGTH: f64 = 20.0;

/// Fixed pivot the tether hangs from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fixture<F: Float> {
    pub position: Vec3<F>,
}

/// The simulated body. `m` is kept positive by [`SceneModel::set_mass`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mass<F: Float> {
    m: F,
    pub position: Vec3<F>,
    pub velocity: Vec3<F>,
}

impl<F: Float> Mass<F> {
    pub fn m(&self) -> F {
        self.m
    }
}

/// A fixed point attracting the mass with an inverse-square force.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Magnet<F: Float> {
    pub position: Vec3<F>,
    pub m: F,
}

impl<F: Float> Magnet<F> {
    pub fn new(position: Vec3<F>, m: F) -> Self {
        Magnet { position, m }
    }

    /// Magnet with [`DEFAULT_MAGNET_STRENGTH`].
    pub fn with_default_strength(position: Vec3<F>) -> Self {
        Magnet { position, m: F::from_f64(DEFAULT_MAGNET_STRENGTH) }
    }
}

/// Display label for the magnet at `index`: `A`, `B`, ... `Z`.
pub fn magnet_label(index: usize) -> Option<char> {
    if index < 26 {
        Some(char::from(b'A' + index as u8))
    } else {
        None
    }
}

/// Simulation parameters and entity state.
///
/// Scalars are validated by the setters and trusted by the physics step.
/// Gravity always points down the y axis; only its magnitude is adjustable.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneModel<F: Float> {
    gravity: Vec3<F>,
    fixture: Fixture<F>,
    pub mass: Mass<F>,
    magnets: AllocVec<Magnet<F>>,
    spring_rest_length: F,
    spring_constant: F,
    air_resistance: F,
}

impl<F: Float> SceneModel<F> {
    /// Build a scene from a configuration, validating every parameter.
    pub fn from_config(config: &SceneConfig<F>) -> Result<Self, PhysicsError> {
        check_positive(config.mass, PhysicsError::InvalidMass)?;
        check_positive(config.spring_constant, PhysicsError::InvalidSpringConstant)?;
        check_positive(config.spring_rest_length, PhysicsError::InvalidRestLength)?;
        check_non_negative(config.air_resistance, PhysicsError::InvalidAirResistance)?;
        check_non_negative(config.gravity, PhysicsError::InvalidGravity)?;
        for magnet in &config.magnets {
            check_strength(magnet.m)?;
        }

        Ok(SceneModel {
            gravity: Vec3::new(F::zero(), -config.gravity, F::zero()),
            fixture: Fixture { position: config.fixture_position },
            mass: Mass {
                m: config.mass,
                position: config.initial_position,
                velocity: config.initial_velocity,
            },
            magnets: config.magnets.clone(),
            spring_rest_length: config.spring_rest_length,
            spring_constant: config.spring_constant,
            air_resistance: config.air_resistance,
        })
    }

    pub fn gravity(&self) -> Vec3<F> {
        self.gravity
    }

    pub fn fixture(&self) -> &Fixture<F> {
        &self.fixture
    }

    pub fn magnets(&self) -> &[Magnet<F>] {
        &self.magnets
    }

    pub fn spring_rest_length(&self) -> F {
        self.spring_rest_length
    }

    pub fn spring_constant(&self) -> F {
        self.spring_constant
    }

    pub fn air_resistance(&self) -> F {
        self.air_resistance
    }

    /// Current tether length, `|fixture - mass|`.
    pub fn rope_length(&self) -> F {
        self.fixture.position.distance(self.mass.position)
    }

    /// Append a magnet with the default strength; returns its index.
    pub fn add_magnet(&mut self, position: Vec3<F>) -> usize {
        self.magnets.push(Magnet::with_default_strength(position));
        let index = self.magnets.len() - 1;
        debug!(index, ?position, "magnet added");
        index
    }

    /// Remove the magnet at `index`; later magnets shift down by one.
    pub fn remove_magnet(&mut self, index: usize) -> Result<Magnet<F>, PhysicsError> {
        let count = self.magnets.len();
        if index >= count {
            warn!(index, count, "remove_magnet: index out of bounds");
            return Err(PhysicsError::MagnetOutOfBounds { index, count });
        }
        let magnet = self.magnets.remove(index);
        debug!(index, "magnet removed");
        Ok(magnet)
    }

    pub fn set_magnet_strength(&mut self, index: usize, m: F) -> Result<(), PhysicsError> {
        let count = self.magnets.len();
        if index >= count {
            warn!(index, count, "set_magnet_strength: index out of bounds");
            return Err(PhysicsError::MagnetOutOfBounds { index, count });
        }
        check_strength(m)?;
        self.magnets[index].m = m;
        Ok(())
    }

    /// Replace every magnet at once (used by presets).
    pub fn replace_magnets(&mut self, magnets: AllocVec<Magnet<F>>) -> Result<(), PhysicsError> {
        for magnet in &magnets {
            check_strength(magnet.m)?;
        }
        self.magnets = magnets;
        Ok(())
    }

    pub fn set_gravity_magnitude(&mut self, g: F) -> Result<(), PhysicsError> {
        check_non_negative(g, PhysicsError::InvalidGravity)?;
        self.gravity = Vec3::new(F::zero(), -g, F::zero());
        Ok(())
    }

    pub fn set_spring_constant(&mut self, k: F) -> Result<(), PhysicsError> {
        check_positive(k, PhysicsError::InvalidSpringConstant)?;
        self.spring_constant = k;
        Ok(())
    }

    pub fn set_spring_rest_length(&mut self, length: F) -> Result<(), PhysicsError> {
        check_positive(length, PhysicsError::InvalidRestLength)?;
        self.spring_rest_length = length;
        Ok(())
    }

    pub fn set_air_resistance(&mut self, coefficient: F) -> Result<(), PhysicsError> {
        check_non_negative(coefficient, PhysicsError::InvalidAirResistance)?;
        self.air_resistance = coefficient;
        Ok(())
    }

    pub fn set_mass(&mut self, m: F) -> Result<(), PhysicsError> {
        check_positive(m, PhysicsError::InvalidMass)?;
        self.mass.m = m;
        Ok(())
    }
}

fn check_positive<F: Float>(value: F, err: PhysicsError) -> Result<(), PhysicsError> {
    if value.is_finite() && value > F::zero() {
        Ok(())
    } else {
        warn!(?value, %err, "rejected scene parameter");
        Err(err)
    }
}

fn check_non_negative<F: Float>(value: F, err: PhysicsError) -> Result<(), PhysicsError> {
    if value.is_finite() && value >= F::zero() {
        Ok(())
    } else {
        warn!(?value, %err, "rejected scene parameter");
        Err(err)
    }
}

fn check_strength<F: Float>(m: F) -> Result<(), PhysicsError> {
    check_non_negative(m, PhysicsError::InvalidMagnetStrength)?;
    if m > F::from_f64(MAX_MAGNET_STRENGTH) {
        warn!(?m, "magnet strength above maximum");
        return Err(PhysicsError::InvalidMagnetStrength);
    }
    Ok(())
}
