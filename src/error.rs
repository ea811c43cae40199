//! Error types for scene configuration.

use alloc::string::String;
use core::fmt;

/// Errors returned when a collaborator supplies an invalid value.
///
/// The physics step itself never fails; values are checked once at the
/// setter boundary and trusted afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// Spring constant must be positive and finite.
    InvalidSpringConstant,
    /// Spring rest length must be positive and finite.
    InvalidRestLength,
    /// Air resistance coefficient must be non-negative and finite.
    InvalidAirResistance,
    /// Gravity magnitude must be non-negative and finite.
    InvalidGravity,
    /// Magnet strength must lie in [0, max].
    InvalidMagnetStrength,
    /// Magnet index is out of bounds.
    MagnetOutOfBounds { index: usize, count: usize },
    /// A run-state code that names neither `Stopped` nor `Running`.
    UnknownRunState(u8),
    /// No preset with this name.
    UnknownPreset(String),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidSpringConstant => {
                write!(f, "spring constant must be positive and finite")
            }
            PhysicsError::InvalidRestLength => {
                write!(f, "spring rest length must be positive and finite")
            }
            PhysicsError::InvalidAirResistance => {
                write!(f, "air resistance coefficient must be non-negative and finite")
            }
            PhysicsError::InvalidGravity => {
                write!(f, "gravity magnitude must be non-negative and finite")
            }
            PhysicsError::InvalidMagnetStrength => write!(f, "magnet strength out of range"),
            PhysicsError::MagnetOutOfBounds { index, count } => {
                write!(f, "magnet index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::UnknownRunState(code) => write!(f, "unknown run state code {}", code),
            PhysicsError::UnknownPreset(name) => write!(f, "unknown preset '{}'", name),
        }
    }
}
