//! Named magnet layouts.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::scene::{Magnet, SceneModel};
use crate::vec::Vec3;
use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec as AllocVec;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Height of the plane the built-in rings of magnets sit on.
const RING_HEIGHT: f64 = -1.0;

/// A magnet layout plus optional initial conditions for the mass.
///
/// Applying it replaces every magnet in the scene; the mass position and
/// velocity are only touched when given.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresetSpec<F: Float> {
    pub magnets: AllocVec<Magnet<F>>,
    #[serde(default)]
    pub position: Option<Vec3<F>>,
    #[serde(default)]
    pub velocity: Option<Vec3<F>>,
}

impl<F: Float> PresetSpec<F> {
    pub fn apply(&self, scene: &mut SceneModel<F>) -> Result<(), PhysicsError> {
        scene.replace_magnets(self.magnets.clone())?;
        if let Some(position) = self.position {
            scene.mass.position = position;
        }
        if let Some(velocity) = self.velocity {
            scene.mass.velocity = velocity;
        }
        Ok(())
    }
}

/// The built-in presets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    /// Three magnets of differing strength, scattered around the pivot.
    Default,
    /// No magnets.
    Blank,
    /// Three magnets on a circle of radius 5.
    Triangle,
    /// Four magnets on a circle of radius 4, turned 45 degrees.
    Square,
    /// Two concentric rings of six, radii 4 and 6.
    Hexagons,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Default,
        Preset::Blank,
        Preset::Triangle,
        Preset::Square,
        Preset::Hexagons,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Default => "Default",
            Preset::Blank => "Blank",
            Preset::Triangle => "Triangle",
            Preset::Square => "Square",
            Preset::Hexagons => "Hexagons",
        }
    }

    pub fn spec<F: Float>(self) -> PresetSpec<F> {
        let f = F::from_f64;
        match self {
            Preset::Default => PresetSpec {
                magnets: vec![
                    Magnet::new(Vec3::new(f(1.0), F::zero(), f(5.0)), f(8.0)),
                    Magnet::new(Vec3::new(f(2.0), F::zero(), f(-7.0)), f(12.0)),
                    Magnet::new(Vec3::new(f(-4.0), F::zero(), F::zero()), f(9.0)),
                ],
                position: None,
                velocity: None,
            },
            Preset::Blank => PresetSpec { magnets: AllocVec::new(), position: None, velocity: None },
            Preset::Triangle => PresetSpec {
                magnets: ring(3, f(5.0), F::zero()),
                position: None,
                velocity: Some(Vec3::new(F::zero(), F::zero(), f(10.0))),
            },
            Preset::Square => PresetSpec {
                magnets: ring(4, f(4.0), F::pi() / f(4.0)),
                position: None,
                velocity: Some(Vec3::new(F::zero(), F::zero(), f(-10.0))),
            },
            Preset::Hexagons => {
                let mut magnets = ring(6, f(4.0), F::zero());
                magnets.extend(ring(6, f(6.0), F::pi() / f(6.0)));
                PresetSpec { magnets, position: None, velocity: None }
            }
        }
    }

    /// Apply this preset to `scene`.
    pub fn apply<F: Float>(self, scene: &mut SceneModel<F>) -> Result<(), PhysicsError> {
        debug!(preset = self.name(), "applying preset");
        self.spec::<F>().apply(scene)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = PhysicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PhysicsError::UnknownPreset(s.to_string()))
    }
}

/// `count` default-strength magnets evenly spaced on a horizontal circle.
fn ring<F: Float>(count: usize, radius: F, offset: F) -> AllocVec<Magnet<F>> {
    let step = F::two() * F::pi() / F::from_f64(count as f64);
    (0..count)
        .map(|i| {
            let angle = offset + step * F::from_f64(i as f64);
            Magnet::with_default_strength(Vec3::new(
                radius * angle.cos(),
                F::from_f64(RING_HEIGHT),
                radius * angle.sin(),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("Triangle".parse::<Preset>(), Ok(Preset::Triangle));
        assert_eq!("hexagons".parse::<Preset>(), Ok(Preset::Hexagons));
        assert!(matches!("Pentagon".parse::<Preset>(), Err(PhysicsError::UnknownPreset(_))));
    }

    #[test]
    fn names_round_trip() {
        for p in Preset::ALL {
            assert_eq!(p.to_string().parse::<Preset>(), Ok(p));
        }
    }
}
