//! A point mass on an elastic tether, pulled around by point magnets.
//!
//! `magpend` models a bob hanging from a fixed pivot on a damped spring. Gravity,
//! spring tension, a centripetal correction, quadratic air drag and any number of
//! inverse-square magnets act on it, and an explicit fixed-step integrator moves
//! it. Around the physics sits a small interaction layer: a session state machine
//! deciding when the integrator runs, and a drag controller that lets a user grab
//! the bob and throw it.
//!
//! # Features
//!
//! - **Force model**: every term exposed separately through [`ForceBreakdown`]
//! - **Degenerate-safe**: zero vectors, zero rope length and magnets on top of the
//!   bob all resolve to finite values
//! - **Session control**: run/stop, magnet placement and trace overlay, with
//!   synchronous observers
//! - **Drag-to-throw**: one-sample lag and a speed clamp keep a throw stable
//! - **Presets**: `Default`, `Blank`, `Triangle`, `Square`, `Hexagons`
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! # Example
//! ```
//! use magpend::{Preset, SceneConfig, Simulation};
//!
//! let mut sim = Simulation::<f64>::new(&SceneConfig::new(), Preset::Triangle).unwrap();
//! for _ in 0..60 {
//!     sim.tick(1.0 / 60.0);
//! }
//! assert!(sim.scene.mass.position.is_finite());
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod scene;
pub mod force;
pub mod integrator;
pub mod session;
pub mod drag;
pub mod preset;
pub mod trail;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use scene::{Fixture, Magnet, Mass, SceneModel, magnet_label};
pub use force::{compute_force, force_breakdown, magnetic_acceleration, ForceBreakdown};
pub use integrator::{advance, advance_observed};
pub use session::{RunState, SessionSnapshot, SessionStateMachine};
pub use drag::{DragController, DragSample};
pub use preset::{Preset, PresetSpec};
pub use trail::Trail;
pub use simulation::{Simulation, MAX_FRAME_DT};
pub use config::SceneConfig;
pub use observer::{NoOpStepObserver, SessionObserver, StepObserver};
pub use error::PhysicsError;
