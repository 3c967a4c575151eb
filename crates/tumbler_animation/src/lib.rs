//! Tumbler Physics
//!
//! One-dimensional particle physics that drives scroll momentum and snapping.
//!
//! # Features
//!
//! - **Particle**: position/velocity body integrated with semi-implicit Euler
//! - **Forces**: quadratic drag, linear friction, and a period/damping-ratio spring
//! - **Exclusive force sets**: momentum forces or a spring, never a mix
//! - **Frame clock**: clamped frame deltas for wall-clock driven loops
//!
//! All time values are in milliseconds and all velocities in pixels per
//! millisecond.

pub mod clock;
pub mod engine;
pub mod force;
pub mod particle;

pub use clock::FrameClock;
pub use engine::PhysicsEngine;
pub use force::{Force, SpringForce};
pub use particle::Particle;
