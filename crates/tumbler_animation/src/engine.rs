//! Physics engine
//!
//! Owns a single particle and the forces currently attached to it, and
//! advances both each frame.

use smallvec::SmallVec;

use crate::force::{Force, SpringForce};
use crate::particle::Particle;

/// Integrates one particle under a set of attached forces
#[derive(Debug, Clone, Default)]
pub struct PhysicsEngine {
    particle: Particle,
    forces: SmallVec<[Force; 2]>,
}

impl PhysicsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particle(&self) -> &Particle {
        &self.particle
    }

    pub fn position(&self) -> f32 {
        self.particle.position
    }

    pub fn set_position(&mut self, position: f32) {
        self.particle.position = position;
    }

    pub fn velocity(&self) -> f32 {
        self.particle.velocity
    }

    pub fn set_velocity(&mut self, velocity: f32) {
        self.particle.velocity = velocity;
    }

    /// Attach a set of forces, replacing whatever was attached before
    pub fn attach<I: IntoIterator<Item = Force>>(&mut self, forces: I) {
        self.forces.clear();
        self.forces.extend(forces);
        tracing::trace!("attached {} force(s)", self.forces.len());
    }

    /// Detach every force
    pub fn detach_all(&mut self) {
        self.forces.clear();
    }

    /// Forces currently acting on the particle
    pub fn forces(&self) -> &[Force] {
        &self.forces
    }

    /// Whether a spring is currently attached
    pub fn has_spring(&self) -> bool {
        self.forces.iter().any(Force::is_spring)
    }

    /// Replace the parameters of any attached spring in place.
    ///
    /// Returns false when no spring is attached; the caller keeps its own copy
    /// and re-attaches it later.
    pub fn update_spring(&mut self, spring: SpringForce) -> bool {
        let mut updated = false;
        for force in self.forces.iter_mut() {
            if let Force::Spring(attached) = force {
                *attached = spring;
                updated = true;
            }
        }
        updated
    }

    /// Advance the simulation by `dt` milliseconds
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let Particle {
            position,
            velocity,
            mass,
        } = self.particle;
        let total: f32 = self
            .forces
            .iter()
            .map(|force| force.evaluate(position, velocity, mass))
            .sum();
        self.particle.integrate(total, dt);
    }
}
