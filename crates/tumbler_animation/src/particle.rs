//! One-dimensional physics body

/// A point mass moving along a single axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in pixels
    pub position: f32,
    /// Velocity in pixels per millisecond
    pub velocity: f32,
    /// Mass (forces are divided by this)
    pub mass: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            mass: 1.0,
        }
    }
}

impl Particle {
    pub fn new(position: f32) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Apply a force for `dt` milliseconds, then advance the position.
    ///
    /// Velocity is updated first so the new velocity moves the particle
    /// (semi-implicit Euler), which keeps springs stable at frame-sized steps.
    pub fn integrate(&mut self, force: f32, dt: f32) {
        if self.mass > 0.0 {
            self.velocity += force / self.mass * dt;
        }
        self.position += self.velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_motion() {
        let mut particle = Particle::new(10.0);
        particle.velocity = 2.0;
        particle.integrate(0.0, 5.0);
        assert_eq!(particle.position, 20.0);
        assert_eq!(particle.velocity, 2.0);
    }

    #[test]
    fn test_velocity_updates_before_position() {
        let mut particle = Particle::default();
        particle.integrate(1.0, 2.0);
        assert_eq!(particle.velocity, 2.0);
        assert_eq!(particle.position, 4.0);
    }

    #[test]
    fn test_massless_particle_ignores_force() {
        let mut particle = Particle {
            mass: 0.0,
            ..Default::default()
        };
        particle.integrate(100.0, 16.0);
        assert_eq!(particle.velocity, 0.0);
        assert_eq!(particle.position, 0.0);
    }
}
