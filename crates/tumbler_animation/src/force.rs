//! Force models acting on a [`Particle`](crate::Particle)

use std::f32::consts::PI;

/// Spring pulling a particle toward an anchor position.
///
/// Configured the way designers think about springs: `period` is the
/// oscillation period in milliseconds and `damping_ratio` is 1.0 for
/// critical damping, below 1.0 for a bouncy settle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringForce {
    /// Rest position the spring pulls toward
    pub anchor: f32,
    /// Oscillation period in milliseconds (0 disables the spring)
    pub period: f32,
    /// Damping ratio (1.0 = critically damped)
    pub damping_ratio: f32,
}

impl Default for SpringForce {
    fn default() -> Self {
        Self {
            anchor: 0.0,
            period: 300.0,
            damping_ratio: 1.0,
        }
    }
}

impl SpringForce {
    pub fn new(anchor: f32, period: f32, damping_ratio: f32) -> Self {
        Self {
            anchor,
            period,
            damping_ratio,
        }
    }

    /// Stiffness `k = m·(2π/period)²`
    pub fn stiffness(&self, mass: f32) -> f32 {
        if self.period <= 0.0 {
            return 0.0;
        }
        let omega = 2.0 * PI / self.period;
        mass * omega * omega
    }

    /// Damping coefficient `c = m·4π·ζ/period`
    pub fn damping(&self, mass: f32) -> f32 {
        if self.period <= 0.0 {
            return 0.0;
        }
        mass * 4.0 * PI * self.damping_ratio / self.period
    }

    /// Force exerted on a particle at `position` moving at `velocity`
    pub fn force(&self, position: f32, velocity: f32, mass: f32) -> f32 {
        -self.stiffness(mass) * (position - self.anchor) - self.damping(mass) * velocity
    }
}

/// A force that can be attached to the physics engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Force {
    /// Quadratic drag, dominant at high speed
    Drag { strength: f32 },
    /// Linear friction, dominant at low speed
    Friction { strength: f32 },
    /// Restoring spring
    Spring(SpringForce),
}

impl Force {
    /// Evaluate the force for the given particle state
    pub fn evaluate(&self, position: f32, velocity: f32, mass: f32) -> f32 {
        match self {
            Force::Drag { strength } => -strength * velocity * velocity.abs(),
            Force::Friction { strength } => -strength * velocity,
            Force::Spring(spring) => spring.force(position, velocity, mass),
        }
    }

    pub fn is_spring(&self) -> bool {
        matches!(self, Force::Spring(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_opposes_motion_quadratically() {
        let drag = Force::Drag { strength: 0.5 };
        assert_eq!(drag.evaluate(0.0, 2.0, 1.0), -2.0);
        assert_eq!(drag.evaluate(0.0, -2.0, 1.0), 2.0);
    }

    #[test]
    fn test_friction_opposes_motion_linearly() {
        let friction = Force::Friction { strength: 0.5 };
        assert_eq!(friction.evaluate(0.0, 4.0, 1.0), -2.0);
        assert_eq!(friction.evaluate(0.0, -4.0, 1.0), 2.0);
    }

    #[test]
    fn test_spring_constants_from_period() {
        let spring = SpringForce::new(0.0, 2.0 * PI, 1.0);
        assert!((spring.stiffness(1.0) - 1.0).abs() < 1e-6);
        assert!((spring.damping(1.0) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_spring_pulls_toward_anchor() {
        let spring = Force::Spring(SpringForce::new(100.0, 300.0, 1.0));
        assert!(spring.evaluate(0.0, 0.0, 1.0) > 0.0);
        assert!(spring.evaluate(200.0, 0.0, 1.0) < 0.0);
        assert_eq!(spring.evaluate(100.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_zero_period_disables_spring() {
        let spring = SpringForce::new(50.0, 0.0, 1.0);
        assert_eq!(spring.force(0.0, 3.0, 1.0), 0.0);
    }
}
