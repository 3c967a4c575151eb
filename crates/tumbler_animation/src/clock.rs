//! Frame clock
//!
//! Turns wall-clock frame boundaries into physics time steps.

use std::time::Instant;

/// Smallest step handed to the integrator (120 fps)
pub const MIN_TIME_STEP: f32 = 1000.0 / 120.0;

/// Largest step handed to the integrator; longer stalls are truncated
pub const MAX_TIME_STEP: f32 = 17.0;

/// Measures the time between frames in milliseconds
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_frame: Option<Instant>,
    target_fps: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: None,
            target_fps: 60,
        }
    }

    pub fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps.max(1);
    }

    /// Nominal frame duration for the target fps, in milliseconds
    pub fn frame_duration(&self) -> f32 {
        1000.0 / self.target_fps as f32
    }

    /// Advance to `now` and return the clamped step in milliseconds.
    ///
    /// The first tick has no previous frame and returns the nominal duration.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = match self.last_frame {
            Some(last) => now.saturating_duration_since(last).as_secs_f32() * 1000.0,
            None => self.frame_duration(),
        };
        self.last_frame = Some(now);
        clamp_step(dt)
    }

    /// Advance to the current instant
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Forget the last frame, e.g. after the view was hidden
    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a raw frame delta into the stable integration range
pub fn clamp_step(dt: f32) -> f32 {
    dt.clamp(MIN_TIME_STEP, MAX_TIME_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_first_tick_uses_nominal_duration() {
        let mut clock = FrameClock::new();
        let dt = clock.tick_at(Instant::now());
        assert!((dt - 1000.0 / 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_long_stall_is_truncated() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick_at(start);
        let dt = clock.tick_at(start + Duration::from_millis(500));
        assert_eq!(dt, MAX_TIME_STEP);
    }

    #[test]
    fn test_short_frame_is_raised() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick_at(start);
        let dt = clock.tick_at(start + Duration::from_millis(1));
        assert_eq!(dt, MIN_TIME_STEP);
    }

    #[test]
    fn test_reset_forgets_last_frame() {
        let mut clock = FrameClock::new();
        clock.set_target_fps(120);
        let start = Instant::now();
        clock.tick_at(start);
        clock.reset();
        let dt = clock.tick_at(start + Duration::from_secs(3));
        assert!((dt - MIN_TIME_STEP).abs() < 1e-3);
    }
}
