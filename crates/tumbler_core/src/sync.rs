//! Input sync
//!
//! Merges wheel and touch input into one [`GestureEvent`] stream along the
//! configured axis.
//!
//! Wheel input is velocity-controlled (`slip = true`): there is no physical
//! release, so the gesture ends once the wheel has been quiet for
//! [`WHEEL_STALL_TIME`]. Call [`InputSync::poll`] every frame to flush it.
//! Touch input is position-controlled (`slip = false`) and ends when the
//! finger lifts.

use smallvec::{smallvec, SmallVec};

use crate::events::{Axis, DeltaMode, GestureEvent, RawInput};

/// Quiet time after the last wheel event before the wheel gesture ends (ms)
pub const WHEEL_STALL_TIME: f64 = 50.0;

/// Pixels per line for line-mode wheel deltas
pub const WHEEL_LINE_HEIGHT: f32 = 32.0;

/// Floor for the time between two samples, so bursts don't explode velocity (ms)
const MIN_TICK_TIME: f64 = 8.0;

/// Touch samples kept per finger for velocity estimation
const VELOCITY_SAMPLES: usize = 10;

/// A release this long after the last move carries no momentum (ms)
const RELEASE_TIMEOUT: f64 = 100.0;

/// Events produced by a single raw input
pub type GestureEvents = SmallVec<[GestureEvent; 2]>;

/// Sync configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncOptions {
    /// Axis that deltas are projected onto
    pub direction: Axis,
    /// Discard the weaker axis before projecting
    pub rails: bool,
    /// Multiplier applied to deltas and velocities
    pub scale: f32,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            direction: Axis::Y,
            rails: true,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    position: [f32; 2],
    timestamp: f64,
}

#[derive(Debug, Clone)]
struct TouchTrack {
    id: u64,
    history: SmallVec<[Sample; VELOCITY_SAMPLES]>,
}

impl TouchTrack {
    fn last(&self) -> Option<Sample> {
        self.history.last().copied()
    }

    fn record(&mut self, sample: Sample) {
        if self.history.len() == VELOCITY_SAMPLES {
            self.history.remove(0);
        }
        self.history.push(sample);
    }

    /// Velocity over the retained history, in px/ms per axis
    fn velocity(&self) -> [f32; 2] {
        let (Some(first), Some(last)) = (self.history.first(), self.history.last()) else {
            return [0.0, 0.0];
        };
        let dt = (last.timestamp - first.timestamp).max(MIN_TICK_TIME) as f32;
        [
            (last.position[0] - first.position[0]) / dt,
            (last.position[1] - first.position[1]) / dt,
        ]
    }
}

#[derive(Debug, Clone, Copy)]
struct WheelState {
    last_timestamp: f64,
    velocity: f32,
}

/// Normalizes wheel and touch input into a gesture stream
#[derive(Debug, Clone, Default)]
pub struct InputSync {
    options: SyncOptions,
    wheel: Option<WheelState>,
    touches: SmallVec<[TouchTrack; 4]>,
}

impl InputSync {
    pub fn new(options: SyncOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> SyncOptions {
        self.options
    }

    pub fn set_options(&mut self, options: SyncOptions) {
        self.options = options;
    }

    /// Change only the input scale (used for edge grip)
    pub fn set_scale(&mut self, scale: f32) {
        self.options.scale = scale;
    }

    pub fn direction(&self) -> Axis {
        self.options.direction
    }

    /// Number of touches currently down
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    /// Whether a wheel or touch gesture is in progress
    pub fn is_active(&self) -> bool {
        self.wheel.is_some() || !self.touches.is_empty()
    }

    /// Feed one raw input event
    pub fn handle(&mut self, input: RawInput) -> GestureEvents {
        match input {
            RawInput::Wheel {
                delta,
                mode,
                timestamp,
            } => self.handle_wheel(delta, mode, timestamp),
            RawInput::TouchStart {
                id,
                position,
                timestamp,
            } => self.handle_touch_start(id, position, timestamp),
            RawInput::TouchMove {
                id,
                position,
                timestamp,
            } => self.handle_touch_move(id, position, timestamp),
            RawInput::TouchEnd {
                id,
                position,
                timestamp,
            } => self.handle_touch_end(id, position, timestamp),
        }
    }

    /// Flush a stalled wheel gesture
    pub fn poll(&mut self, now: f64) -> Option<GestureEvent> {
        let wheel = self.wheel?;
        if now - wheel.last_timestamp < WHEEL_STALL_TIME {
            return None;
        }
        self.wheel = None;
        tracing::trace!("wheel gesture stalled, velocity={:.3}", wheel.velocity);
        Some(GestureEvent::End {
            velocity: wheel.velocity,
            slip: true,
            count: 0,
        })
    }

    /// Project a 2-D vector onto the sync axis, honoring rails and scale
    fn project(&self, value: [f32; 2]) -> f32 {
        let direction = self.options.direction;
        let mut value = value;
        if self.options.rails {
            let cross = direction.cross().index();
            if value[cross].abs() > value[direction.index()].abs() {
                value[direction.index()] = 0.0;
            }
        }
        direction.component(value) * self.options.scale
    }

    fn handle_wheel(&mut self, delta: [f32; 2], mode: DeltaMode, timestamp: f64) -> GestureEvents {
        let delta = match mode {
            DeltaMode::Pixel => delta,
            DeltaMode::Line => [delta[0] * WHEEL_LINE_HEIGHT, delta[1] * WHEEL_LINE_HEIGHT],
        };
        // Wheel deltas point the way content scrolls; gestures follow the pointer.
        let delta = -self.project(delta);

        let mut events = GestureEvents::new();
        let elapsed = match self.wheel {
            Some(wheel) => (timestamp - wheel.last_timestamp).max(MIN_TICK_TIME),
            None => {
                events.push(GestureEvent::Start { count: 1 });
                MIN_TICK_TIME
            }
        };
        let velocity = delta / elapsed as f32;
        self.wheel = Some(WheelState {
            last_timestamp: timestamp,
            velocity,
        });

        events.push(GestureEvent::Update {
            delta,
            velocity,
            slip: true,
            count: 1,
        });
        events
    }

    fn handle_touch_start(&mut self, id: u64, position: [f32; 2], timestamp: f64) -> GestureEvents {
        let sample = Sample {
            position,
            timestamp,
        };
        match self.touches.iter_mut().find(|touch| touch.id == id) {
            Some(touch) => {
                touch.history.clear();
                touch.record(sample);
            }
            None => self.touches.push(TouchTrack {
                id,
                history: smallvec![sample],
            }),
        }
        smallvec![GestureEvent::Start {
            count: self.touches.len(),
        }]
    }

    fn handle_touch_move(&mut self, id: u64, position: [f32; 2], timestamp: f64) -> GestureEvents {
        let count = self.touches.len();
        let Some(index) = self.touches.iter().position(|touch| touch.id == id) else {
            return GestureEvents::new();
        };
        let touch = &mut self.touches[index];
        let Some(previous) = touch.last() else {
            return GestureEvents::new();
        };
        touch.record(Sample {
            position,
            timestamp,
        });
        let raw_delta = [
            position[0] - previous.position[0],
            position[1] - previous.position[1],
        ];
        let raw_velocity = touch.velocity();

        smallvec![GestureEvent::Update {
            delta: self.project(raw_delta),
            velocity: self.project(raw_velocity),
            slip: false,
            count,
        }]
    }

    fn handle_touch_end(&mut self, id: u64, position: [f32; 2], timestamp: f64) -> GestureEvents {
        let Some(index) = self.touches.iter().position(|touch| touch.id == id) else {
            return GestureEvents::new();
        };
        let touch = self.touches.remove(index);

        let stale = touch
            .last()
            .map(|last| timestamp - last.timestamp > RELEASE_TIMEOUT)
            .unwrap_or(true);
        let moved = touch
            .last()
            .map(|last| last.position != position)
            .unwrap_or(false);
        let velocity = if stale && !moved {
            0.0
        } else {
            self.project(touch.velocity())
        };

        smallvec![GestureEvent::End {
            velocity,
            slip: false,
            count: self.touches.len(),
        }]
    }
}
