//! Event types
//!
//! Raw pointer input coming from the platform, the normalized gesture stream
//! produced by [`InputSync`](crate::sync::InputSync), and a small queue used
//! for typed outbound events.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal
    X,
    /// Vertical (default)
    #[default]
    Y,
}

impl Axis {
    /// Index into an `[x, y]` pair
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    /// Pick this axis' component from an `[x, y]` pair
    pub fn component(self, value: [f32; 2]) -> f32 {
        value[self.index()]
    }

    pub fn cross(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Unit of a wheel delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaMode {
    /// Deltas are in pixels
    #[default]
    Pixel,
    /// Deltas are in lines and get multiplied by a line height
    Line,
}

/// Raw pointer input. Timestamps are in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    /// Mouse wheel or trackpad scroll; positive `y` scrolls content forward
    Wheel {
        delta: [f32; 2],
        mode: DeltaMode,
        timestamp: f64,
    },
    TouchStart {
        id: u64,
        position: [f32; 2],
        timestamp: f64,
    },
    TouchMove {
        id: u64,
        position: [f32; 2],
        timestamp: f64,
    },
    TouchEnd {
        id: u64,
        position: [f32; 2],
        timestamp: f64,
    },
}

impl RawInput {
    pub fn timestamp(&self) -> f64 {
        match self {
            RawInput::Wheel { timestamp, .. }
            | RawInput::TouchStart { timestamp, .. }
            | RawInput::TouchMove { timestamp, .. }
            | RawInput::TouchEnd { timestamp, .. } => *timestamp,
        }
    }
}

/// Where a raw input event was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSource {
    /// The scroll container itself
    #[default]
    Container,
    /// One of the rendered items inside the container
    Item,
}

/// Normalized gesture stream along one axis.
///
/// Deltas and velocities follow pointer motion: dragging a finger up yields
/// negative values. Velocities are in pixels per millisecond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Start {
        count: usize,
    },
    Update {
        delta: f32,
        velocity: f32,
        /// Velocity-controlled input (wheel) rather than a position-following drag
        slip: bool,
        count: usize,
    },
    End {
        velocity: f32,
        slip: bool,
        /// Touches still down after this one lifted
        count: usize,
    },
}

/// FIFO of typed events waiting for the owner to drain them
#[derive(Debug, Clone)]
pub struct EventQueue<E> {
    events: VecDeque<E>,
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    pub fn push(&mut self, event: E) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<E> {
        self.events.pop_front()
    }

    /// Take every pending event in emission order
    pub fn drain(&mut self) -> Vec<E> {
        self.events.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_component() {
        assert_eq!(Axis::X.component([3.0, 4.0]), 3.0);
        assert_eq!(Axis::Y.component([3.0, 4.0]), 4.0);
        assert_eq!(Axis::X.cross(), Axis::Y);
    }

    #[test]
    fn test_queue_preserves_order() {
        let mut queue = EventQueue::new();
        queue.push(1);
        queue.push(2);
        queue.push(3);
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.drain(), vec![2, 3]);
        assert!(queue.is_empty());
    }
}
