//! Gesture bookkeeping
//!
//! The scroll view keeps a small record of what the user's fingers (or the
//! wheel) are doing, which spring is steering the particle, and whether the
//! viewport currently hangs past one end of the sequence.

/// Boundary the viewport is currently past
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edge {
    /// Before the first item
    Leading,
    #[default]
    None,
    /// After the last item
    Trailing,
}

impl Edge {
    /// Direction of the edge: -1 leading, 0 none, 1 trailing
    pub fn signum(self) -> i8 {
        match self {
            Edge::Leading => -1,
            Edge::None => 0,
            Edge::Trailing => 1,
        }
    }

    pub fn is_some(self) -> bool {
        self != Edge::None
    }
}

/// Which spring, if any, is attached to the particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpringMode {
    /// Drag and friction decelerate the particle
    #[default]
    None,
    /// Pulling back from past an edge
    Edge,
    /// Snapping onto an item boundary
    Page,
}

/// Coarse phase of the scroll view, derived from its state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    /// Nothing is moving
    Idle,
    /// A gesture is in progress
    Touching,
    /// Coasting under drag and friction
    Decelerating,
    /// Pulled back by the edge spring
    Bouncing,
    /// Pulled onto an item by the page spring
    Snapping,
}

/// Per-gesture state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureState {
    /// Active touches (1 for a wheel gesture)
    pub touch_count: usize,
    /// Latest velocity reported by input while touching
    pub touch_velocity: Option<f32>,
    pub on_edge: Edge,
    /// A wheel gesture was ended early by pushing into an edge
    pub early_end: bool,
    /// The cursor moved to another item during the last gesture
    pub node_switch: bool,
    /// A pagination decision is still owed for the last release
    pub needs_pagination_check: bool,
    /// Cursor index at the last pagination decision
    pub settled_index: usize,
}

impl GestureState {
    pub fn is_touching(&self) -> bool {
        self.touch_count > 0
    }

    /// Reset for a fresh gesture with `count` touches
    pub fn begin(&mut self, count: usize) {
        self.touch_count = count.max(1);
        self.touch_velocity = Some(0.0);
        self.early_end = false;
        self.node_switch = false;
    }
}
