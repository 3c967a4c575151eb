//! Scroll view state machine
//!
//! [`ScrollView`] couples a physics particle to a windowed cursor over an
//! item sequence. The particle's position is always measured from the origin
//! of the cursor's item; when it drifts more than one item away the cursor is
//! moved and the origin shifted so positions stay small.
//!
//! A frame is driven by the owner:
//!
//! ```text
//! handle_input(..)*  ->  tick(dt)  ->  render()  ->  drain_events()
//! ```
//!
//! Gestures detach all forces while a finger is down. On release either
//! momentum forces (drag + friction) or a spring take over; springs pull the
//! viewport back from past an edge, or onto an item boundary when paginated.

use std::ops::Range;

use tumbler_animation::{Force, PhysicsEngine, SpringForce};
use tumbler_core::{
    EventQueue, GestureEvent, InputSource, InputSync, RawInput, SequenceCursor, SharedSequence,
    SyncOptions,
};

use crate::config::{ScrollOptions, ScrollOptionsPatch};
use crate::gesture::{Edge, GestureState, ScrollPhase, SpringMode};
use crate::layout::{self, item_size, Layout, LayoutParams};
use crate::resolver::{resolve_active_index, ResolverInput};

/// Distance (px) a position may overshoot an item boundary before the cursor moves
pub const TOLERANCE: f32 = 0.5;

/// Speed (px/ms) below which the particle counts as at rest
pub const REST_VELOCITY: f32 = 0.001;

/// Events emitted by a [`ScrollView`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEvent {
    /// A page call ran; `direction` is 1 forward, -1 back
    PageChange { direction: i8 },
    /// The viewport moved past an end of the sequence
    EdgeHit { edge: Edge, position: f32 },
    /// The viewport returned within the sequence bounds
    EdgeLeft,
}

/// Physics-driven, optionally paginated scroll view over an item sequence
pub struct ScrollView<T> {
    options: ScrollOptions,
    engine: PhysicsEngine,
    spring: SpringForce,
    sync: InputSync,
    cursor: Option<SequenceCursor<T>>,
    gesture: GestureState,
    spring_mode: SpringMode,
    edge_spring_position: f32,
    page_spring_position: f32,
    /// Viewport size `[width, height]`
    size: [f32; 2],
    rendered_offset: f32,
    materialized: Range<usize>,
    events: EventQueue<ScrollEvent>,
}

impl<T> Default for ScrollView<T> {
    fn default() -> Self {
        Self::new(ScrollOptions::default())
    }
}

impl<T> ScrollView<T> {
    pub fn new(options: ScrollOptions) -> Self {
        let options = options.sanitized();
        let mut view = Self {
            spring: SpringForce::new(0.0, options.edge_period, options.edge_damp),
            sync: InputSync::new(options.sync_options()),
            engine: PhysicsEngine::new(),
            options,
            cursor: None,
            gesture: GestureState::default(),
            spring_mode: SpringMode::None,
            edge_spring_position: 0.0,
            page_spring_position: 0.0,
            size: [0.0, 0.0],
            rendered_offset: 0.0,
            materialized: 0..0,
            events: EventQueue::new(),
        };
        view.attach_agents();
        view
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    /// Apply an options patch
    pub fn set_options(&mut self, patch: &ScrollOptionsPatch) {
        if patch.is_empty() {
            return;
        }
        self.options = self.options.merge(patch);

        let scale = self.sync.options().scale;
        self.sync.set_options(SyncOptions {
            scale,
            ..self.options.sync_options()
        });

        let (period, damping_ratio) = match self.spring_mode {
            SpringMode::Page => (self.options.page_period, self.options.page_damp),
            SpringMode::Edge | SpringMode::None => {
                (self.options.edge_period, self.options.edge_damp)
            }
        };
        self.spring.period = period;
        self.spring.damping_ratio = damping_ratio;
        self.engine.update_spring(self.spring);

        // Pick up new drag/friction strengths.
        if self.spring_mode == SpringMode::None && !self.gesture.is_touching() {
            self.attach_agents();
        }
        tracing::debug!("scroll options updated: {:?}", self.options);
    }

    /// Set the viewport size `[width, height]`
    pub fn set_size(&mut self, size: [f32; 2]) {
        self.size = size;
    }

    pub fn size(&self) -> [f32; 2] {
        self.size
    }

    /// Scroll over `sequence`, starting at its first item
    pub fn sequence_from(&mut self, sequence: &SharedSequence<T>) {
        self.set_cursor(SequenceCursor::new(sequence, 0));
    }

    /// Scroll starting at an existing cursor
    pub fn set_cursor(&mut self, cursor: Option<SequenceCursor<T>>) {
        self.gesture.settled_index = cursor.as_ref().map_or(0, SequenceCursor::index);
        self.materialized = 0..0;
        self.cursor = cursor;
    }

    /// Stop all motion and release any spring; the position is kept
    pub fn halt(&mut self) {
        self.detach_agents();
        self.attach_agents();
        self.set_velocity(0.0);
        self.gesture.touch_velocity = None;
        self.gesture.needs_pagination_check = false;
    }

    /// Cursor at the origin of the scroll position
    pub fn cursor(&self) -> Option<&SequenceCursor<T>> {
        self.cursor.as_ref()
    }

    pub fn position(&self) -> f32 {
        self.engine.position()
    }

    pub fn set_position(&mut self, position: f32) {
        self.engine.set_position(position);
    }

    /// Current velocity; while touching this is the input velocity
    pub fn velocity(&self) -> f32 {
        if self.gesture.is_touching() {
            self.gesture.touch_velocity.unwrap_or(0.0)
        } else {
            self.engine.velocity()
        }
    }

    pub fn set_velocity(&mut self, velocity: f32) {
        self.engine.set_velocity(velocity);
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn spring_mode(&self) -> SpringMode {
        self.spring_mode
    }

    /// Anchor of the attached spring, if any
    pub fn spring_anchor(&self) -> Option<f32> {
        (self.spring_mode != SpringMode::None).then_some(self.spring.anchor)
    }

    pub fn on_edge(&self) -> Edge {
        self.gesture.on_edge
    }

    /// Forces currently acting on the particle
    pub fn forces(&self) -> &[Force] {
        self.engine.forces()
    }

    /// Whether the view has come to rest with nothing left to decide
    pub fn is_settled(&self) -> bool {
        if self.gesture.is_touching() || self.engine.velocity().abs() >= REST_VELOCITY {
            return false;
        }
        if self.options.paginated
            && self.gesture.needs_pagination_check
            && self.spring_mode != SpringMode::Edge
        {
            return false;
        }
        match self.spring_anchor() {
            Some(anchor) => (self.position() - anchor).abs() <= TOLERANCE,
            None => true,
        }
    }

    pub fn phase(&self) -> ScrollPhase {
        if self.gesture.is_touching() {
            return ScrollPhase::Touching;
        }
        if self.is_settled() {
            return ScrollPhase::Idle;
        }
        match self.spring_mode {
            SpringMode::Edge => ScrollPhase::Bouncing,
            SpringMode::Page => ScrollPhase::Snapping,
            SpringMode::None => ScrollPhase::Decelerating,
        }
    }

    /// Take all pending events in emission order
    pub fn drain_events(&mut self) -> Vec<ScrollEvent> {
        self.events.drain()
    }

    // ---- input ---------------------------------------------------------

    /// Feed one raw input event captured by the container or an item
    pub fn handle_input(&mut self, input: RawInput, source: InputSource) {
        if source == InputSource::Item && !self.options.group_scroll {
            return;
        }
        for event in self.sync.handle(input) {
            self.handle_gesture(event);
        }
    }

    /// Let a stalled wheel gesture end; `now` is in milliseconds
    pub fn poll_input(&mut self, now: f64) {
        if let Some(event) = self.sync.poll(now) {
            self.handle_gesture(event);
        }
    }

    /// Feed one normalized gesture event
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Start { count } => self.handle_start(count),
            GestureEvent::Update {
                delta,
                velocity,
                slip,
                count,
            } => self.handle_move(delta, velocity, slip, count),
            GestureEvent::End {
                velocity,
                slip,
                count,
            } => self.handle_end(velocity, slip, count),
        }
    }

    fn handle_start(&mut self, count: usize) {
        self.gesture.begin(count);
        self.detach_agents();
        self.set_velocity(0.0);
        tracing::trace!("gesture start, touches={}", self.gesture.touch_count);
    }

    fn handle_move(&mut self, delta: f32, input_velocity: f32, slip: bool, count: usize) {
        let velocity = -input_velocity;
        let delta = -delta;

        let edge = self.gesture.on_edge;
        if edge.is_some() && slip {
            let pushing = (velocity < 0.0 && edge == Edge::Leading)
                || (velocity > 0.0 && edge == Edge::Trailing);
            if pushing {
                if !self.gesture.early_end {
                    self.handle_end(input_velocity, slip, 0);
                    self.gesture.early_end = true;
                }
            } else if self.gesture.early_end && velocity.abs() > self.velocity().abs() {
                self.handle_start(count);
            }
        }
        if self.gesture.early_end {
            return;
        }

        self.gesture.touch_velocity = Some(velocity);
        if slip {
            self.set_velocity(velocity);
        } else {
            self.set_position(self.position() + delta);
        }
    }

    fn handle_end(&mut self, input_velocity: f32, slip: bool, count: usize) {
        self.gesture.touch_count = count;
        if count > 0 {
            return;
        }

        self.detach_agents();
        if self.gesture.on_edge.is_some() {
            self.set_spring(self.edge_spring_position, SpringMode::Edge);
        }
        self.attach_agents();

        let mut speed_limit = self.options.speed_limit;
        if slip && self.gesture.on_edge.is_some() {
            speed_limit *= self.options.edge_grip;
        }
        let velocity = (-input_velocity).clamp(-speed_limit, speed_limit);
        self.set_velocity(velocity);

        self.gesture.touch_velocity = None;
        self.gesture.needs_pagination_check = true;
        self.gesture.node_switch = self
            .cursor
            .as_ref()
            .is_some_and(|cursor| cursor.index() != self.gesture.settled_index);
        tracing::trace!(
            "gesture end, velocity={:.3}, node_switch={}",
            velocity,
            self.gesture.node_switch
        );
    }

    // ---- forces --------------------------------------------------------

    fn attach_agents(&mut self) {
        if self.spring_mode == SpringMode::None {
            self.engine.attach([
                Force::Drag {
                    strength: self.options.drag,
                },
                Force::Friction {
                    strength: self.options.friction,
                },
            ]);
        } else {
            self.engine.attach([Force::Spring(self.spring)]);
        }
    }

    fn detach_agents(&mut self) {
        self.spring_mode = SpringMode::None;
        self.engine.detach_all();
    }

    fn set_spring(&mut self, position: f32, mode: SpringMode) {
        match mode {
            SpringMode::Edge => {
                self.edge_spring_position = position;
                self.spring =
                    SpringForce::new(position, self.options.edge_period, self.options.edge_damp);
            }
            SpringMode::Page => {
                self.page_spring_position = position;
                self.spring =
                    SpringForce::new(position, self.options.page_period, self.options.page_damp);
            }
            SpringMode::None => {
                self.detach_agents();
                self.attach_agents();
                return;
            }
        }
        self.engine.update_spring(self.spring);

        if self.spring_mode == SpringMode::None {
            self.detach_agents();
            self.spring_mode = mode;
            self.attach_agents();
        }
        self.spring_mode = mode;
        tracing::trace!("spring {:?} anchored at {:.2}", mode, position);
    }

    /// Move the origin by `amount`, carrying positions and spring anchors along
    fn shift_origin(&mut self, amount: f32) {
        self.edge_spring_position += amount;
        self.page_spring_position += amount;
        self.set_position(self.position() + amount);

        let anchor = match self.spring_mode {
            SpringMode::Edge => self.edge_spring_position,
            SpringMode::Page => self.page_spring_position,
            SpringMode::None => return,
        };
        self.spring.anchor = anchor;
        self.engine.update_spring(self.spring);
    }

    // ---- layout --------------------------------------------------------

    fn viewport_extent(&self) -> f32 {
        self.options.direction.component(self.size)
    }

    fn node_size(&self, cursor: &SequenceCursor<T>) -> f32 {
        item_size(cursor, self.viewport_extent())
    }

    /// Visible extent, never larger than the whole sequence
    fn clip_size(&self) -> f32 {
        let clip = self
            .options
            .clip_size
            .unwrap_or_else(|| self.viewport_extent());
        let fallback = self.viewport_extent();
        let content = self.cursor.as_ref().and_then(SequenceCursor::sequence).map(|sequence| {
            sequence
                .borrow()
                .iter()
                .map(|item| item.size.filter(|size| *size > 0.0).unwrap_or(fallback))
                .sum::<f32>()
        });
        match content {
            Some(content) if content > 0.0 && content < clip => content,
            _ => clip,
        }
    }

    /// Keep the position within one item of the cursor's origin
    fn normalize_state(&mut self) {
        let Some(mut cursor) = self.cursor.clone() else {
            return;
        };
        if !cursor.is_valid() {
            match cursor.clamped() {
                Some(clamped) => {
                    tracing::debug!(
                        "sequence shrank under the cursor, moving {} -> {}",
                        cursor.index(),
                        clamped.index()
                    );
                    cursor = clamped;
                    self.cursor = Some(cursor.clone());
                }
                None => return,
            }
        }

        let mut position = self.position();
        let mut size = self.node_size(&cursor);
        while position > size + TOLERANCE {
            let Some(next) = cursor.next() else {
                break;
            };
            self.shift_origin(-size);
            position -= size;
            cursor = next;
            size = self.node_size(&cursor);
        }

        while position < -TOLERANCE {
            let Some(previous) = cursor.previous() else {
                break;
            };
            let previous_size = self.node_size(&previous);
            cursor = previous;
            self.shift_origin(previous_size);
            position += previous_size;
        }

        if self.cursor.as_ref().map(SequenceCursor::index) != Some(cursor.index()) {
            tracing::trace!("cursor moved to {}", cursor.index());
        }
        self.cursor = Some(cursor);
    }

    fn layout_pass(&self) -> Option<Layout> {
        let cursor = self.cursor.as_ref()?;
        Some(layout::layout(
            cursor,
            LayoutParams {
                position: self.position(),
                clip: self.clip_size(),
                margin: self.options.margin,
                fallback_size: self.viewport_extent(),
            },
        ))
    }

    fn handle_edge(&mut self, edge: Edge, edge_position: f32) {
        let previous = self.gesture.on_edge;
        if edge.is_some() {
            let entering = edge != previous;
            // Content may have grown or shrunk under a viewport resting on the edge.
            let moved =
                !entering && (edge_position - self.edge_spring_position).abs() > TOLERANCE;
            if entering || moved {
                self.edge_spring_position = edge_position;
                if entering {
                    self.sync.set_scale(self.options.edge_grip);
                    tracing::debug!("edge hit: {:?} at {:.2}", edge, edge_position);
                    self.events.push(ScrollEvent::EdgeHit {
                        edge,
                        position: edge_position,
                    });
                }
                if !self.gesture.is_touching()
                    && (self.spring_mode != SpringMode::Edge || previous.is_some())
                {
                    self.set_spring(edge_position, SpringMode::Edge);
                }
            }
        } else if previous.is_some() {
            self.sync.set_scale(1.0);
            if self.spring_mode != SpringMode::None && self.velocity().abs() < REST_VELOCITY {
                self.detach_agents();
                self.attach_agents();
            }
            tracing::debug!("edge left: {:?}", previous);
            self.events.push(ScrollEvent::EdgeLeft);
        }
        self.gesture.on_edge = edge;
    }

    /// Decide where to snap after a release. Returns true when a decision was made.
    fn handle_pagination(&mut self) -> bool {
        if !self.gesture.needs_pagination_check
            || self.gesture.is_touching()
            || self.spring_mode == SpringMode::Edge
        {
            return false;
        }
        let velocity = self.velocity();
        if velocity.abs() >= self.options.page_stop_speed {
            return false;
        }
        let Some(cursor) = self.cursor.clone() else {
            return false;
        };

        let position = self.position();
        let velocity_switch = velocity.abs() > self.options.page_switch_speed;
        let size = self.node_size(&cursor);
        let position_previous = position < 0.5 * size && self.gesture.node_switch;
        let position_next = position > 0.5 * size;

        if (position_next && !velocity_switch) || (velocity_switch && velocity > 0.0) {
            self.go_to_next_page();
        } else if (position_previous && !velocity_switch) || (velocity_switch && velocity < 0.0) {
            self.go_to_previous_page();
        } else {
            self.set_spring(0.0, SpringMode::Page);
        }

        self.gesture.needs_pagination_check = false;
        self.mark_settled_index();
        true
    }

    /// Position page targets are measured from: the armed page spring's
    /// anchor, or the particle position when no page spring is armed
    fn paging_origin(&self) -> f32 {
        match self.spring_mode {
            SpringMode::Page => self.page_spring_position,
            SpringMode::Edge | SpringMode::None => self.position(),
        }
    }

    fn mark_settled_index(&mut self) {
        if let Some(cursor) = &self.cursor {
            self.gesture.settled_index = cursor.index();
        }
    }

    // ---- frame loop ----------------------------------------------------

    /// Advance the physics by `dt` milliseconds
    pub fn tick(&mut self, dt: f32) {
        self.engine.step(dt);
    }

    /// Normalize, detect edges, paginate, and lay out the visible window.
    ///
    /// Returns `None` while no sequence is attached.
    pub fn render(&mut self) -> Option<Layout> {
        self.cursor.as_ref()?;
        self.normalize_state();

        let first = self.layout_pass()?;
        self.handle_edge(first.edge, first.edge_position);

        let layout = if self.options.paginated && self.handle_pagination() {
            self.layout_pass()?
        } else {
            first
        };

        self.rendered_offset = layout.group_offset;
        self.materialized = layout.materialized();
        Some(layout)
    }

    /// One full frame: `tick(dt)` followed by `render()`
    pub fn frame(&mut self, dt: f32) -> Option<Layout> {
        self.tick(dt);
        self.render()
    }

    /// Record the offset the renderer actually applied to the item group
    pub fn set_rendered_offset(&mut self, offset: f32) {
        self.rendered_offset = offset;
    }

    pub fn rendered_offset(&self) -> f32 {
        self.rendered_offset
    }

    // ---- selection and paging ------------------------------------------

    /// Sequence index of the item at the selection point
    pub fn active_index(&self) -> Option<usize> {
        let cursor = self.cursor.as_ref()?;
        let pivot = cursor.index();
        let materialized = if self.materialized.is_empty() {
            pivot..pivot + 1
        } else {
            self.materialized.start.min(pivot)..self.materialized.end.max(pivot + 1)
        };
        resolve_active_index(&ResolverInput {
            pivot_index: pivot,
            pivot_offset: 0.0,
            item_extent: self.node_size(cursor),
            materialized,
            rendered_offset: self.rendered_offset,
        })
    }

    /// Index the view comes to rest on once the armed spring settles.
    ///
    /// Unlike [`active_index`](Self::active_index) this looks through a page
    /// or edge animation to its target.
    pub fn resting_index(&self) -> Option<usize> {
        let cursor = self.cursor.as_ref()?;
        let origin = match self.spring_mode {
            SpringMode::Page => self.page_spring_position,
            SpringMode::Edge => self.edge_spring_position,
            SpringMode::None => self.position(),
        };
        let extent = self.node_size(cursor);
        let steps = if extent > 0.0 {
            (origin / extent).round()
        } else {
            0.0
        };
        let last = cursor.len().saturating_sub(1);
        Some((cursor.index() as f32 + steps).clamp(0.0, last as f32) as usize)
    }

    /// Move the cursor onto the resting item and snap to it with a page spring.
    ///
    /// Momentum and edge springs are dropped; an armed page spring keeps its
    /// motion. Returns the index snapped to, or `None` while touching.
    pub fn snap_to_rest(&mut self) -> Option<usize> {
        if self.gesture.is_touching() {
            return None;
        }
        let index = self.resting_index()?;
        let mut cursor = self.cursor.clone()?;
        if self.spring_mode != SpringMode::Page {
            self.halt();
        }

        let mut shift = 0.0;
        while cursor.index() < index {
            let Some(next) = cursor.next() else {
                break;
            };
            shift -= self.node_size(&cursor);
            cursor = next;
        }
        while cursor.index() > index {
            let Some(previous) = cursor.previous() else {
                break;
            };
            shift += self.node_size(&previous);
            cursor = previous;
        }
        let index = cursor.index();
        self.cursor = Some(cursor);
        self.shift_origin(shift);
        self.set_spring(0.0, SpringMode::Page);
        self.mark_settled_index();
        tracing::debug!("snapped to rest at {}", index);
        Some(index)
    }

    /// Step the cursor forward one item and snap to it.
    ///
    /// Consecutive calls each advance one more item: while a page spring is
    /// armed the target is measured from its anchor rather than the position.
    ///
    /// Returns the new cursor, or `None` at the end of the sequence (the state
    /// is left untouched, though a page change is still reported).
    pub fn go_to_next_page(&mut self) -> Option<SequenceCursor<T>> {
        let cursor = self.cursor.clone()?;
        let next = cursor.next();
        if let Some(next) = &next {
            let current_position = self.paging_origin();
            let current_size = self.node_size(&cursor);
            let next_size = self.node_size(next);
            self.cursor = Some(next.clone());

            let target = if !near_cursor(current_position, current_size) {
                // A page spring still far from the cursor: one item past its anchor.
                current_position + current_size
            } else if current_position > current_size - TOLERANCE {
                current_size + next_size
            } else {
                current_size
            };
            self.set_spring(target, SpringMode::Page);
            self.shift_origin(-current_size);
            self.mark_settled_index();
            tracing::debug!("next page -> {}", next.index());
        }
        self.events.push(ScrollEvent::PageChange { direction: 1 });
        next
    }

    /// Step the cursor back one item and snap to it.
    ///
    /// Returns the new cursor, or `None` at the start of the sequence.
    pub fn go_to_previous_page(&mut self) -> Option<SequenceCursor<T>> {
        let cursor = self.cursor.clone()?;
        let previous = cursor.previous();
        if let Some(previous) = &previous {
            let current_position = self.paging_origin();
            let current_size = self.node_size(&cursor);
            let previous_size = self.node_size(previous);
            self.cursor = Some(previous.clone());

            let target = if !near_cursor(current_position, current_size) {
                current_position - previous_size
            } else if current_position < TOLERANCE {
                -previous_size
            } else {
                0.0
            };
            self.set_spring(target, SpringMode::Page);
            self.shift_origin(previous_size);
            self.mark_settled_index();
            tracing::debug!("previous page -> {}", previous.index());
        }
        self.events.push(ScrollEvent::PageChange { direction: -1 });
        previous
    }
}

/// Whether a paging origin lies on the cursor's item rather than items away
fn near_cursor(origin: f32, size: f32) -> bool {
    (-TOLERANCE..=size + TOLERANCE).contains(&origin)
}

impl<T: Clone> ScrollView<T> {
    /// Content `offset` items after the active item
    pub fn active_content(&self, offset: isize) -> Option<T> {
        let index = self.active_index()?.checked_add_signed(offset)?;
        let sequence = self.cursor.as_ref()?.sequence()?;
        let sequence = sequence.borrow();
        sequence.get(index)?.content.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tumbler_core::ItemSequence;

    const EXTENT: f32 = 60.0;

    fn paginated_view(shared: &SharedSequence<i32>) -> ScrollView<i32> {
        let mut view = ScrollView::new(ScrollOptions {
            paginated: true,
            clip_size: Some(300.0),
            ..Default::default()
        });
        view.set_size([200.0, EXTENT]);
        view.sequence_from(shared);
        view
    }

    fn run(view: &mut ScrollView<i32>, frames: usize) {
        for _ in 0..frames {
            view.frame(16.0);
        }
    }

    fn drag(view: &mut ScrollView<i32>, distance: f32) {
        view.handle_gesture(GestureEvent::Start { count: 1 });
        view.handle_gesture(GestureEvent::Update {
            delta: -distance,
            velocity: 0.0,
            slip: false,
            count: 1,
        });
    }

    fn release(view: &mut ScrollView<i32>, velocity: f32) {
        view.handle_gesture(GestureEvent::End {
            velocity: -velocity,
            slip: false,
            count: 0,
        });
    }

    #[test]
    fn test_new_view_coasts_with_momentum_forces() {
        let view = ScrollView::<i32>::default();
        assert_eq!(view.forces().len(), 2);
        assert_eq!(view.spring_mode(), SpringMode::None);
        assert_eq!(view.phase(), ScrollPhase::Idle);
    }

    #[test]
    fn test_render_without_sequence() {
        let mut view = ScrollView::<i32>::default();
        assert!(view.render().is_none());
        assert_eq!(view.active_index(), None);
        assert!(view.go_to_next_page().is_none());
        assert!(view.drain_events().is_empty());
    }

    #[test]
    fn test_drag_follows_pointer() {
        let shared = ItemSequence::padded(0..20, 0).into_shared();
        let mut view = paginated_view(&shared);

        drag(&mut view, 25.0);
        assert_eq!(view.position(), 25.0);
        assert_eq!(view.phase(), ScrollPhase::Touching);
        assert!(view.forces().is_empty());
    }

    #[test]
    fn test_normalize_moves_cursor_and_keeps_position_small() {
        let shared = ItemSequence::padded(0..20, 0).into_shared();
        let mut view = paginated_view(&shared);

        drag(&mut view, 150.0);
        view.render();
        assert_eq!(view.cursor().unwrap().index(), 2);
        assert!((view.position() - 30.0).abs() < 1e-4);

        drag(&mut view, -100.0);
        view.render();
        assert_eq!(view.cursor().unwrap().index(), 0);
        assert!((view.position() - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_release_speed_is_limited() {
        let shared = ItemSequence::padded(0..20, 0).into_shared();
        let mut view = paginated_view(&shared);
        drag(&mut view, 10.0);
        release(&mut view, 50.0);
        assert_eq!(view.velocity(), 10.0);
        assert!(view.gesture().needs_pagination_check);
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let shared = ItemSequence::padded(0..20, 0).into_shared();
        let mut view = paginated_view(&shared);
        view.set_cursor(SequenceCursor::new(&shared, 5));

        drag(&mut view, 20.0);
        release(&mut view, 0.0);
        view.render();
        assert_eq!(view.spring_mode(), SpringMode::Page);
        assert_eq!(view.spring_anchor(), Some(0.0));

        run(&mut view, 200);
        assert!(view.is_settled());
        assert_eq!(view.active_index(), Some(5));
    }

    #[test]
    fn test_long_drag_advances_one_item() {
        let shared = ItemSequence::padded(0..20, 0).into_shared();
        let mut view = paginated_view(&shared);
        view.set_cursor(SequenceCursor::new(&shared, 5));

        drag(&mut view, 40.0);
        release(&mut view, 0.0);
        view.render();
        assert_eq!(view.cursor().unwrap().index(), 6);
        assert_eq!(
            view.drain_events(),
            vec![ScrollEvent::PageChange { direction: 1 }]
        );

        run(&mut view, 200);
        assert!(view.is_settled());
        assert_eq!(view.active_index(), Some(6));
    }

    #[test]
    fn test_flick_back_switches_page() {
        let shared = ItemSequence::padded(0..20, 0).into_shared();
        let mut view = paginated_view(&shared);
        view.set_cursor(SequenceCursor::new(&shared, 5));

        // Drag back a little, then flick in the same direction.
        drag(&mut view, -10.0);
        release(&mut view, -2.0);
        run(&mut view, 200);

        assert!(view.is_settled());
        assert_eq!(view.active_index(), Some(4));
    }

    #[test]
    fn test_next_page_from_rest_animates_forward() {
        let shared = ItemSequence::padded(0..20, 0).into_shared();
        let mut view = paginated_view(&shared);

        let next = view.go_to_next_page().unwrap();
        assert_eq!(next.index(), 1);
        assert_eq!(view.position(), -EXTENT);
        assert_eq!(view.spring_anchor(), Some(0.0));

        run(&mut view, 200);
        assert_eq!(view.active_index(), Some(1));
    }

    #[test]
    fn test_previous_page_from_rest_animates_back() {
        let shared = ItemSequence::padded(0..20, 0).into_shared();
        let mut view = paginated_view(&shared);
        view.set_cursor(SequenceCursor::new(&shared, 3));

        let previous = view.go_to_previous_page().unwrap();
        assert_eq!(previous.index(), 2);
        assert_eq!(view.position(), EXTENT);
        assert_eq!(view.spring_anchor(), Some(0.0));

        run(&mut view, 200);
        assert!(view.is_settled());
        assert_eq!(view.active_index(), Some(2));
    }

    #[test]
    fn test_consecutive_previous_pages_each_move_one_item() {
        let shared = ItemSequence::padded(0..20, 0).into_shared();
        let mut view = paginated_view(&shared);
        view.set_cursor(SequenceCursor::new(&shared, 10));

        for _ in 0..3 {
            view.go_to_previous_page();
        }
        assert_eq!(view.cursor().unwrap().index(), 7);
        assert_eq!(view.spring_anchor(), Some(0.0));

        run(&mut view, 300);
        assert!(view.is_settled());
        assert_eq!(view.active_index(), Some(7));
    }

    #[test]
    fn test_resting_index_looks_through_animation() {
        let shared = ItemSequence::padded(0..20, 0).into_shared();
        let mut view = paginated_view(&shared);
        view.set_cursor(SequenceCursor::new(&shared, 10));
        for _ in 0..3 {
            view.go_to_next_page();
        }
        run(&mut view, 5);
        assert_eq!(view.resting_index(), Some(13));

        // Paging mid-flight steps from the target, not from where the cursor is.
        view.go_to_previous_page();
        assert_eq!(view.resting_index(), Some(12));
        run(&mut view, 300);
        assert!(view.is_settled());
        assert_eq!(view.active_index(), Some(12));
    }

    #[test]
    fn test_snap_to_rest_rebases_cursor() {
        let shared = ItemSequence::padded(0..20, 0).into_shared();
        let mut view = paginated_view(&shared);
        for _ in 0..5 {
            view.go_to_next_page();
        }
        run(&mut view, 3);

        assert_eq!(view.snap_to_rest(), Some(5));
        assert_eq!(view.cursor().unwrap().index(), 5);
        assert_eq!(view.spring_anchor(), Some(0.0));
        run(&mut view, 300);
        assert_eq!(view.active_index(), Some(5));
    }

    #[test]
    fn test_snap_to_rest_cancels_momentum() {
        let shared = ItemSequence::padded(0..20, 0).into_shared();
        let mut view = paginated_view(&shared);
        drag(&mut view, 100.0);
        assert_eq!(view.snap_to_rest(), None);

        release(&mut view, 3.0);
        assert_eq!(view.snap_to_rest(), Some(2));
        assert!(!view.gesture().needs_pagination_check);
        assert_eq!(view.spring_mode(), SpringMode::Page);
        assert!((view.position() + 20.0).abs() < 1e-4);

        run(&mut view, 300);
        assert!(view.is_settled());
        assert_eq!(view.active_index(), Some(2));
    }

    #[test]
    fn test_halt_releases_spring() {
        let shared = ItemSequence::padded(0..20, 0).into_shared();
        let mut view = paginated_view(&shared);
        view.go_to_next_page();
        assert_eq!(view.spring_mode(), SpringMode::Page);

        view.halt();
        assert_eq!(view.spring_mode(), SpringMode::None);
        assert_eq!(view.velocity(), 0.0);
        assert_eq!(view.forces().len(), 2);
    }

    #[test]
    fn test_paging_at_boundaries() {
        let shared = ItemSequence::padded(0..3, 0).into_shared();
        let mut view = paginated_view(&shared);

        assert!(view.go_to_previous_page().is_none());
        assert_eq!(view.cursor().unwrap().index(), 0);
        assert_eq!(view.position(), 0.0);
        assert_eq!(view.velocity(), 0.0);
        assert_eq!(
            view.drain_events(),
            vec![ScrollEvent::PageChange { direction: -1 }]
        );
    }

    #[test]
    fn test_leading_edge_bounces_back() {
        let shared = ItemSequence::padded(0..20, 0).into_shared();
        let mut view = paginated_view(&shared);

        drag(&mut view, -30.0);
        view.render();
        assert_eq!(view.on_edge(), Edge::Leading);
        assert_eq!(
            view.drain_events(),
            vec![ScrollEvent::EdgeHit {
                edge: Edge::Leading,
                position: 0.0
            }]
        );

        release(&mut view, 0.0);
        assert_eq!(view.spring_mode(), SpringMode::Edge);
        run(&mut view, 300);
        assert!(view.position().abs() <= TOLERANCE);
        assert_eq!(view.active_index(), Some(0));
    }

    #[test]
    fn test_item_input_requires_group_scroll() {
        let shared = ItemSequence::padded(0..20, 0).into_shared();
        let mut view = paginated_view(&shared);
        let start = RawInput::TouchStart {
            id: 1,
            position: [0.0, 100.0],
            timestamp: 0.0,
        };

        view.handle_input(start, InputSource::Item);
        assert!(!view.gesture().is_touching());

        view.set_options(&ScrollOptionsPatch {
            group_scroll: Some(true),
            ..Default::default()
        });
        view.handle_input(start, InputSource::Item);
        assert!(view.gesture().is_touching());
    }

    #[test]
    fn test_active_content_offset() {
        let shared = ItemSequence::padded(1..=5, 2).into_shared();
        let mut view = paginated_view(&shared);
        view.set_cursor(SequenceCursor::new(&shared, 1));
        view.render();

        assert_eq!(view.active_index(), Some(1));
        assert_eq!(view.active_content(0), None);
        assert_eq!(view.active_content(2), Some(2));
        assert_eq!(view.active_content(-2), None);
    }
}
