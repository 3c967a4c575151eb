//! A single picker column
//!
//! A [`Slot`] owns a padded value sequence and the paginated scroll view
//! that walks it. The selected value is the item `gap` places below the top
//! of the viewport, i.e. the middle row.

use tumbler_core::{
    Axis, EventQueue, GestureEvent, InputSource, Item, ItemSequence, RawInput, SharedSequence,
};
use tumbler_scroll::{ScrollEvent, ScrollOptions, ScrollOptionsPatch, ScrollView};

/// Events emitted by a [`Slot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotEvent {
    /// The settled selection changed
    Change { value: Option<i32> },
}

/// One scrollable column of values
pub struct Slot {
    view: ScrollView<i32>,
    items: SharedSequence<i32>,
    gap: usize,
    extent: f32,
    last_value: Option<i32>,
    events: EventQueue<SlotEvent>,
}

impl Slot {
    /// Build a slot over already padded `items`.
    ///
    /// `range` items are visible at once, each `height / range` tall.
    pub fn new(
        items: ItemSequence<i32>,
        width: f32,
        height: f32,
        range: usize,
        scroll: &ScrollOptionsPatch,
    ) -> Self {
        let range = range.max(1);
        let extent = height / range as f32;

        let mut options = ScrollOptions::paginated().merge(scroll);
        options.direction = Axis::Y;
        options.paginated = true;
        options.clip_size = Some(height);

        let mut view = ScrollView::new(options);
        view.set_size([width, height]);

        let items = sized(items, extent).into_shared();
        view.sequence_from(&items);

        let mut slot = Self {
            view,
            items,
            gap: (range - 1) / 2,
            extent,
            last_value: None,
            events: EventQueue::new(),
        };
        slot.last_value = slot.value();
        slot
    }

    /// Currently selected value
    pub fn value(&self) -> Option<i32> {
        self.view.active_content(self.gap as isize)
    }

    /// Number of real (non-placeholder) items
    pub fn item_count(&self) -> usize {
        self.items.borrow().content_count()
    }

    /// Shared handle to the padded sequence
    pub fn items(&self) -> &SharedSequence<i32> {
        &self.items
    }

    pub fn view(&self) -> &ScrollView<i32> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ScrollView<i32> {
        &mut self.view
    }

    /// Append `from..=to` in front of the trailing padding
    pub fn add_items(&mut self, from: i32, to: i32) {
        let extent = self.extent;
        let added = (from..=to).map(|value| Item::new(value).with_size(extent));
        self.items.borrow_mut().splice_tail(self.gap, 0, added);
        tracing::debug!("slot items {}..={} added", from, to);
    }

    /// Remove the values `from..=to`
    pub fn remove_items(&mut self, from: i32, to: i32) {
        if from > to {
            return;
        }
        let mut items = self.items.borrow_mut();
        let Some(start) = items.position(|value| *value == from) else {
            return;
        };
        let count = usize::try_from(to - from).map_or(0, |span| span + 1);
        items.remove_range(start..start + count);
        tracing::debug!("slot items {}..={} removed", from, to);
    }

    /// Replace the values, starting again from the first one
    pub fn sequence_from(&mut self, items: ItemSequence<i32>) {
        self.items = sized(items, self.extent).into_shared();
        self.view.sequence_from(&self.items);
        self.view.set_position(0.0);
        self.view.halt();
    }

    /// Page toward `value` until it is selected.
    ///
    /// Counting starts from where a running animation would come to rest, so
    /// calls made mid-flight still land on `value`. Stops early when the view
    /// cannot page any further; returns whether the value ended up selected.
    pub fn set_current(&mut self, value: i32) -> bool {
        let Some(target) = self.items.borrow().position(|item| *item == value) else {
            return false;
        };
        let Some(resting) = self.view.snap_to_rest() else {
            return false;
        };

        let mut current = resting + self.gap;
        let bound = self.items.borrow().len();
        for _ in 0..bound {
            if current < target {
                if self.view.go_to_next_page().is_none() {
                    break;
                }
                current += 1;
            } else if current > target {
                if self.view.go_to_previous_page().is_none() {
                    break;
                }
                current -= 1;
            } else {
                break;
            }
        }
        tracing::debug!("slot paged toward {}, selection index {}", value, current);
        current == target
    }

    pub fn handle_input(&mut self, input: RawInput, source: InputSource) {
        self.view.handle_input(input, source);
    }

    pub fn handle_gesture(&mut self, event: GestureEvent) {
        self.view.handle_gesture(event);
    }

    /// Let a stalled wheel gesture end
    pub fn poll_input(&mut self, now: f64) {
        self.view.poll_input(now);
    }

    /// Advance one frame; reports a change once the selection settles
    pub fn frame(&mut self, dt: f32) {
        self.view.frame(dt);
        for event in self.view.drain_events() {
            if let ScrollEvent::PageChange { direction } = event {
                tracing::trace!("slot page change {}", direction);
            }
        }

        if self.view.is_settled() {
            let value = self.value();
            if value != self.last_value {
                self.last_value = value;
                self.events.push(SlotEvent::Change { value });
            }
        }
    }

    pub fn is_settled(&self) -> bool {
        self.view.is_settled()
    }

    pub fn drain_events(&mut self) -> Vec<SlotEvent> {
        self.events.drain()
    }
}

fn sized(mut items: ItemSequence<i32>, extent: f32) -> ItemSequence<i32> {
    for item in items.iter_mut() {
        item.size = Some(extent);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::ydm_items;
    use pretty_assertions::assert_eq;

    fn slot(start: i32, end: i32) -> Slot {
        Slot::new(
            ydm_items(start, end, 2),
            200.0,
            300.0,
            5,
            &ScrollOptionsPatch::default(),
        )
    }

    fn settle(slot: &mut Slot) {
        for _ in 0..400 {
            slot.frame(16.0);
        }
    }

    #[test]
    fn test_initial_value_is_first() {
        let slot = slot(1, 12);
        assert_eq!(slot.value(), Some(1));
        assert_eq!(slot.item_count(), 12);
    }

    #[test]
    fn test_set_current_pages_and_reports_once() {
        let mut slot = slot(1, 12);
        assert!(slot.set_current(7));
        settle(&mut slot);

        assert_eq!(slot.value(), Some(7));
        assert_eq!(
            slot.drain_events(),
            vec![SlotEvent::Change { value: Some(7) }]
        );
    }

    #[test]
    fn test_set_current_back_and_forth() {
        let mut slot = slot(1, 31);
        assert!(slot.set_current(31));
        settle(&mut slot);
        assert_eq!(slot.value(), Some(31));

        assert!(slot.set_current(2));
        settle(&mut slot);
        assert_eq!(slot.value(), Some(2));
    }

    #[test]
    fn test_set_current_while_animating() {
        for frames in [1, 2, 4, 7, 13, 18] {
            let mut slot = slot(1, 31);
            assert!(slot.set_current(20));
            for _ in 0..frames {
                slot.frame(16.0);
            }

            assert!(slot.set_current(3), "after {} frames", frames);
            settle(&mut slot);
            assert_eq!(slot.value(), Some(3), "after {} frames", frames);
        }
    }

    #[test]
    fn test_set_current_unknown_value() {
        let mut slot = slot(1, 12);
        assert!(!slot.set_current(13));
        assert_eq!(slot.value(), Some(1));
    }

    #[test]
    fn test_add_and_remove_items() {
        let mut slot = slot(1, 28);
        slot.add_items(29, 31);
        assert_eq!(slot.item_count(), 31);
        assert_eq!(slot.items().borrow().trailing_placeholders(), 2);

        slot.remove_items(30, 31);
        assert_eq!(slot.item_count(), 29);
        assert_eq!(slot.items().borrow().len(), 29 + 4);
    }

    #[test]
    fn test_truncation_pulls_selection_back() {
        let mut slot = slot(1, 31);
        slot.set_current(31);
        settle(&mut slot);
        slot.drain_events();

        slot.remove_items(29, 31);
        settle(&mut slot);
        assert_eq!(slot.value(), Some(28));
        assert_eq!(
            slot.drain_events(),
            vec![SlotEvent::Change { value: Some(28) }]
        );
    }

    #[test]
    fn test_sequence_from_resets_to_first_value() {
        let mut slot = slot(1, 12);
        slot.set_current(5);
        settle(&mut slot);

        slot.sequence_from(ydm_items(2000, 2010, 2));
        settle(&mut slot);
        assert_eq!(slot.value(), Some(2000));
        assert_eq!(slot.item_count(), 11);
    }
}
