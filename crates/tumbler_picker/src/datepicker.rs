//! Year/month/day picker
//!
//! Three [`Slot`]s side by side. Settled slot changes are recorded in a
//! [`DateModel`] and re-emitted as [`PickerEvent`]s; a year or month change
//! grows or truncates the day slot to the month's length.

use chrono::NaiveDate;
use tumbler_core::{EventQueue, GestureEvent, InputSource, RawInput};

use crate::calendar::{days_in_month, ydm_items, YearRange};
use crate::config::PickerOptions;
use crate::model::{DateModel, DateValue, Field};
use crate::slot::{Slot, SlotEvent};

/// Events emitted by a [`DatePicker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// A slot settled on a new value
    Change { field: Field, value: Option<i32> },
}

/// Headless date picker
pub struct DatePicker {
    options: PickerOptions,
    years: YearRange,
    model: DateModel,
    year: Slot,
    month: Slot,
    day: Slot,
    events: EventQueue<PickerEvent>,
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new(PickerOptions::default())
    }
}

impl DatePicker {
    pub fn new(options: PickerOptions) -> Self {
        let options = options.sanitized();
        let gap = options.gap();
        let years = options.years.unwrap_or_else(YearRange::around_current);
        let [width, height] = options.size;

        let slot = |start: i32, end: i32| {
            Slot::new(
                ydm_items(start, end, gap),
                width / 3.0,
                height,
                options.range,
                &options.scroll,
            )
        };
        let year = slot(years.start, years.end);
        let month = slot(1, 12);
        let day = slot(1, 31);

        let model = DateModel::new(DateValue {
            year: year.value(),
            month: month.value(),
            day: day.value(),
        });
        tracing::debug!("date picker created, years {}..={}", years.start, years.end);

        Self {
            options,
            years,
            model,
            year,
            month,
            day,
            events: EventQueue::new(),
        }
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn years(&self) -> YearRange {
        self.years
    }

    pub fn slot(&self, field: Field) -> &Slot {
        match field {
            Field::Year => &self.year,
            Field::Month => &self.month,
            Field::Day => &self.day,
        }
    }

    pub fn slot_mut(&mut self, field: Field) -> &mut Slot {
        match field {
            Field::Year => &mut self.year,
            Field::Month => &mut self.month,
            Field::Day => &mut self.day,
        }
    }

    /// Values currently selected in the slots, possibly an impossible date
    pub fn value(&self) -> DateValue {
        DateValue {
            year: self.year.value(),
            month: self.month.value(),
            day: self.day.value(),
        }
    }

    /// Selected date, or `None` when the selection is not a calendar date
    pub fn date(&self) -> Option<NaiveDate> {
        self.value().to_date()
    }

    /// Selected month as two digits
    pub fn regular_month(&self) -> Option<String> {
        self.month.value().map(|month| format!("{:02}", month))
    }

    /// Selected day as two digits
    pub fn regular_day(&self) -> Option<String> {
        self.day.value().map(|day| format!("{:02}", day))
    }

    /// Last settled values
    pub fn model(&self) -> &DateModel {
        &self.model
    }

    /// Days in the month the model currently holds
    pub fn days_in_month(&self) -> Option<u32> {
        let year = self.model.get(Field::Year)?;
        let month = u32::try_from(self.model.get(Field::Month)?).ok()?;
        days_in_month(year, month)
    }

    /// Replace the selectable years, selecting the first
    pub fn set_years(&mut self, start: i32, end: i32) {
        let items = ydm_items(start, end, self.options.gap());
        let first = items.iter().find_map(|item| item.content);
        self.years = YearRange::new(start, end);
        self.year.sequence_from(items);
        self.model.set(Field::Year, first);
        self.sync_day_count();
    }

    /// Page every slot toward `date`.
    ///
    /// Returns whether every field could be reached; the slots animate there
    /// over the following frames.
    pub fn set_current(&mut self, date: NaiveDate) -> bool {
        let target = DateValue::from(date);
        let mut reached = true;
        for field in Field::ALL {
            let Some(value) = target.get(field) else {
                continue;
            };
            if field == Field::Day {
                // The target month's days must exist before paging to one.
                self.sync_day_count();
            }
            let found = self.slot_mut(field).set_current(value);
            if found && field != Field::Day {
                self.model.set(field, Some(value));
            }
            reached &= found;
        }
        tracing::debug!("date picker paging toward {}, reached={}", date, reached);
        reached
    }

    pub fn handle_input(&mut self, field: Field, input: RawInput) {
        self.slot_mut(field)
            .handle_input(input, InputSource::Container);
    }

    pub fn handle_gesture(&mut self, field: Field, event: GestureEvent) {
        self.slot_mut(field).handle_gesture(event);
    }

    /// Let stalled wheel gestures end
    pub fn poll_input(&mut self, now: f64) {
        for field in Field::ALL {
            self.slot_mut(field).poll_input(now);
        }
    }

    /// Advance every slot by one frame and process their changes
    pub fn frame(&mut self, dt: f32) {
        for field in Field::ALL {
            let slot = self.slot_mut(field);
            slot.frame(dt);
            for SlotEvent::Change { value } in slot.drain_events() {
                self.handle_change(field, value);
            }
        }
    }

    pub fn is_settled(&self) -> bool {
        Field::ALL.iter().all(|field| self.slot(*field).is_settled())
    }

    pub fn drain_events(&mut self) -> Vec<PickerEvent> {
        self.events.drain()
    }

    fn handle_change(&mut self, field: Field, value: Option<i32>) {
        self.model.set(field, value);
        tracing::debug!("{} changed to {:?}", field, value);
        self.events.push(PickerEvent::Change { field, value });
        if field != Field::Day {
            self.sync_day_count();
        }
    }

    /// Grow or truncate the day slot to the model's month length
    fn sync_day_count(&mut self) {
        let Some(target) = self.days_in_month() else {
            return;
        };
        let target = target as i32;
        let current = self.day.item_count() as i32;
        if target > current {
            self.day.add_items(current + 1, target);
        } else if target < current {
            self.day.remove_items(target + 1, current);
        }
    }
}
