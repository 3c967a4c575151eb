//! Tumbler Picker
//!
//! Date selection built from three paginated scroll columns.
//!
//! - [`Slot`]: one column of padded values with a settled-change event
//! - [`DatePicker`]: year, month and day slots kept consistent with the
//!   calendar (the day column follows the month length)
//! - [`PickerOptions`]: size, visible range, year span and per-slot scroll
//!   overrides, loadable from TOML
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tumbler_picker::{DatePicker, PickerOptions, YearRange};
//!
//! let mut picker = DatePicker::new(PickerOptions {
//!     years: Some(YearRange::new(2020, 2030)),
//!     ..Default::default()
//! });
//! let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
//! assert!(picker.set_current(date));
//!
//! for _ in 0..600 {
//!     picker.frame(16.0);
//! }
//! assert_eq!(picker.date(), Some(date));
//! assert_eq!(picker.regular_month().as_deref(), Some("02"));
//! ```

pub mod calendar;
pub mod config;
pub mod datepicker;
pub mod error;
pub mod model;
pub mod slot;

pub use calendar::{days_in_month, ydm_items, YearRange};
pub use config::PickerOptions;
pub use datepicker::{DatePicker, PickerEvent};
pub use error::{PickerError, Result};
pub use model::{DateModel, DateValue, Field};
pub use slot::{Slot, SlotEvent};
