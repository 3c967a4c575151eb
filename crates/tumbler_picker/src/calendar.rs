//! Calendar helpers and padded value lists

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tumbler_core::ItemSequence;

/// Years shown around the current year by default
const DEFAULT_YEAR_SPAN: i32 = 10;

/// Inclusive range of selectable years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// The current year plus and minus nine
    pub fn around_current() -> Self {
        Self::around(Local::now().year())
    }

    pub fn around(year: i32) -> Self {
        Self {
            start: year - DEFAULT_YEAR_SPAN + 1,
            end: year + DEFAULT_YEAR_SPAN - 1,
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }
}

/// Values `start..=end` with `gap` placeholders at both ends.
///
/// Empty when `start > end`.
pub fn ydm_items(start: i32, end: i32, gap: usize) -> ItemSequence<i32> {
    ItemSequence::padded(start..=end, gap)
}

/// Number of days in `month` of `year`, or `None` for an invalid month
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2021, 2), Some(28));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2021, 4), Some(30));
        assert_eq!(days_in_month(2021, 12), Some(31));
        assert_eq!(days_in_month(2021, 13), None);
        assert_eq!(days_in_month(2021, 0), None);
    }

    #[test]
    fn test_ydm_items_length() {
        assert_eq!(ydm_items(1, 12, 2).len(), 12 + 4);
        assert_eq!(ydm_items(2020, 2020, 3).len(), 1 + 6);
        assert!(ydm_items(5, 4, 2).is_empty());
    }

    #[test]
    fn test_default_year_range() {
        let range = YearRange::around(2024);
        assert_eq!(range, YearRange::new(2015, 2033));
        assert!(range.contains(2024));
        assert!(!range.contains(2034));
        assert!(YearRange::around_current().contains(Local::now().year()));
    }
}
