//! Date fields and the picker's value model

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PickerError;

/// One column of the date picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Year,
    Month,
    Day,
}

impl Field {
    /// Fields in column order
    pub const ALL: [Field; 3] = [Field::Year, Field::Month, Field::Day];

    pub fn name(self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Field {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "year" => Ok(Field::Year),
            "month" => Ok(Field::Month),
            "day" => Ok(Field::Day),
            _ => Err(PickerError::UnknownField(s.to_string())),
        }
    }
}

/// Raw year/month/day selection; may be an impossible date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateValue {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
}

impl DateValue {
    pub fn get(&self, field: Field) -> Option<i32> {
        match field {
            Field::Year => self.year,
            Field::Month => self.month,
            Field::Day => self.day,
        }
    }

    pub fn set(&mut self, field: Field, value: Option<i32>) {
        match field {
            Field::Year => self.year = value,
            Field::Month => self.month = value,
            Field::Day => self.day = value,
        }
    }

    /// The calendar date, if the combination exists
    pub fn to_date(&self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month?).ok()?;
        let day = u32::try_from(self.day?).ok()?;
        NaiveDate::from_ymd_opt(self.year?, month, day)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: Some(date.year()),
            month: i32::try_from(date.month()).ok(),
            day: i32::try_from(date.day()).ok(),
        }
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn part(value: Option<i32>, width: usize) -> String {
            value.map_or_else(|| "?".repeat(width), |v| format!("{:0width$}", v))
        }
        write!(
            f,
            "{}-{}-{}",
            part(self.year, 4),
            part(self.month, 2),
            part(self.day, 2)
        )
    }
}

/// Last value reported by each field's slot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateModel {
    value: DateValue,
}

impl DateModel {
    pub fn new(value: DateValue) -> Self {
        Self { value }
    }

    pub fn keys(&self) -> [Field; 3] {
        Field::ALL
    }

    pub fn get(&self, field: Field) -> Option<i32> {
        self.value.get(field)
    }

    /// Store a field value; returns whether it changed
    pub fn set(&mut self, field: Field, value: Option<i32>) -> bool {
        if self.value.get(field) == value {
            return false;
        }
        self.value.set(field, value);
        true
    }

    pub fn value(&self) -> DateValue {
        self.value
    }
}
