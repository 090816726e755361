//! The date value held by the picker.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use super::calendar::days_in_month;

/// One component of a [`SelectedDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    /// Zero-based month.
    Month,
    /// One-based day of month.
    Day,
    /// Calendar year.
    Year,
}

/// A calendar date decomposed into the fields the wheels edit.
///
/// `month` is zero-based (0 = January) and `day` one-based. A value built
/// field by field is not necessarily a real date; [`clamped`](Self::clamped)
/// restores the invariant `day <= days_in_month(month, year)` and
/// [`to_naive`](Self::to_naive) validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectedDate {
    /// Calendar year.
    pub year: i32,
    /// Zero-based month, 0..=11.
    pub month: u32,
    /// One-based day of month, 1..=31.
    pub day: u32,
}

impl SelectedDate {
    /// Build from raw fields without validation.
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Decompose a real date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
        }
    }

    /// The real date these fields describe, if they describe one.
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.checked_add(1)?, self.day)
    }

    /// Whether the fields form a real calendar date.
    pub fn is_valid(self) -> bool {
        self.to_naive().is_some()
    }

    /// Days in this value's month.
    pub fn days_in_month(self) -> u32 {
        days_in_month(self.month.min(11) as i32, self.year)
    }

    /// Force the fields into range: month into 0..=11 and day into
    /// `1..=days_in_month(month, year)`.
    pub fn clamped(self) -> Self {
        let month = self.month.min(11);
        let max_day = days_in_month(month as i32, self.year);
        Self {
            year: self.year,
            month,
            day: self.day.clamp(1, max_day),
        }
    }

    /// Replace one field. The result is not clamped.
    pub fn with_field(self, field: DateField, value: i32) -> Self {
        match field {
            DateField::Month => Self {
                month: value.max(0) as u32,
                ..self
            },
            DateField::Day => Self {
                day: value.max(0) as u32,
                ..self
            },
            DateField::Year => Self {
                year: value,
                ..self
            },
        }
    }
}

impl From<NaiveDate> for SelectedDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date)
    }
}

impl fmt::Display for SelectedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}
