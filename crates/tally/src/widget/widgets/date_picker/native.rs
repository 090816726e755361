//! Bridge to a host-provided native date control.
//!
//! The native control owns its own spinner UI and reports whole dates. This
//! presenter only keeps the last valid date it was shown or told about.

use std::any::Any;

use chrono::{DateTime, NaiveDate};
use tally_core::DeferredQueue;
use tally_core::logging::targets;

use super::presenter::{DatePresenter, DateSettled, PresenterInput, WheelSync};
use super::value::SelectedDate;
use crate::platform::PresenterKind;

/// A change notification from the native date control.
///
/// Hosts hand over whatever their control produced; anything that is not a
/// real calendar date becomes an invalid notification and is ignored by the
/// presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeDateChange(Option<NaiveDate>);

impl NativeDateChange {
    /// A notification carrying a real date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(Some(date))
    }

    /// A notification from components; `month` is one-based here, as native
    /// controls report it.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self(NaiveDate::from_ymd_opt(year, month, day))
    }

    /// A notification from a millisecond Unix timestamp, read as a UTC date.
    ///
    /// NaN, infinite and out-of-range timestamps are invalid.
    pub fn from_timestamp_millis(millis: f64) -> Self {
        if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
            return Self(None);
        }
        Self(DateTime::from_timestamp_millis(millis.trunc() as i64).map(|dt| dt.date_naive()))
    }

    /// A notification that carries no usable date.
    pub fn invalid() -> Self {
        Self(None)
    }

    /// The date, if the notification carried a real one.
    pub fn date(self) -> Option<NaiveDate> {
        self.0
    }
}

/// Presenter that delegates date entry to the platform's own spinner.
#[derive(Debug, Clone)]
pub struct NativeSpinnerPresenter {
    candidate: NaiveDate,
}

impl NativeSpinnerPresenter {
    /// Create a presenter showing `initial`.
    pub fn new(initial: NaiveDate) -> Self {
        Self { candidate: initial }
    }

    /// The date the native control currently shows.
    pub fn candidate(&self) -> NaiveDate {
        self.candidate
    }
}

impl DatePresenter for NativeSpinnerPresenter {
    fn kind(&self) -> PresenterKind {
        PresenterKind::NativeSpinner
    }

    fn present_date(&mut self, date: SelectedDate, _sync: &mut DeferredQueue<WheelSync>) {
        // The native control takes its initial value directly.
        self.reposition(date);
    }

    fn apply_sync(&mut self, _sync: WheelSync) {}

    fn reposition(&mut self, date: SelectedDate) {
        match date.clamped().to_naive() {
            Some(date) => self.candidate = date,
            None => {
                tracing::warn!(target: targets::DATE_PICKER, %date, "native spinner cannot show date");
            }
        }
    }

    fn handle_input(&mut self, input: PresenterInput) -> Option<DateSettled> {
        match input {
            PresenterInput::NativeChanged(change) => match change.date() {
                Some(date) => {
                    self.candidate = date;
                    Some(DateSettled::Date(date))
                }
                None => {
                    tracing::debug!(target: targets::DATE_PICKER, "ignoring invalid native date");
                    None
                }
            },
            PresenterInput::Wheel { field, .. } => {
                tracing::trace!(target: targets::DATE_PICKER, ?field, "native spinner has no wheels");
                None
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
