//! The capability set shared by both date presenters.

use std::any::Any;

use chrono::NaiveDate;
use tally_core::DeferredQueue;

use super::native::NativeDateChange;
use super::value::{DateField, SelectedDate};
use crate::platform::PresenterKind;
use crate::widget::widgets::wheel::WheelGesture;

/// Host input routed to the active presenter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PresenterInput {
    /// A gesture on one of the three wheels.
    Wheel {
        /// Which wheel was touched.
        field: DateField,
        /// What happened.
        gesture: WheelGesture,
    },
    /// The native date control reported a new value.
    NativeChanged(NativeDateChange),
}

impl PresenterInput {
    /// Shorthand for a wheel gesture.
    pub fn wheel(field: DateField, gesture: WheelGesture) -> Self {
        Self::Wheel { field, gesture }
    }
}

/// A user selection reported by a presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSettled {
    /// One wheel settled. `value` is the field value, not the wheel index:
    /// a zero-based month, a one-based day or a year.
    Field {
        /// The field the wheel edits.
        field: DateField,
        /// The settled value.
        value: i32,
    },
    /// The native control produced a whole date.
    Date(NaiveDate),
}

/// A deferred request to rest one wheel on an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelSync {
    /// The wheel to move.
    pub field: DateField,
    /// Target index; clamped by the wheel when applied.
    pub index: usize,
}

/// A date presenter: the platform half of a date picker.
///
/// Presenters never decide the picker's value. They show the value they are
/// given and report what the user settled on; the widget clamps and stores
/// it and hands corrections back through [`reposition`](Self::reposition).
pub trait DatePresenter: Send {
    /// Which variant this is.
    fn kind(&self) -> PresenterKind;

    /// Show `date` as the picker opens, without reporting a selection.
    ///
    /// Position changes that must wait for the host's layout pass are posted
    /// to `sync`; the widget delivers them later through
    /// [`apply_sync`](Self::apply_sync).
    fn present_date(&mut self, date: SelectedDate, sync: &mut DeferredQueue<WheelSync>);

    /// Apply one deferred position change.
    fn apply_sync(&mut self, sync: WheelSync);

    /// Show a corrected `date` immediately, without reporting a selection.
    fn reposition(&mut self, date: SelectedDate);

    /// Handle one host input, returning a selection when the user settles.
    fn handle_input(&mut self, input: PresenterInput) -> Option<DateSettled>;

    /// Get this as Any for downcasting.
    fn as_any(&self) -> &dyn Any;
}
