//! DateSelectionWidget: a modal date picker with per-platform presenters.
//!
//! The widget owns the picked value and delegates input to one of two
//! presenters, chosen once at construction:
//!
//! - [`NativeSpinnerPresenter`] bridges to the host's native date control
//!   (iOS).
//! - [`WheelPresenter`] drives three snapping wheels: month, day, year
//!   (everywhere else).
//!
//! Whenever a month or year change leaves the day past the end of the month,
//! the day is clamped to the month's last day and the day wheel is moved
//! there silently, before the next input is handled.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use tally::{DateSelectionWidget, HostPlatform, PickerConfig};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 4, 12).unwrap();
//! let mut picker = DateSelectionWidget::new(HostPlatform::Android, today, &PickerConfig::default());
//!
//! picker.date_selected.connect(|date| {
//!     println!("Start date: {}", date);
//! });
//!
//! picker.open(None);
//! picker.layout_complete();
//! assert_eq!(picker.confirm(), Some(today));
//! ```

mod calendar;
mod native;
mod presenter;
mod value;
mod wheels;

pub use calendar::{MONTH_NAMES, YearRange, days_in_month, is_leap_year};
pub use native::{NativeDateChange, NativeSpinnerPresenter};
pub use presenter::{DatePresenter, DateSettled, PresenterInput, WheelSync};
pub use value::{DateField, SelectedDate};
pub use wheels::{WheelIndices, WheelPresenter};

use chrono::{Datelike, NaiveDate};
use tally_core::{DeferredQueue, PerfSpan, Signal};
use tally_core::logging::targets;

use crate::config::{MAX_YEAR_SPAN, PickerConfig};
use crate::platform::{HostPlatform, PresenterKind};

/// A modal date picker.
///
/// # Signals
///
/// - `date_selected(NaiveDate)`: Emitted once per confirm with the picked date
/// - `closed()`: Emitted whenever the picker closes, confirmed or dismissed
pub struct DateSelectionWidget {
    /// The platform half of the picker.
    presenter: Box<dyn DatePresenter>,
    /// The date used when nothing else is available.
    today: NaiveDate,
    /// The candidate date.
    value: SelectedDate,
    /// Whether the picker is showing.
    open: bool,
    /// Wheel positions waiting for the host's layout pass.
    pending: DeferredQueue<WheelSync>,

    /// Signal emitted when a date is confirmed.
    pub date_selected: Signal<NaiveDate>,
    /// Signal emitted when the picker closes.
    pub closed: Signal<()>,
}

impl DateSelectionWidget {
    /// Create a closed picker for `platform`.
    ///
    /// `today` seeds the default value and centres the year range, which is
    /// fixed for the life of the widget.
    pub fn new(platform: HostPlatform, today: NaiveDate, config: &PickerConfig) -> Self {
        let kind = config.presenter_for(platform);
        tracing::debug!(target: targets::DATE_PICKER, ?platform, ?kind, "creating date picker");

        let presenter: Box<dyn DatePresenter> = match kind {
            PresenterKind::NativeSpinner => Box::new(NativeSpinnerPresenter::new(today)),
            PresenterKind::Wheels => Box::new(WheelPresenter::new(
                SelectedDate::from_naive(today),
                YearRange::centered_on(today.year(), config.year_span.min(MAX_YEAR_SPAN)),
                config,
            )),
        };
        Self::with_presenter(presenter, today)
    }

    /// Create a closed picker around a custom presenter.
    pub fn with_presenter(presenter: Box<dyn DatePresenter>, today: NaiveDate) -> Self {
        Self {
            presenter,
            today,
            value: SelectedDate::from_naive(today),
            open: false,
            pending: DeferredQueue::new(),
            date_selected: Signal::new(),
            closed: Signal::new(),
        }
    }

    // =========================================================================
    // State Access
    // =========================================================================

    /// Which presenter variant is in use.
    pub fn presenter_kind(&self) -> PresenterKind {
        self.presenter.kind()
    }

    /// The presenter, if it is a `P`.
    pub fn presenter<P: DatePresenter + 'static>(&self) -> Option<&P> {
        self.presenter.as_any().downcast_ref::<P>()
    }

    /// The current candidate date.
    pub fn value(&self) -> SelectedDate {
        self.value
    }

    /// The fallback date.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Update the fallback date. The year range is not rebuilt.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    /// Whether the picker is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether wheel positions are still waiting for a layout pass.
    pub fn has_pending_sync(&self) -> bool {
        self.pending.has_pending()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Show the picker with `initial`, or today when absent.
    ///
    /// Any in-progress edit from a previous session is discarded. Wheel
    /// positions are applied by the next [`layout_complete`](Self::layout_complete).
    pub fn open(&mut self, initial: Option<SelectedDate>) {
        let initial = initial.unwrap_or_else(|| SelectedDate::from_naive(self.today));
        let value = initial.clamped();
        if value != initial {
            tracing::debug!(target: targets::DATE_PICKER, %initial, %value, "clamped initial date");
        }

        self.value = value;
        self.open = true;
        self.pending.clear();
        self.presenter.present_date(value, &mut self.pending);
        tracing::debug!(target: targets::DATE_PICKER, %value, "opened");
    }

    /// Show or hide the picker, mirroring a host visibility flag.
    pub fn set_visible(&mut self, visible: bool, initial: Option<SelectedDate>) {
        match (visible, self.open) {
            (true, false) => self.open(initial),
            (false, true) => self.dismiss(),
            _ => {}
        }
    }

    /// Apply wheel positions posted before the host's render pass.
    ///
    /// Returns the number of positions applied.
    pub fn layout_complete(&mut self) -> usize {
        let _span = PerfSpan::new("date_picker.layout_complete");
        let presenter = &mut self.presenter;
        self.pending.process_all(|sync| presenter.apply_sync(sync))
    }

    /// Route one host input to the presenter.
    ///
    /// Returns `true` when the candidate date changed. Inputs are ignored
    /// while closed, and selections reported before the opening layout pass
    /// has repositioned every wheel are discarded.
    pub fn handle_input(&mut self, input: PresenterInput) -> bool {
        if !self.open {
            tracing::trace!(target: targets::DATE_PICKER, "picker closed, ignoring input");
            return false;
        }

        let Some(settled) = self.presenter.handle_input(input) else {
            return false;
        };

        if self.pending.has_pending() {
            tracing::debug!(
                target: targets::DATE_PICKER,
                pending = self.pending.pending_count(),
                "selection before layout sync, ignoring"
            );
            return false;
        }

        let next = match settled {
            DateSettled::Field { field, value } => {
                let raw = self.value.with_field(field, value);
                let next = raw.clamped();
                if next != raw {
                    tracing::debug!(target: targets::DATE_PICKER, %raw, %next, "clamped day");
                }
                if next != raw || field != DateField::Day {
                    self.presenter.reposition(next);
                }
                next
            }
            DateSettled::Date(date) => SelectedDate::from_naive(date),
        };

        let changed = next != self.value;
        self.value = next;
        changed
    }

    /// Confirm the candidate, emit it and close.
    ///
    /// An invalid candidate is replaced by today's date. Returns the emitted
    /// date, or `None` if the picker was not open.
    pub fn confirm(&mut self) -> Option<NaiveDate> {
        if !self.open {
            return None;
        }

        let date = match self.value.to_naive() {
            Some(date) => date,
            None => {
                tracing::warn!(
                    target: targets::DATE_PICKER,
                    value = %self.value,
                    today = %self.today,
                    "invalid candidate at confirm, using today"
                );
                self.today
            }
        };

        self.close();
        tracing::debug!(target: targets::DATE_PICKER, %date, "confirmed");
        self.date_selected.emit(date);
        self.closed.emit(());
        Some(date)
    }

    /// Close without emitting a selection.
    pub fn dismiss(&mut self) {
        if !self.open {
            return;
        }
        self.close();
        tracing::debug!(target: targets::DATE_PICKER, "dismissed");
        self.closed.emit(());
    }

    fn close(&mut self) {
        self.open = false;
        self.pending.clear();
    }
}

impl std::fmt::Debug for DateSelectionWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateSelectionWidget")
            .field("presenter", &self.presenter.kind())
            .field("today", &self.today)
            .field("value", &self.value)
            .field("open", &self.open)
            .field("pending", &self.pending.pending_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::widgets::wheel::WheelGesture;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn wheels_picker(today: NaiveDate) -> DateSelectionWidget {
        DateSelectionWidget::new(HostPlatform::Android, today, &PickerConfig::default())
    }

    fn settle(picker: &mut DateSelectionWidget, field: DateField, index: usize) -> bool {
        picker.handle_input(PresenterInput::wheel(
            field,
            WheelGesture::MomentumEnd {
                offset: index as f32 * 40.0,
            },
        ))
    }

    fn record(picker: &DateSelectionWidget) -> Arc<Mutex<Vec<NaiveDate>>> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        picker.date_selected.connect(move |&date| {
            received_clone.lock().push(date);
        });
        received
    }

    #[test]
    fn test_unvalidated_year_span_is_capped() {
        let config = PickerConfig {
            year_span: 1_500_000_000,
            ..PickerConfig::default()
        };
        let picker = DateSelectionWidget::new(HostPlatform::Android, date(2025, 4, 12), &config);
        let years = picker.presenter::<WheelPresenter>().unwrap().years();
        assert_eq!(years.first(), 2025 - MAX_YEAR_SPAN as i32);
        assert_eq!(years.len(), 2 * MAX_YEAR_SPAN as usize + 1);
    }

    #[test]
    fn test_presenter_selection() {
        let today = date(2025, 4, 12);
        let config = PickerConfig::default();

        let ios = DateSelectionWidget::new(HostPlatform::Ios, today, &config);
        assert_eq!(ios.presenter_kind(), PresenterKind::NativeSpinner);
        assert!(ios.presenter::<NativeSpinnerPresenter>().is_some());
        assert!(ios.presenter::<WheelPresenter>().is_none());

        let android = DateSelectionWidget::new(HostPlatform::Android, today, &config);
        assert_eq!(android.presenter_kind(), PresenterKind::Wheels);

        let forced = DateSelectionWidget::new(
            HostPlatform::Android,
            today,
            &config.clone().with_presenter(PresenterKind::NativeSpinner),
        );
        assert_eq!(forced.presenter_kind(), PresenterKind::NativeSpinner);
    }

    #[test]
    fn test_starts_closed() {
        let mut picker = wheels_picker(date(2025, 4, 12));
        assert!(!picker.is_open());
        assert_eq!(picker.confirm(), None);
        assert!(!settle(&mut picker, DateField::Month, 1));
    }

    #[test]
    fn test_open_posts_sync_for_every_wheel() {
        let mut picker = wheels_picker(date(2025, 4, 12));
        picker.open(Some(SelectedDate::new(2024, 0, 5)));
        assert!(picker.has_pending_sync());
        assert_eq!(picker.layout_complete(), 3);
        assert!(!picker.has_pending_sync());

        let wheels = picker.presenter::<WheelPresenter>().unwrap();
        assert_eq!(wheels.shown_date(), SelectedDate::new(2024, 0, 5));
    }

    #[test]
    fn test_settle_before_layout_is_discarded() {
        let mut picker = wheels_picker(date(2025, 4, 12));
        picker.open(None);

        assert!(!settle(&mut picker, DateField::Month, 6));
        assert_eq!(picker.value(), SelectedDate::new(2025, 3, 12));

        picker.layout_complete();
        let wheels = picker.presenter::<WheelPresenter>().unwrap();
        assert_eq!(wheels.indices().month, 3);

        assert!(settle(&mut picker, DateField::Month, 6));
        assert_eq!(picker.value(), SelectedDate::new(2025, 6, 12));
    }

    #[test]
    fn test_year_change_clamps_leap_day() {
        let mut picker = wheels_picker(date(2025, 4, 12));
        picker.open(Some(SelectedDate::new(2024, 1, 29)));
        picker.layout_complete();

        // 2025 is index 25 in a range centred on 2025.
        assert!(settle(&mut picker, DateField::Year, 25));
        assert_eq!(picker.value(), SelectedDate::new(2025, 1, 28));

        let wheels = picker.presenter::<WheelPresenter>().unwrap();
        assert_eq!(wheels.day_wheel().len(), 28);
        assert_eq!(wheels.indices().day, 27);
    }

    #[test]
    fn test_dismiss_emits_only_closed() {
        let mut picker = wheels_picker(date(2025, 4, 12));
        let received = record(&picker);
        let closed = Arc::new(Mutex::new(0));
        let closed_clone = closed.clone();
        picker.closed.connect(move |_| *closed_clone.lock() += 1);

        picker.open(None);
        picker.dismiss();
        picker.dismiss();

        assert!(received.lock().is_empty());
        assert_eq!(*closed.lock(), 1);
        assert!(!picker.is_open());
    }

    #[test]
    fn test_confirm_emits_then_closes() {
        let mut picker = wheels_picker(date(2025, 4, 12));
        let received = record(&picker);

        picker.open(Some(SelectedDate::new(2025, 11, 31)));
        picker.layout_complete();

        assert_eq!(picker.confirm(), Some(date(2025, 12, 31)));
        assert_eq!(*received.lock(), vec![date(2025, 12, 31)]);
        assert!(!picker.is_open());
        assert_eq!(picker.confirm(), None);
    }

    #[test]
    fn test_set_visible() {
        let mut picker = wheels_picker(date(2025, 4, 12));
        picker.set_visible(true, None);
        assert!(picker.is_open());
        picker.set_visible(false, None);
        assert!(!picker.is_open());
    }

    #[test]
    fn test_invalid_candidate_falls_back_to_today() {
        struct Stale;

        impl DatePresenter for Stale {
            fn kind(&self) -> PresenterKind {
                PresenterKind::Wheels
            }
            fn present_date(&mut self, _: SelectedDate, _: &mut DeferredQueue<WheelSync>) {}
            fn apply_sync(&mut self, _: WheelSync) {}
            fn reposition(&mut self, _: SelectedDate) {}
            fn handle_input(&mut self, _: PresenterInput) -> Option<DateSettled> {
                Some(DateSettled::Field {
                    field: DateField::Year,
                    value: i32::MAX,
                })
            }
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }

        let today = date(2025, 4, 12);
        let mut picker = DateSelectionWidget::with_presenter(Box::new(Stale), today);
        picker.open(None);
        picker.handle_input(PresenterInput::NativeChanged(NativeDateChange::invalid()));
        assert_eq!(picker.value().year, i32::MAX);
        assert_eq!(picker.confirm(), Some(today));
    }
}
