//! Three-wheel date presenter (month, day, year).

use std::any::Any;

use tally_core::DeferredQueue;
use tally_core::logging::targets;

use super::calendar::{MONTH_NAMES, YearRange, days_in_month};
use super::presenter::{DatePresenter, DateSettled, PresenterInput, WheelSync};
use super::value::{DateField, SelectedDate};
use crate::config::PickerConfig;
use crate::platform::PresenterKind;
use crate::widget::widgets::wheel::Wheel;

fn day_items(month: u32, year: i32) -> Vec<u32> {
    (1..=days_in_month(month as i32, year)).collect()
}

/// Wheel positions of a [`WheelPresenter`], by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelIndices {
    /// Month wheel index (the zero-based month).
    pub month: usize,
    /// Day wheel index (day - 1).
    pub day: usize,
    /// Year wheel index into the year range.
    pub year: usize,
}

/// Presenter built from three independent snapping wheels.
#[derive(Debug, Clone)]
pub struct WheelPresenter {
    month: Wheel<&'static str>,
    day: Wheel<u32>,
    year: Wheel<i32>,
    years: YearRange,
}

impl WheelPresenter {
    /// Create wheels for `initial`, offering the years in `years`.
    pub fn new(initial: SelectedDate, years: YearRange, config: &PickerConfig) -> Self {
        let initial = initial.clamped();
        let mut presenter = Self {
            month: Wheel::new(MONTH_NAMES.to_vec(), config.item_height, config.kinetic),
            day: Wheel::new(
                day_items(initial.month, initial.year),
                config.item_height,
                config.kinetic,
            ),
            year: Wheel::new(years.years(), config.item_height, config.kinetic),
            years,
        };
        presenter.reposition(initial);
        presenter
    }

    /// The month wheel.
    pub fn month_wheel(&self) -> &Wheel<&'static str> {
        &self.month
    }

    /// The day wheel.
    pub fn day_wheel(&self) -> &Wheel<u32> {
        &self.day
    }

    /// The year wheel.
    pub fn year_wheel(&self) -> &Wheel<i32> {
        &self.year
    }

    /// The years the year wheel offers.
    pub fn years(&self) -> &YearRange {
        &self.years
    }

    /// Where each wheel rests.
    pub fn indices(&self) -> WheelIndices {
        WheelIndices {
            month: self.month.selected_index(),
            day: self.day.selected_index(),
            year: self.year.selected_index(),
        }
    }

    /// The date the wheels currently show.
    pub fn shown_date(&self) -> SelectedDate {
        SelectedDate::new(
            self.years.year_at(self.year.selected_index()),
            self.month.selected_index() as u32,
            self.day.selected_index() as u32 + 1,
        )
    }

    fn targets(&self, date: SelectedDate) -> [WheelSync; 3] {
        let year_index = match self.years.index_of(date.year) {
            Some(index) => index,
            None => {
                tracing::debug!(
                    target: targets::DATE_PICKER,
                    year = date.year,
                    first = self.years.first(),
                    last = self.years.last(),
                    "year outside wheel range, resting on nearest bound"
                );
                self.years.nearest_index(date.year)
            }
        };
        [
            WheelSync {
                field: DateField::Month,
                index: date.month as usize,
            },
            WheelSync {
                field: DateField::Day,
                index: date.day.saturating_sub(1) as usize,
            },
            WheelSync {
                field: DateField::Year,
                index: year_index,
            },
        ]
    }

    /// Rebuild the day wheel so it lists exactly the days of `date`'s month.
    fn resize_days(&mut self, date: SelectedDate) {
        let count = days_in_month(date.month as i32, date.year) as usize;
        if self.day.len() != count {
            self.day.set_items(day_items(date.month, date.year));
        }
    }

    fn wheel_value(&self, field: DateField, index: usize) -> i32 {
        match field {
            DateField::Month => index as i32,
            DateField::Day => index as i32 + 1,
            DateField::Year => self.years.year_at(index),
        }
    }
}

impl DatePresenter for WheelPresenter {
    fn kind(&self) -> PresenterKind {
        PresenterKind::Wheels
    }

    fn present_date(&mut self, date: SelectedDate, sync: &mut DeferredQueue<WheelSync>) {
        let date = date.clamped();
        self.resize_days(date);
        for target in self.targets(date) {
            sync.post(target);
        }
    }

    fn apply_sync(&mut self, sync: WheelSync) {
        match sync.field {
            DateField::Month => self.month.jump_to_index(sync.index),
            DateField::Day => self.day.jump_to_index(sync.index),
            DateField::Year => self.year.jump_to_index(sync.index),
        }
    }

    fn reposition(&mut self, date: SelectedDate) {
        let date = date.clamped();
        self.resize_days(date);
        for target in self.targets(date) {
            self.apply_sync(target);
        }
    }

    fn handle_input(&mut self, input: PresenterInput) -> Option<DateSettled> {
        let PresenterInput::Wheel { field, gesture } = input else {
            tracing::trace!(target: targets::DATE_PICKER, "wheel presenter ignores native input");
            return None;
        };
        let index = match field {
            DateField::Month => self.month.handle(gesture),
            DateField::Day => self.day.handle(gesture),
            DateField::Year => self.year.handle(gesture),
        }?;
        Some(DateSettled::Field {
            field,
            value: self.wheel_value(field, index),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
