//! Standard widgets for Tally.
//!
//! - [`DateSelectionWidget`]: Modal date picker with native and wheel presenters
//! - [`Wheel`]: Snapping scroll wheel
//! - [`SelectionList`]: Modal single-choice list with optional search
//! - [`AmountInput`]: Modal currency amount entry

mod amount_input;
mod date_picker;
mod selection_list;
mod wheel;

pub use amount_input::AmountInput;
pub use date_picker::{
    DateField, DatePresenter, DateSelectionWidget, DateSettled, MONTH_NAMES, NativeDateChange,
    NativeSpinnerPresenter, PresenterInput, SelectedDate, WheelIndices, WheelPresenter, WheelSync,
    YearRange, days_in_month, is_leap_year,
};
pub use selection_list::{DEFAULT_EMPTY_TEXT, Selectable, SelectionList};
pub use wheel::{Wheel, WheelGesture, WheelPhase};
