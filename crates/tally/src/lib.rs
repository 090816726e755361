//! Tally - headless widgets for a subscription editor.
//!
//! This is the main crate; it re-exports `tally-core` and adds the widgets
//! and form models:
//!
//! - [`DateSelectionWidget`]: a modal date picker that bridges to the native
//!   spinner on iOS and drives month/day/year wheels everywhere else
//! - [`widget::widgets::SelectionList`] and [`widget::widgets::AmountInput`]:
//!   the other modals of the edit form
//! - [`form::SubscriptionForm`]: the edit form's state
//!
//! Nothing here draws. Hosts feed input in, read state out, and listen to
//! signals.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use tally::prelude::*;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 4, 12).unwrap();
//! let mut picker = DateSelectionWidget::new(HostPlatform::Android, today, &PickerConfig::default());
//!
//! picker.open(Some(SelectedDate::new(2025, 0, 31)));
//! picker.layout_complete();
//!
//! // The user spins the month wheel to February.
//! picker.handle_input(PresenterInput::wheel(
//!     DateField::Month,
//!     WheelGesture::MomentumEnd { offset: 40.0 },
//! ));
//! assert_eq!(picker.confirm(), NaiveDate::from_ymd_opt(2025, 2, 28));
//! ```

pub use tally_core::*;

pub mod config;
pub mod error;
pub mod form;
pub mod platform;
pub mod prelude;
pub mod widget;

pub use config::{KineticConfig, MAX_YEAR_SPAN, PickerConfig};
pub use error::{Result, TallyError};
pub use platform::{HostPlatform, PresenterKind};
pub use widget::widgets::DateSelectionWidget;
