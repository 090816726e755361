//! Subscription form models.
//!
//! - [`SubscriptionForm`]: the edit screen's field state and modals
//! - [`Subscription`], [`App`], [`Category`], [`Frequency`], [`RemindMe`]:
//!   the record and its options
//! - Amount sanitizing and currency/date display formatting

mod amount;
mod edit_form;
mod format;
mod subscription;

pub use amount::{ZERO_AMOUNT, format_currency, format_dollars, parse_amount, sanitize_amount};
pub use edit_form::{CHOOSE_AN_APP, DEFAULT_START_DATE, FormHeader, SubscriptionForm};
pub use format::format_date;
pub use subscription::{
    App, Category, Frequency, RemindMe, Subscription, app_catalog, category_catalog,
};
