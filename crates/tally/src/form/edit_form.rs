//! State of the subscription edit screen.

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;
use tally_core::logging::targets;

use super::amount::{ZERO_AMOUNT, format_currency, parse_amount};
use super::format::format_date;
use super::subscription::{
    App, Category, Frequency, RemindMe, Subscription, app_catalog, category_catalog,
};
use crate::config::PickerConfig;
use crate::platform::HostPlatform;
use crate::widget::widgets::{AmountInput, DateSelectionWidget, SelectedDate, SelectionList};

/// Start date of a fresh form.
pub const DEFAULT_START_DATE: SelectedDate = SelectedDate::new(2025, 3, 12);

/// Header text when no app is chosen.
pub const CHOOSE_AN_APP: &str = "Choose an app";

/// The summary card at the top of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormHeader {
    /// App name, or a prompt to choose one.
    pub title: String,
    /// Formatted amount; always `$0.00` until an app is chosen.
    pub amount: String,
    /// Icon for the chosen app.
    pub icon_name: Option<String>,
}

/// Values the form edits. Shared with the slots connected to the modals.
#[derive(Debug, Clone)]
struct FormFields {
    app: Option<App>,
    amount: String,
    category: Option<Category>,
    start_date: NaiveDate,
    frequency: Frequency,
    remind_me: RemindMe,
    active: bool,
}

/// The subscription edit form and the modals it drives.
///
/// The form owns every modal. Each `open_*` method shows one with the
/// form's current value marked. The form listens to each modal's result
/// signal, so a modal driven directly (through its public field) updates the
/// form just like the matching `choose_*` or confirm method.
#[derive(Debug)]
pub struct SubscriptionForm {
    fields: Arc<Mutex<FormFields>>,

    /// App chooser, with search.
    pub app_list: SelectionList<App>,
    /// Category chooser.
    pub category_list: SelectionList<Category>,
    /// Billing frequency chooser.
    pub frequency_list: SelectionList<Frequency>,
    /// Reminder chooser.
    pub remind_me_list: SelectionList<RemindMe>,
    /// Start date picker.
    pub date_picker: DateSelectionWidget,
    /// Amount entry.
    pub amount_input: AmountInput,
}

impl SubscriptionForm {
    /// Create a blank form.
    pub fn new(platform: HostPlatform, today: NaiveDate, config: &PickerConfig) -> Self {
        let fields = FormFields {
            app: None,
            amount: "0.00".to_string(),
            category: None,
            start_date: DEFAULT_START_DATE.to_naive().unwrap_or(today),
            frequency: Frequency::default(),
            remind_me: RemindMe::default(),
            active: true,
        };
        let form = Self {
            fields: Arc::new(Mutex::new(fields)),
            app_list: SelectionList::new("App", app_catalog())
                .with_search()
                .with_empty_text("No apps found"),
            category_list: SelectionList::new("Category", category_catalog())
                .with_empty_text("No categories found"),
            frequency_list: SelectionList::new("Frequency", Frequency::ALL.to_vec()),
            remind_me_list: SelectionList::new("Remind Me", RemindMe::ALL.to_vec()),
            date_picker: DateSelectionWidget::new(platform, today, config),
            amount_input: AmountInput::new(),
        };
        form.connect_modals();
        form
    }

    fn connect_modals(&self) {
        let fields = Arc::clone(&self.fields);
        self.app_list.item_selected.connect(move |app: &App| {
            tracing::debug!(target: targets::FORM, id = %app.id, name = %app.name, "app chosen");
            fields.lock().app = Some(app.clone());
        });

        let fields = Arc::clone(&self.fields);
        self.category_list.item_selected.connect(move |category: &Category| {
            tracing::debug!(target: targets::FORM, id = %category.id, "category chosen");
            fields.lock().category = Some(category.clone());
        });

        let fields = Arc::clone(&self.fields);
        self.frequency_list.item_selected.connect(move |&frequency| {
            fields.lock().frequency = frequency;
        });

        let fields = Arc::clone(&self.fields);
        self.remind_me_list.item_selected.connect(move |&remind_me| {
            fields.lock().remind_me = remind_me;
        });

        let fields = Arc::clone(&self.fields);
        self.date_picker.date_selected.connect(move |&date| {
            tracing::debug!(target: targets::FORM, %date, "start date chosen");
            fields.lock().start_date = date;
        });

        let fields = Arc::clone(&self.fields);
        self.amount_input.amount_changed.connect(move |text: &String| {
            fields.lock().amount = text.clone();
        });
    }

    // =========================================================================
    // Fields
    // =========================================================================

    /// The chosen app, if any.
    pub fn app(&self) -> Option<App> {
        self.fields.lock().app.clone()
    }

    /// The amount as typed (sanitized).
    pub fn amount_text(&self) -> String {
        self.fields.lock().amount.clone()
    }

    /// The amount formatted as dollars.
    pub fn amount_display(&self) -> String {
        format_currency(&self.fields.lock().amount)
    }

    /// The chosen category, if any.
    pub fn category(&self) -> Option<Category> {
        self.fields.lock().category.clone()
    }

    /// The first billing date.
    pub fn start_date(&self) -> NaiveDate {
        self.fields.lock().start_date
    }

    /// The start date formatted for display.
    pub fn start_date_display(&self) -> String {
        format_date(self.start_date())
    }

    /// How often the subscription bills.
    pub fn frequency(&self) -> Frequency {
        self.fields.lock().frequency
    }

    /// When to remind before a bill.
    pub fn remind_me(&self) -> RemindMe {
        self.fields.lock().remind_me
    }

    /// Whether the subscription is active.
    pub fn is_active(&self) -> bool {
        self.fields.lock().active
    }

    /// Set whether the subscription is active.
    pub fn set_active(&mut self, active: bool) {
        self.fields.lock().active = active;
    }

    /// Flip the active switch.
    pub fn toggle_active(&mut self) {
        let mut fields = self.fields.lock();
        fields.active = !fields.active;
    }

    /// The summary card contents.
    pub fn header(&self) -> FormHeader {
        let fields = self.fields.lock();
        match &fields.app {
            Some(app) => FormHeader {
                title: app.name.clone(),
                amount: format_currency(&fields.amount),
                icon_name: app.icon_name.clone(),
            },
            None => FormHeader {
                title: CHOOSE_AN_APP.to_string(),
                amount: ZERO_AMOUNT.to_string(),
                icon_name: None,
            },
        }
    }

    // =========================================================================
    // Modals
    // =========================================================================

    /// Show the app list with the current app marked.
    pub fn open_app_list(&mut self) {
        let app = self.app();
        self.app_list.open(app.as_ref());
    }

    /// Pick the app at `index` among the visible (searched) apps.
    pub fn choose_app(&mut self, index: usize) -> Option<App> {
        self.app_list.select(index)
    }

    /// Show the category list with the current category marked.
    pub fn open_category_list(&mut self) {
        let category = self.category();
        self.category_list.open(category.as_ref());
    }

    /// Pick the category at `index`.
    pub fn choose_category(&mut self, index: usize) -> Option<Category> {
        self.category_list.select(index)
    }

    /// Show the frequency list with the current frequency marked.
    pub fn open_frequency_list(&mut self) {
        let frequency = self.frequency();
        self.frequency_list.open(Some(&frequency));
    }

    /// Pick the frequency at `index`.
    pub fn choose_frequency(&mut self, index: usize) -> Option<Frequency> {
        self.frequency_list.select(index)
    }

    /// Show the reminder list with the current reminder marked.
    pub fn open_remind_me_list(&mut self) {
        let remind_me = self.remind_me();
        self.remind_me_list.open(Some(&remind_me));
    }

    /// Pick the reminder at `index`.
    pub fn choose_remind_me(&mut self, index: usize) -> Option<RemindMe> {
        self.remind_me_list.select(index)
    }

    /// Show the date picker on the current start date.
    pub fn open_date_picker(&mut self) {
        let start_date = self.start_date();
        self.date_picker
            .open(Some(SelectedDate::from_naive(start_date)));
    }

    /// Confirm the date picker; its date becomes the start date.
    pub fn confirm_date(&mut self) -> Option<NaiveDate> {
        self.date_picker.confirm()
    }

    /// Show the amount input on the current amount.
    pub fn open_amount_input(&mut self) {
        let amount = self.amount_text();
        self.amount_input.open(&amount);
    }

    /// Type into the amount input. The form tracks every edit.
    pub fn edit_amount(&mut self, typed: &str) {
        self.amount_input.set_text(typed);
    }

    /// Close the amount input, keeping the last edit.
    pub fn close_amount_input(&mut self) {
        self.amount_input.done();
    }

    /// Build the record the form describes.
    ///
    /// An amount with no readable number becomes zero.
    pub fn to_subscription(&self, id: impl Into<String>) -> Subscription {
        let fields = self.fields.lock().clone();
        let amount = match parse_amount(&fields.amount) {
            Some(value) if value.is_finite() => value,
            _ => {
                tracing::debug!(target: targets::FORM, amount = %fields.amount, "unreadable amount saved as zero");
                0.0
            }
        };
        Subscription {
            id: id.into(),
            app: fields.app,
            amount,
            category: fields.category,
            start_date: fields.start_date,
            frequency: fields.frequency,
            remind_me: fields.remind_me,
            active: fields.active,
        }
    }
}
