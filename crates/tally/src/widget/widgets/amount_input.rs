//! Modal numeric amount entry.
//!
//! The input mirrors the field it edits: opening it loads the current amount
//! text, every edit is sanitized to digits and one decimal point and reported
//! at once, and closing it only signals that editing finished.

use tally_core::Signal;
use tally_core::logging::targets;

use crate::form::{format_currency, sanitize_amount};

/// A modal text input for a currency amount.
///
/// # Signals
///
/// - `amount_changed(String)`: Emitted with the sanitized text after every edit
/// - `closed()`: Emitted when the input closes
pub struct AmountInput {
    text: String,
    open: bool,

    /// Signal emitted when the amount text changes.
    pub amount_changed: Signal<String>,
    /// Signal emitted when the input closes.
    pub closed: Signal<()>,
}

impl AmountInput {
    /// Create a closed input.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            open: false,
            amount_changed: Signal::new(),
            closed: Signal::new(),
        }
    }

    /// The sanitized text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text formatted as dollars.
    pub fn display_text(&self) -> String {
        format_currency(&self.text)
    }

    /// Whether the input is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the input holding `amount`.
    pub fn open(&mut self, amount: &str) {
        self.text = amount.to_string();
        self.open = true;
    }

    /// Replace the text with what the user typed. Returns the sanitized text.
    pub fn set_text(&mut self, typed: &str) -> &str {
        if !self.open {
            return &self.text;
        }
        let text = sanitize_amount(typed);
        if text != typed {
            tracing::trace!(target: targets::FORM, typed, %text, "sanitized amount");
        }
        self.text = text;
        self.amount_changed.emit(self.text.clone());
        &self.text
    }

    /// Finish editing.
    pub fn done(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.closed.emit(());
    }
}

impl Default for AmountInput {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AmountInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmountInput")
            .field("text", &self.text)
            .field("open", &self.open)
            .finish()
    }
}
