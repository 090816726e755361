//! Prelude module for Tally.
//!
//! ```
//! use tally::prelude::*;
//! ```

// ============================================================================
// Signals
// ============================================================================

pub use crate::signal::{ConnectionId, Signal};

// ============================================================================
// Configuration and Platform
// ============================================================================

pub use crate::config::{KineticConfig, PickerConfig};
pub use crate::error::TallyError;
pub use crate::platform::{HostPlatform, PresenterKind};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{
    AmountInput, DateField, DateSelectionWidget, NativeDateChange, PresenterInput, Selectable,
    SelectedDate, SelectionList, Wheel, WheelGesture, WheelPhase,
};

// ============================================================================
// Form
// ============================================================================

pub use crate::form::{Frequency, RemindMe, Subscription, SubscriptionForm};
