//! Host platform detection.
//!
//! The date picker picks its presenter once, at construction, from the host
//! platform. iOS hosts get the native spinner; everything else gets the
//! scrolling wheels.

use serde::{Deserialize, Serialize};

/// The platform the widgets are hosted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostPlatform {
    /// Apple iOS / iPadOS.
    Ios,
    /// Android.
    Android,
    /// Any desktop or unknown target.
    Desktop,
}

impl HostPlatform {
    /// Detect the platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "android") {
            Self::Android
        } else {
            Self::Desktop
        }
    }

    /// The date presenter this platform uses when nothing overrides it.
    pub fn default_presenter(self) -> PresenterKind {
        match self {
            Self::Ios => PresenterKind::NativeSpinner,
            Self::Android | Self::Desktop => PresenterKind::Wheels,
        }
    }
}

/// Which date presenter a picker uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenterKind {
    /// Host-provided native date control.
    NativeSpinner,
    /// Three scrollable wheels: month, day, year.
    Wheels,
}
