//! Date picker configuration.
//!
//! [`PickerConfig`] carries the wheel geometry, the kinetic scrolling
//! constants and an optional presenter override. Every key is optional in
//! TOML; missing keys take the defaults below.
//!
//! ```toml
//! item_height = 40.0
//! visible_items = 5
//! year_span = 25
//! presenter = "wheels"
//!
//! [kinetic]
//! deceleration = 1500.0
//! min_velocity = 10.0
//! max_velocity = 5000.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tally_core::logging::targets;

use crate::error::{Result, TallyError};
use crate::platform::{HostPlatform, PresenterKind};

/// Largest accepted [`PickerConfig::year_span`].
pub const MAX_YEAR_SPAN: u32 = 1000;

/// Momentum constants for wheel scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KineticConfig {
    /// Deceleration in pixels/second².
    pub deceleration: f32,
    /// Below this speed (pixels/second) momentum ends and the wheel snaps.
    pub min_velocity: f32,
    /// Release velocities are capped to this speed (pixels/second).
    pub max_velocity: f32,
}

impl Default for KineticConfig {
    fn default() -> Self {
        Self {
            deceleration: 1500.0,
            min_velocity: 10.0,
            max_velocity: 5000.0,
        }
    }
}

/// Configuration for a [`DateSelectionWidget`](crate::DateSelectionWidget).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Height of one wheel row; wheels snap to multiples of it.
    pub item_height: f32,
    /// Rows visible at once in a wheel.
    pub visible_items: u32,
    /// Years shown on either side of the construction year, at most
    /// [`MAX_YEAR_SPAN`].
    pub year_span: u32,
    /// Overrides the platform's default presenter.
    pub presenter: Option<PresenterKind>,
    /// Momentum constants.
    pub kinetic: KineticConfig,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            item_height: 40.0,
            visible_items: 5,
            year_span: 25,
            presenter: None,
            kinetic: KineticConfig::default(),
        }
    }
}

impl PickerConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| TallyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::DATE_PICKER, path = %path.display(), "loaded picker config");
        Ok(config)
    }

    /// Reject values the wheels cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.item_height > 0.0 && self.item_height.is_finite()) {
            return Err(TallyError::config("item_height", "must be a positive number"));
        }
        if self.visible_items == 0 {
            return Err(TallyError::config("visible_items", "must be at least 1"));
        }
        if self.year_span > MAX_YEAR_SPAN {
            return Err(TallyError::config("year_span", "must be at most 1000"));
        }
        let kinetic = &self.kinetic;
        if !(kinetic.deceleration > 0.0 && kinetic.deceleration.is_finite()) {
            return Err(TallyError::config("kinetic.deceleration", "must be a positive number"));
        }
        if !(kinetic.min_velocity > 0.0 && kinetic.min_velocity.is_finite()) {
            return Err(TallyError::config("kinetic.min_velocity", "must be a positive number"));
        }
        if !(kinetic.max_velocity >= kinetic.min_velocity && kinetic.max_velocity.is_finite()) {
            return Err(TallyError::config(
                "kinetic.max_velocity",
                "must be finite and not below min_velocity",
            ));
        }
        Ok(())
    }

    /// The presenter to use on `platform`, honouring the override.
    pub fn presenter_for(&self, platform: HostPlatform) -> PresenterKind {
        self.presenter
            .unwrap_or_else(|| platform.default_presenter())
    }

    /// Total wheel height in pixels.
    pub fn wheel_height(&self) -> f32 {
        self.item_height * self.visible_items as f32
    }

    /// Padding above the first and below the last row, so that the first and
    /// last items can rest in the centre selection band.
    pub fn wheel_padding(&self) -> f32 {
        self.item_height * (self.visible_items / 2) as f32
    }

    /// Set the row height using builder pattern.
    pub fn with_item_height(mut self, item_height: f32) -> Self {
        self.item_height = item_height;
        self
    }

    /// Force a presenter using builder pattern.
    pub fn with_presenter(mut self, presenter: PresenterKind) -> Self {
        self.presenter = Some(presenter);
        self
    }
}
