//! Error types for Tally.
//!
//! Widget operations recover from bad input locally and never fail. The
//! errors here come from loading and validating configuration.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Tally operations.
#[derive(Debug, Error)]
pub enum TallyError {
    /// A configuration value is out of its valid range.
    #[error("invalid configuration: {field} {reason}")]
    Config {
        /// The offending key.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// Reading a configuration file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for [`PickerConfig`](crate::PickerConfig).
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

impl TallyError {
    pub(crate) fn config(field: &'static str, reason: &'static str) -> Self {
        Self::Config { field, reason }
    }
}

/// A specialized Result type for Tally operations.
pub type Result<T> = std::result::Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = TallyError::config("item_height", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "invalid configuration: item_height must be greater than zero"
        );
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error as _;

        let err = TallyError::Io {
            path: PathBuf::from("picker.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().starts_with("failed to read picker.toml"));
        assert!(err.source().is_some());
    }
}
