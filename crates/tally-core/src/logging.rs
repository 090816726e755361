//! Logging facilities for Tally.
//!
//! Tally uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("tally=debug,tally_core=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "tally_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "tally_core::signal";
    /// Post-layout queue target.
    pub const DEFERRED: &str = "tally_core::deferred";
    /// Date selection widget target.
    pub const DATE_PICKER: &str = "tally::date_picker";
    /// Scroll wheel target.
    pub const WHEEL: &str = "tally::wheel";
    /// Selection list target.
    pub const SELECTION: &str = "tally::selection";
    /// Subscription form target.
    pub const FORM: &str = "tally::form";
    /// Timing spans opened by [`PerfSpan`](super::PerfSpan).
    pub const PERF: &str = "tally::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for tracking the duration of an operation.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
