//! Logging facilities for Trellis.
//!
//! Trellis uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("trellis=debug")
//!     .init();
//! ```
//!
//! Every event is emitted under one of the [`targets`], so output can be
//! narrowed to a single subsystem with an `EnvFilter` directive.

/// Span names used throughout Trellis for tracing.
pub mod span_names {
    /// Layout change bracket (about-to-change .. changed).
    pub const LAYOUT_CHANGE: &str = "trellis::layout_change";
    /// View row-cache rebuild span.
    pub const VIEW_REBUILD: &str = "trellis::view_rebuild";
}

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "trellis_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "trellis_core::signal";
    /// Item store target.
    pub const STORE: &str = "trellis::store";
    /// Index model target.
    pub const MODEL: &str = "trellis::model";
    /// View consumer target.
    pub const VIEW: &str = "trellis::view";
    /// Command glue target.
    pub const COMMANDS: &str = "trellis::commands";
    /// Performance spans target.
    pub const PERF: &str = "trellis::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for timing an operation with a subscriber that records span
/// durations.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns, pinned to the core target.
#[macro_export]
macro_rules! trellis_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! trellis_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}
