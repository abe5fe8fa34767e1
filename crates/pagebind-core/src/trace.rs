//! Trace sinks for Pagebind.
//!
//! Failure signaling in the adapter layer is local: advisory and recoverable
//! conditions are reported through an explicit [`TraceSink`] handle configured
//! at construction, never through a process-wide singleton. The default sink,
//! [`TracingSink`], forwards to the `tracing` crate so applications that
//! already install a `tracing` subscriber get adapter diagnostics for free.
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "pagebind_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "pagebind_core::signal";
    /// Trace sink target (used by [`TracingSink`](super::TracingSink)).
    pub const TRACE: &str = "pagebind_core::trace";
}

/// Severity of a trace event.
///
/// Only the two levels the adapter layer actually reports are defined:
/// advisory conditions continue normally, recoverable conditions produce an
/// empty result the caller must handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceLevel {
    /// Advisory condition. Operation continues normally.
    Warning,
    /// Recoverable failure. Operation produced no result.
    Error,
}

/// An explicit observability handle.
///
/// Components report their warning- and error-level conditions through a
/// `TraceSink` supplied (or defaulted) at construction. Tests typically
/// install a capturing sink to assert on the reported conditions.
pub trait TraceSink: Send + Sync {
    /// Report a trace event at the given severity.
    fn trace(&self, level: TraceLevel, message: &str);
}

/// The default [`TraceSink`], forwarding to the `tracing` crate.
///
/// Warning maps to `tracing::warn!`, Error to `tracing::error!`, both with
/// the stable target [`targets::TRACE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn trace(&self, level: TraceLevel, message: &str) {
        match level {
            TraceLevel::Warning => tracing::warn!(target: "pagebind_core::trace", "{message}"),
            TraceLevel::Error => tracing::error!(target: "pagebind_core::trace", "{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Default)]
    struct CaptureSink {
        events: Mutex<Vec<(TraceLevel, String)>>,
    }

    impl TraceSink for CaptureSink {
        fn trace(&self, level: TraceLevel, message: &str) {
            self.events.lock().push((level, message.to_string()));
        }
    }

    #[test]
    fn test_capture_sink_records_levels() {
        let sink = Arc::new(CaptureSink::default());
        sink.trace(TraceLevel::Warning, "advisory");
        sink.trace(TraceLevel::Error, "failed");

        let events = sink.events.lock();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], (TraceLevel::Warning, "advisory".to_string()));
        assert_eq!(events[1], (TraceLevel::Error, "failed".to_string()));
    }

    #[test]
    fn test_tracing_sink_does_not_panic() {
        // No subscriber installed; events are discarded.
        let sink = TracingSink;
        sink.trace(TraceLevel::Warning, "warning without subscriber");
        sink.trace(TraceLevel::Error, "error without subscriber");
    }
}
