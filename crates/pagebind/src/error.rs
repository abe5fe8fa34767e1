//! Error types for the adapter layer.

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Errors that can occur in the adapter layer.
///
/// Only construction can fail; everything after that is log-and-continue
/// through the trace sink.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The host context does not expose the binding capability.
    #[error(
        "host context does not support binding: a pager adapter can only be \
         constructed from a context that exposes a BindingHost"
    )]
    BindingUnsupported,
}
