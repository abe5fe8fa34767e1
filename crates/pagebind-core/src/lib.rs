//! Core systems for Pagebind.
//!
//! This crate provides the runtime primitives the adapter layer builds on:
//!
//! - **Signal/Slot System**: Type-safe change notification between a data
//!   source and its observers
//! - **Trace Sinks**: An explicit observability handle with defined severity
//!   levels, instead of a process-wide logging singleton
//! - **Thread Affinity**: Debug-build guards for single-threaded UI contracts
//!
//! # Signal/Slot Example
//!
//! ```
//! use pagebind_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let text_changed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! // Emit the signal
//! text_changed.emit("Hello, World!".to_string());
//!
//! // Disconnect when done
//! text_changed.disconnect(conn_id);
//! ```
//!
//! # Trace Sink Example
//!
//! ```
//! use pagebind_core::trace::{TraceLevel, TraceSink, TracingSink};
//!
//! let sink = TracingSink;
//! sink.trace(TraceLevel::Warning, "something advisory happened");
//! ```

pub mod signal;
pub mod thread_check;
pub mod trace;

pub use signal::{ConnectionId, Signal};
pub use thread_check::ThreadAffinity;
pub use trace::{TraceLevel, TraceSink, TracingSink};
