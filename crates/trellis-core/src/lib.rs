//! Core systems for Trellis.
//!
//! This crate provides the foundational pieces the model/view layer is
//! built on:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Logging**: `tracing` targets, span names and a scoped perf span
//! - **Errors**: `SignalError`
//!
//! # Signal/Slot Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use trellis_core::Signal;
//!
//! let layout_changed = Signal::<()>::new();
//! let epochs = Arc::new(AtomicUsize::new(0));
//!
//! let counter = epochs.clone();
//! let conn_id = layout_changed.connect(move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! layout_changed.emit(());
//! layout_changed.disconnect(conn_id);
//! layout_changed.emit(());
//!
//! assert_eq!(epochs.load(Ordering::SeqCst), 1);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::SignalError;
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
