//! Core systems for Tally.
//!
//! This crate provides the foundational pieces the Tally widgets are built on:
//!
//! - **Signal/Slot System**: Type-safe notification of widget outputs
//! - **Deferred Queue**: Messages held until the host finishes a layout pass
//! - **Logging**: `tracing` targets and helpers
//!
//! # Signal/Slot Example
//!
//! ```
//! use tally_core::Signal;
//!
//! let closed = Signal::<()>::new();
//! let conn_id = closed.connect(|_| println!("closed"));
//! closed.emit(());
//! closed.disconnect(conn_id);
//! ```
//!
//! # Deferred Queue Example
//!
//! ```
//! use tally_core::DeferredQueue;
//!
//! let mut queue = DeferredQueue::new();
//! queue.post("scroll month wheel");
//! queue.post("scroll day wheel");
//!
//! // After the host's render pass:
//! let handled = queue.process_all(|msg| println!("{msg}"));
//! assert_eq!(handled, 2);
//! ```

pub mod deferred;
pub mod logging;
pub mod signal;

pub use deferred::{DeferredQueue, TaskId};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal, SignalEmitter};
