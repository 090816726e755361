//! Signal/slot system for Tally.
//!
//! Widgets expose their observable outputs as [`Signal`]s. A slot is any
//! closure connected to a signal; emitting the signal invokes every connected
//! slot, in connection order, on the emitting thread.
//!
//! All widget work happens on the host's UI thread, so there is no queued or
//! cross-thread delivery here. Slots are still required to be `Send + Sync`
//! so that widgets holding signals can be moved into shared host state.
//!
//! # Example
//!
//! ```
//! use tally_core::Signal;
//!
//! let date_picked = Signal::<String>::new();
//!
//! let conn_id = date_picked.connect(|date| {
//!     println!("Picked: {}", date);
//! });
//!
//! date_picked.emit("2025-04-12".to_string());
//! date_picked.disconnect(conn_id);
//! ```

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A connected slot and the order it was connected in.
struct Connection<Args> {
    seq: u64,
    slot: Slot<Args>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Sequence number for the next connection. Freed slotmap entries are
    /// reused, so iteration order alone does not reflect connection order.
    next_seq: AtomicU64,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            next_seq: AtomicU64::new(0),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.connections.lock().insert(Connection {
            seq,
            slot: Arc::new(slot),
        })
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// Slots are snapshotted before invocation, so a slot may connect or
    /// disconnect other slots on this signal without deadlocking.
    #[tracing::instrument(skip_all, target = "tally_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let mut connected: Vec<(u64, Slot<Args>)> = self
            .connections
            .lock()
            .values()
            .map(|c| (c.seq, c.slot.clone()))
            .collect();
        connected.sort_unstable_by_key(|(seq, _)| *seq);
        let slots: Vec<Slot<Args>> = connected.into_iter().map(|(_, slot)| slot).collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

/// Type-erased signal emitter trait for dynamic signal access.
pub trait SignalEmitter: Send + Sync {
    /// Disconnect a connection by ID.
    fn disconnect(&self, id: ConnectionId) -> bool;

    /// Disconnect all connections.
    fn disconnect_all(&self);

    /// Get the number of connections.
    fn connection_count(&self) -> usize;

    /// Set blocked state.
    fn set_blocked(&self, blocked: bool);

    /// Get this as Any for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<Args: Send + 'static> SignalEmitter for Signal<Args> {
    fn disconnect(&self, id: ConnectionId) -> bool {
        Signal::disconnect(self, id)
    }

    fn disconnect_all(&self) {
        Signal::disconnect_all(self);
    }

    fn connection_count(&self) -> usize {
        Signal::connection_count(self)
    }

    fn set_blocked(&self, blocked: bool) {
        Signal::set_blocked(self, blocked);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_connect_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(42);
        signal.emit(100);

        assert_eq!(*received.lock(), vec![42, 100]);
    }

    #[test]
    fn test_signal_disconnect() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        let conn_id = signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        assert!(signal.disconnect(conn_id));
        assert!(!signal.disconnect(conn_id));
        signal.emit(2);

        assert_eq!(*received.lock(), vec![1]);
    }

    #[test]
    fn test_signal_blocked() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        signal.set_blocked(true);
        signal.emit(2);
        signal.set_blocked(false);
        signal.emit(3);

        assert_eq!(*received.lock(), vec![1, 3]);
    }

    #[test]
    fn test_slots_run_in_connection_order() {
        let signal = Signal::<()>::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for n in 0..3 {
            let order_clone = order.clone();
            signal.connect(move |_| order_clone.lock().push(n));
        }

        signal.emit(());
        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn test_reconnect_after_disconnect_runs_last() {
        let signal = Signal::<()>::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let mut ids = Vec::new();
        for n in 0..3 {
            let order_clone = order.clone();
            ids.push(signal.connect(move |_| order_clone.lock().push(n)));
        }

        // The new slot lands in the entry freed by the first one.
        signal.disconnect(ids[0]);
        let order_clone = order.clone();
        signal.connect(move |_| order_clone.lock().push(3));

        signal.emit(());
        assert_eq!(*order.lock(), vec![1, 2, 3]);
    }

    #[test]
    fn test_slot_may_disconnect_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let weak = Arc::downgrade(&signal);

        signal.connect(move |_| {
            if let Some(signal) = weak.upgrade() {
                signal.disconnect_all();
            }
        });

        signal.emit(());
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_emitter_downcast() {
        let signal = Signal::<u8>::new();
        let emitter: &dyn SignalEmitter = &signal;
        assert!(emitter.as_any().downcast_ref::<Signal<u8>>().is_some());
        assert_eq!(emitter.connection_count(), 0);
    }
}
