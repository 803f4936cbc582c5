//! Signal/slot system for Trellis.
//!
//! Signals are the notification half of the model/view contract: a model
//! emits a signal when its layout is about to change and again once it has
//! changed, and every connected slot (callback) is invoked in connection
//! order, synchronously, on the emitting thread.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The signal type for emitting notifications
//! - [`ConnectionId`] - Identifier returned when connecting a slot
//! - [`ConnectionGuard`] - Scoped connection that disconnects when dropped
//!
//! # Re-entrancy
//!
//! The set of slots is snapshotted before invocation and the connection
//! table lock is released while slots run. A slot may therefore connect,
//! disconnect, or query the object that emitted the signal. Changes to the
//! connection table made during an emission take effect on the next one.
//!
//! # Example
//!
//! ```
//! use trellis_core::Signal;
//!
//! let layout_changed = Signal::<()>::new();
//!
//! let conn_id = layout_changed.connect(|_| {
//!     println!("re-query the model");
//! });
//!
//! layout_changed.emit(());
//! layout_changed.disconnect(conn_id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::SignalError;
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    /// The ID stays valid until the connection is disconnected or the
    /// signal is dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A connected slot plus its position in connection order.
struct Connection<Args> {
    /// Monotonic connect counter; slotmap keys are reused after removal.
    seq: u64,
    slot: Slot<Args>,
}

struct ConnectionTable<Args> {
    slots: SlotMap<ConnectionId, Connection<Args>>,
    next_seq: u64,
}

/// A type-safe signal that can have multiple connected slots.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple like `(String, usize)` for multiple arguments.
///
/// # Thread Safety
///
/// `Signal<Args>` is `Send + Sync`; slots must be `Send + Sync` as well.
/// Delivery is always direct: slots run on whichever thread calls
/// [`emit`](Self::emit).
pub struct Signal<Args> {
    connections: Mutex<ConnectionTable<Args>>,
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
            connections: Mutex::new(ConnectionTable {
                slots: SlotMap::with_key(),
                next_seq: 0,
            }),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use trellis_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let _id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Hello".to_string());
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let mut table = self.connections.lock();
        let seq = table.next_seq;
        table.next_seq += 1;
        table.slots.insert(Connection {
            seq,
            slot: Arc::new(slot),
        })
    }

    /// Connect a slot that is disconnected when the returned guard is dropped.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use trellis_core::Signal;
    ///
    /// let signal = Signal::<usize>::new();
    /// let total = Arc::new(AtomicUsize::new(0));
    /// {
    ///     let total = total.clone();
    ///     let _guard = signal.connect_scoped(move |&n| {
    ///         total.fetch_add(n, Ordering::SeqCst);
    ///     });
    ///     signal.emit(4);
    /// }
    /// signal.emit(5);
    /// assert_eq!(total.load(Ordering::SeqCst), 4);
    /// ```
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            signal: self,
            id: self.connect(slot),
        }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().slots.remove(id).is_some()
    }

    /// Like [`disconnect`](Self::disconnect), but reports an unknown ID as an error.
    pub fn try_disconnect(&self, id: ConnectionId) -> Result<(), SignalError> {
        if self.disconnect(id) {
            Ok(())
        } else {
            crate::trellis_trace!(?id, "disconnect of unknown connection");
            Err(SignalError::InvalidConnection)
        }
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().slots.clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().slots.len()
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

    /// Emit the signal, invoking all connected slots in connection order.
    #[tracing::instrument(skip_all, target = "trellis_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Slot<Args>> = {
            let table = self.connections.lock();
            let mut connections: Vec<&Connection<Args>> = table.slots.values().collect();
            connections.sort_unstable_by_key(|c| c.seq);
            connections.iter().map(|c| c.slot.clone()).collect()
        };
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

/// A connection that disconnects itself when dropped.
///
/// Created via [`Signal::connect_scoped`]. The guard borrows the signal, so
/// the borrow checker guarantees the signal outlives the connection.
pub struct ConnectionGuard<'a, Args: 'static> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args: 'static> ConnectionGuard<'_, Args> {
    /// The ID of the guarded connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: 'static> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
