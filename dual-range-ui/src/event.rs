//! Observer-style event dispatch.
//!
//! [`EventEmitter`] replaces host listener registration: subscribers receive
//! a [`SubscriptionId`] token they later hand back to unsubscribe.
//!
//! Handlers are snapshotted before dispatch and called without any internal
//! lock held, so a handler may subscribe, unsubscribe or notify re-entrantly.

use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use tracing::trace;

use crate::CallbackWith;

new_key_type! {
    /// Token identifying one subscription on an [`EventEmitter`].
    pub struct SubscriptionId;
}

/// A set of handlers notified with values of type `E`.
pub struct EventEmitter<E> {
    handlers: RwLock<SlotMap<SubscriptionId, CallbackWith<E>>>,
}

impl<E> Default for EventEmitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventEmitter<E> {
    /// Creates an emitter without subscribers.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(SlotMap::with_key()),
        }
    }

    /// Registers a handler and returns its token.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(E) + Send + Sync + 'static,
    {
        self.subscribe_shared(CallbackWith::new(handler))
    }

    /// Registers an existing callback handle.
    pub fn subscribe_shared(&self, handler: CallbackWith<E>) -> SubscriptionId {
        self.handlers.write().insert(handler)
    }

    /// Removes a handler. Returns `false` when the token is unknown or was
    /// already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.handlers.write().remove(id).is_some()
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    /// Whether there are no subscriptions.
    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }
}

impl<E: Clone> EventEmitter<E> {
    /// Calls every handler with a clone of `event`, in subscription order.
    pub fn notify(&self, event: E) {
        let snapshot: SmallVec<[CallbackWith<E>; 4]> =
            self.handlers.read().values().cloned().collect();
        trace!(handlers = snapshot.len(), "dispatching event");
        for handler in snapshot {
            handler.call(event.clone());
        }
    }
}
