//! Scoped event subscriptions
//!
//! [`EventHub`] is a small typed dispatcher for in-page events (anchor
//! changes, viewport resizes). Subscribing returns a [`Subscription`] guard;
//! dropping the guard removes the callback, so a component that owns its
//! subscription can never leak a listener past its own teardown. There is no
//! global hub; owners create and share one explicitly.
//!
//! Callbacks run while the hub is locked. Do not subscribe or unsubscribe
//! from inside a callback.

use std::sync::{Arc, Mutex, Weak};

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Key identifying one subscription within a hub
    pub struct SubscriptionId;
}

type Callback<E> = Box<dyn Fn(&E) + Send + Sync>;

struct HubInner<E> {
    subscribers: SlotMap<SubscriptionId, Callback<E>>,
}

/// A typed event dispatcher with scoped subscriptions
pub struct EventHub<E> {
    inner: Arc<Mutex<HubInner<E>>>,
}

impl<E> Clone for EventHub<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> Default for EventHub<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventHub<E> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HubInner {
                subscribers: SlotMap::with_key(),
            })),
        }
    }

    /// Register a callback; it receives every event emitted while the
    /// returned guard is alive
    pub fn subscribe<F>(&self, callback: F) -> Subscription<E>
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = match self.inner.lock() {
            Ok(mut inner) => inner.subscribers.insert(Box::new(callback)),
            Err(_) => SubscriptionId::default(),
        };
        tracing::trace!(?id, "event subscription added");

        Subscription {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver an event to every live subscriber
    pub fn emit(&self, event: &E) {
        if let Ok(inner) = self.inner.lock() {
            for (_, callback) in inner.subscribers.iter() {
                callback(event);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .map(|inner| inner.subscribers.len())
            .unwrap_or(0)
    }
}

/// RAII guard for one [`EventHub`] subscription
///
/// Dropping the guard unsubscribes. If the hub itself has already been
/// dropped, drop is a no-op.
pub struct Subscription<E> {
    inner: Weak<Mutex<HubInner<E>>>,
    id: SubscriptionId,
}

impl<E> Subscription<E> {
    /// Whether the callback is still registered
    pub fn is_active(&self) -> bool {
        match self.inner.upgrade() {
            Some(inner) => inner
                .lock()
                .map(|inner| inner.subscribers.contains_key(self.id))
                .unwrap_or(false),
            None => false,
        }
    }

    /// Remove the callback now instead of at drop time
    pub fn unsubscribe(self) {}
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            if let Ok(mut inner) = inner.lock() {
                inner.subscribers.remove(self.id);
                tracing::trace!(id = ?self.id, "event subscription removed");
            }
        }
    }
}

impl<E> std::fmt::Debug for Subscription<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
