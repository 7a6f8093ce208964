//! Auth state-change notifications.
//!
//! Listeners live in a shared table keyed by a monotonically increasing id.
//! A [`Subscription`] holds only a weak handle, so dropping the client ends
//! delivery without the subscriber having to unsubscribe first.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::sync::{Arc, Mutex, PoisonError, Weak};

use crate::session::Session;

/// Kind of session change being reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

/// Callback invoked with the event and the session after the change.
pub type AuthCallback = Arc<dyn Fn(AuthEvent, Option<&Session>) + Send + Sync>;

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    listeners: Vec<(u64, AuthCallback)>,
}

/// Registry of auth listeners.
#[derive(Clone, Default)]
pub struct AuthEvents {
    table: Arc<Mutex<ListenerTable>>,
}

impl AuthEvents {
    /// Register `callback`; it fires for every event until unsubscribed.
    pub fn subscribe(&self, callback: AuthCallback) -> Subscription {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        table.next_id += 1;
        let id = table.next_id;
        table.listeners.push((id, callback));
        Subscription { id, table: Arc::downgrade(&self.table) }
    }

    /// Deliver `event` to every current listener.
    ///
    /// The table lock is released before callbacks run so a listener may
    /// subscribe or unsubscribe from inside its own callback.
    pub fn emit(&self, event: AuthEvent, session: Option<&Session>) {
        let listeners: Vec<AuthCallback> = {
            let table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
            table.listeners.iter().map(|(_, cb)| Arc::clone(cb)).collect()
        };
        tracing::debug!(?event, listeners = listeners.len(), "auth state change");
        for listener in listeners {
            listener(event, session);
        }
    }
}

/// Handle returned by `on_auth_state_change`.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    table: Weak<Mutex<ListenerTable>>,
}

impl Subscription {
    /// Stop delivering events to this subscriber. Safe to call after the
    /// registry itself is gone.
    pub fn unsubscribe(self) {
        if let Some(table) = self.table.upgrade() {
            table
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}
