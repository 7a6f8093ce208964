//! Write seam between services and wherever state actually lives.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

/// Something a service can apply a state mutation to.
pub trait Store<T>: Clone + Send + Sync + 'static {
    fn modify(&self, f: impl FnOnce(&mut T));
}

impl<T: Send + Sync + 'static> Store<T> for RwSignal<T> {
    fn modify(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }
}

impl<T: Send + 'static> Store<T> for Arc<Mutex<T>> {
    fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.lock().unwrap_or_else(PoisonError::into_inner));
    }
}
