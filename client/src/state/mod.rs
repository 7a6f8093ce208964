//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `gallery`, `toast`) so individual
//! components can depend on small focused models. Services write through the
//! [`store::Store`] seam so the same code drives Leptos signals in the browser
//! and plain mutex cells in tests.

pub mod auth;
pub mod gallery;
pub mod store;
pub mod toast;
