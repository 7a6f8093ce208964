//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session checks, redirects,
//! subscriptions) and delegates rendering details to `components`.

pub mod home;
pub mod login;
