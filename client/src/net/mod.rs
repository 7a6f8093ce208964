//! Networking glue between the UI and the hosted backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` builds the shared auth + storage clients once per app mount and
//! plugs browser storage in as the session store.

pub mod backend;
