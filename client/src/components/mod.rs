//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the upload panel, gallery cards, and toasts while
//! reading/writing shared state from Leptos context providers.

pub mod image_card;
pub mod toast_stack;
pub mod upload_panel;
