//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the application shell (navigation, toasts) while
//! reading shared state from Leptos context providers.

pub mod nav_bar;
pub mod toast_stack;
