//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, store calls,
//! post-action navigation) and delegates chrome to `components`. Access
//! checks happen before a page is built, in `app::Guarded`.

pub mod contact;
pub mod customers;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
