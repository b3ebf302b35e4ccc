//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `alerts`) so stores stay small and
//! independent; only the route guard reads across them.

pub mod alerts;
pub mod auth;
