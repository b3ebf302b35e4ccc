//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! clock, window globals) from stores and views to improve reuse and
//! testability.

pub mod clock;
pub mod global_hook;
pub mod observers;
pub mod scheduler;
pub mod scroll;
pub mod storage;
