//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, storage,
//! document attributes) from session and view logic to improve testability.

pub mod storage;
pub mod theme;
pub mod time;
