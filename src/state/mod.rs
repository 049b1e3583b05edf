//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `session` is the controller's private state
//! machine, `chat` is what the page renders, `surface` is how the controller
//! writes to it, and `ui` holds chrome such as the theme.

pub mod chat;
pub mod session;
pub mod surface;
pub mod ui;
