//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the chat view model from context and hand user actions to
//! the session controller; they never call the network directly.

pub mod active_users_panel;
pub mod chat_panel;
pub mod group_sidebar;
pub mod theme_toggle;
