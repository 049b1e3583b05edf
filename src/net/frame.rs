//! Classification of inbound stream frames.
//!
//! Chat stream frames are either a JSON message object or an opaque status
//! string (for example `[system] ann joined`). Notification frames are plain
//! text and only matter when they start with the group-created prefix.
//! Parsing here is total: a malformed frame is an ordinary `Opaque` value.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use super::types::Message;

/// Result of reading one chat stream frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IncomingFrame {
    /// A well-formed message object.
    Structured(Message),
    /// Anything else, kept verbatim.
    Opaque(String),
}

/// Classify a chat stream frame.
pub fn parse_frame(text: &str) -> IncomingFrame {
    match serde_json::from_str::<Message>(text) {
        Ok(message) => IncomingFrame::Structured(message),
        Err(_) => IncomingFrame::Opaque(text.to_owned()),
    }
}

/// Result of reading one notification stream frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    /// A group was created; carries whatever followed the prefix.
    GroupCreated(String),
    Ignored,
}

/// Classify a notification frame against the group-created `prefix`.
pub fn parse_notification(text: &str, prefix: &str) -> Notification {
    match text.strip_prefix(prefix) {
        Some(rest) if !prefix.is_empty() => Notification::GroupCreated(rest.to_owned()),
        _ => Notification::Ignored,
    }
}
