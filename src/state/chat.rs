//! Rendered chat view model.
//!
//! DESIGN
//! ======
//! Lines are stored pre-formatted (`[HH:MM:SS] author: content`) so the view
//! only maps them to elements. Every list except the message log is replaced
//! wholesale on each refresh.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use chrono::{DateTime, Utc};

use crate::net::frame::IncomingFrame;
use crate::net::types::{ActiveUser, Group, Message};
use crate::util::time::{format_clock, normalize_timestamp_at};

/// Everything the chat page displays.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub groups: Vec<Group>,
    /// Heading of the open group; `None` until a group has been opened.
    pub title: Option<String>,
    pub lines: Vec<ChatLine>,
    /// Bumped on every change to `lines`; the log view scrolls and redraws on it.
    pub log_revision: u64,
    pub active_users: Vec<ActiveUser>,
    /// Composer contents.
    pub draft: String,
    /// Create-group form contents.
    pub new_group_name: String,
}

impl ChatState {
    /// Replace the log and heading with a freshly opened group's history.
    pub fn replace_log(&mut self, title: String, lines: Vec<ChatLine>) {
        self.title = Some(title);
        self.lines = lines;
        self.log_revision += 1;
    }

    pub fn push_line(&mut self, line: ChatLine) {
        self.lines.push(line);
        self.log_revision += 1;
    }
}

/// Visual class of a rendered line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Chat,
    System,
}

impl LineKind {
    /// CSS class used by the message list.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Chat => "msg",
            Self::System => "sys",
        }
    }
}

/// One rendered entry of the message log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatLine {
    pub kind: LineKind,
    pub text: String,
}

impl ChatLine {
    /// A chat message, stamped with its own time or `received_at` when absent.
    pub fn message(msg: &Message, received_at: DateTime<Utc>) -> Self {
        let at = normalize_timestamp_at(msg.created_at.as_deref(), received_at);
        Self {
            kind: LineKind::Chat,
            text: format!("[{}] {}: {}", format_clock(at), msg.author, msg.content),
        }
    }

    /// A status line, stamped with the time it was received.
    pub fn system(text: &str, received_at: DateTime<Utc>) -> Self {
        Self { kind: LineKind::System, text: format!("[{}] {text}", format_clock(received_at)) }
    }

    pub fn from_frame(frame: &IncomingFrame, received_at: DateTime<Utc>) -> Self {
        match frame {
            IncomingFrame::Structured(msg) => Self::message(msg, received_at),
            IncomingFrame::Opaque(text) => Self::system(text, received_at),
        }
    }
}
