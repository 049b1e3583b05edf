//! The write side of the chat page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session controller, the presence poller and the notification listener
//! all render through `UiSurface`. List renders are full replacements, so
//! interleaved writes from independent tasks cannot leave a list half-updated.
//! The Leptos view implements it directly on `RwSignal<ChatState>`.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use super::chat::{ChatLine, ChatState};
use crate::net::types::{ActiveUser, Group};

/// Abstract rendering target for the chat client.
pub trait UiSurface {
    /// Replace the selectable group list.
    fn render_groups(&self, groups: Vec<Group>);
    /// Replace the message log and heading with a freshly opened group's history.
    fn render_history(&self, title: String, lines: Vec<ChatLine>);
    /// Replace the active-user list.
    fn render_active_users(&self, users: Vec<ActiveUser>);
    /// Append one line to the message log.
    fn append_line(&self, line: ChatLine);
    /// Current composer text.
    fn draft(&self) -> String;
    fn clear_draft(&self);
    /// Show a blocking, user-facing error.
    fn alert(&self, message: &str);
}

impl UiSurface for RwSignal<ChatState> {
    fn render_groups(&self, groups: Vec<Group>) {
        self.update(|s| s.groups = groups);
    }

    fn render_history(&self, title: String, lines: Vec<ChatLine>) {
        self.update(|s| s.replace_log(title, lines));
    }

    fn render_active_users(&self, users: Vec<ActiveUser>) {
        self.update(|s| s.active_users = users);
    }

    fn append_line(&self, line: ChatLine) {
        self.update(|s| s.push_line(line));
    }

    fn draft(&self) -> String {
        self.with_untracked(|s| s.draft.clone())
    }

    fn clear_draft(&self) {
        if self.with_untracked(|s| !s.draft.is_empty()) {
            self.update(|s| s.draft.clear());
        }
    }

    fn alert(&self, message: &str) {
        browser_alert(message);
    }
}

/// `window.alert`, or a log line outside the browser.
pub fn browser_alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::error!("{message}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::error!("{message}");
    }
}
