//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns (theme) out of the chat view model so the
//! toggle can re-render without touching message state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
}

impl UiState {
    /// Label for the theme toggle: the mode a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self.theme {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }
}
