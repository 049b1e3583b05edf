//! Light/dark display preference.
//!
//! Reads the persisted mode once at startup and applies it as a `data-theme`
//! attribute on the `<html>` element. Toggling flips the active mode, applies
//! it and writes it back. Requires a browser environment to have a visible
//! effect; elsewhere `apply_theme` is a no-op.
//!
//! TRADE-OFFS
//! ==========
//! Unknown stored values are read as the default mode and are only replaced
//! the next time the user toggles.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;

use super::storage::PreferenceStorage;

/// Display mode persisted across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted/attribute form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but the two known modes is the default.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Set `data-theme` on the document element.
pub fn apply_theme(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        if let Err(e) = el.set_attribute("data-theme", theme.as_str()) {
            log::warn!("failed to apply theme: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Owns the active theme and its persistence.
pub struct ThemeStore<S> {
    storage: S,
    key: String,
    active: Cell<Theme>,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    /// Read the persisted preference and apply it when one exists.
    pub fn init(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let saved = storage.get(&key);
        let active = saved.as_deref().map_or(Theme::default(), Theme::parse);
        if saved.is_some() {
            apply_theme(active);
        }
        log::debug!("theme initialised: {}", active.as_str());
        Self { storage, key, active: Cell::new(active) }
    }

    pub fn active(&self) -> Theme {
        self.active.get()
    }

    /// Flip the active mode, apply it, persist it and return it.
    pub fn toggle(&self) -> Theme {
        let next = self.active.get().opposite();
        self.active.set(next);
        apply_theme(next);
        self.storage.set(&self.key, next.as_str());
        next
    }
}
