//! Client configuration.
//!
//! A browser bundle has no process environment, so overrides are read at
//! build time through `option_env!`. Unset or unparseable values fall back
//! to the defaults below.
//!
//! - `GROUPCHAT_API_BASE`: REST origin prefix, default same-origin (`""`)
//! - `GROUPCHAT_POLL_MS`: active-user poll interval, default 4000
//! - `GROUPCHAT_CHAT_STREAM_PREFIX`: default `/ws/chat/`
//! - `GROUPCHAT_NOTIFICATION_PATH`: default `/ws`
//! - `GROUPCHAT_GROUP_CREATED_PREFIX`: default `new_group:`
//! - `GROUPCHAT_THEME_KEY`: storage key of the theme, default `scd-theme`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_ACTIVE_USER_POLL_MS: u32 = 4000;
pub const DEFAULT_CHAT_STREAM_PREFIX: &str = "/ws/chat/";
pub const DEFAULT_NOTIFICATION_PATH: &str = "/ws";
pub const DEFAULT_GROUP_CREATED_PREFIX: &str = "new_group:";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "scd-theme";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub active_user_poll_ms: u32,
    pub chat_stream_prefix: String,
    pub notification_path: String,
    pub group_created_prefix: String,
    pub theme_storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            active_user_poll_ms: DEFAULT_ACTIVE_USER_POLL_MS,
            chat_stream_prefix: DEFAULT_CHAT_STREAM_PREFIX.to_owned(),
            notification_path: DEFAULT_NOTIFICATION_PATH.to_owned(),
            group_created_prefix: DEFAULT_GROUP_CREATED_PREFIX.to_owned(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build from values baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::from_lookup(build_env)
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'static str>,
    {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            lookup(key)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map_or(default, str::to_owned)
        };

        Self {
            api_base: lookup("GROUPCHAT_API_BASE")
                .map(|v| v.trim().trim_end_matches('/').to_owned())
                .unwrap_or(defaults.api_base),
            active_user_poll_ms: parse_poll_ms(lookup("GROUPCHAT_POLL_MS")),
            chat_stream_prefix: text("GROUPCHAT_CHAT_STREAM_PREFIX", defaults.chat_stream_prefix),
            notification_path: text("GROUPCHAT_NOTIFICATION_PATH", defaults.notification_path),
            group_created_prefix: text("GROUPCHAT_GROUP_CREATED_PREFIX", defaults.group_created_prefix),
            theme_storage_key: text("GROUPCHAT_THEME_KEY", defaults.theme_storage_key),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.active_user_poll_ms))
    }
}

fn build_env(key: &str) -> Option<&'static str> {
    match key {
        "GROUPCHAT_API_BASE" => option_env!("GROUPCHAT_API_BASE"),
        "GROUPCHAT_POLL_MS" => option_env!("GROUPCHAT_POLL_MS"),
        "GROUPCHAT_CHAT_STREAM_PREFIX" => option_env!("GROUPCHAT_CHAT_STREAM_PREFIX"),
        "GROUPCHAT_NOTIFICATION_PATH" => option_env!("GROUPCHAT_NOTIFICATION_PATH"),
        "GROUPCHAT_GROUP_CREATED_PREFIX" => option_env!("GROUPCHAT_GROUP_CREATED_PREFIX"),
        "GROUPCHAT_THEME_KEY" => option_env!("GROUPCHAT_THEME_KEY"),
        _ => None,
    }
}

/// Poll interval in milliseconds; zero and garbage fall back to the default.
fn parse_poll_ms(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_ACTIVE_USER_POLL_MS)
}
