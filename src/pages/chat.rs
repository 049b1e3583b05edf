//! Chat page: group sidebar, open conversation and active users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/` and `/chat/:id`. The first mount starts the session,
//! opening the `:id` group when the route carries one. Later mounts reuse the
//! running session.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::SessionHandle;
use crate::components::active_users_panel::ActiveUsersPanel;
use crate::components::chat_panel::ChatPanel;
use crate::components::group_sidebar::GroupSidebar;
use crate::components::theme_toggle::ThemeToggle;
use crate::net::types::GroupId;

/// Group id from the route, if present and non-blank.
pub fn route_group(raw: Option<String>) -> Option<GroupId> {
    raw.map(|id| id.trim().to_owned()).filter(|id| !id.is_empty()).map(GroupId::new)
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let params = use_params_map();

    if session.claim_start() {
        let initial = route_group(params.get_untracked().get("id"));
        let session = session.get();
        leptos::task::spawn_local(async move { session.start(initial).await });
    }

    view! {
        <div class="chat-page">
            <header class="chat-page__header toolbar">
                <span class="toolbar__title">"Group Chat"</span>
                <span class="toolbar__spacer"></span>
                <ThemeToggle/>
            </header>

            <div class="chat-page__body">
                <GroupSidebar/>
                <ChatPanel/>
                <ActiveUsersPanel/>
            </div>
        </div>
    }
}
