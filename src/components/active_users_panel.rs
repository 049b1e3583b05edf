//! Active users panel for the right rail.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the list refreshed by the active-user poll. The list is replaced
//! wholesale on every successful poll and kept as-is when one fails.

use leptos::prelude::*;

use crate::state::chat::ChatState;

#[component]
pub fn ActiveUsersPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let users = move || chat.with(|s| s.active_users.clone());

    view! {
        <aside class="active-users-panel">
            <div class="active-users-panel__summary">
                {move || format!("{} active", users().len())}
            </div>
            <Show
                when=move || !users().is_empty()
                fallback=move || view! { <div class="active-users-panel__empty">"No active users."</div> }
            >
                <ul class="active-users-panel__list">
                    {move || {
                        users()
                            .into_iter()
                            .map(|u| view! { <li class="active-users-panel__user">{u.username}</li> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </aside>
    }
}
