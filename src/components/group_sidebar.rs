//! Group list and create-group form for the left rail.
//!
//! SYSTEM CONTEXT
//! ==============
//! Clicking a group hands it to the session controller, which joins it,
//! renders its history and swaps the chat stream. Creating a group re-lists
//! groups on success; a failure is alerted by the controller.

use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::net::types::Group;
use crate::state::chat::ChatState;

#[component]
pub fn GroupSidebar() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let session = expect_context::<SessionHandle>();

    let on_select = move |group: Group| {
        let session = session.get();
        leptos::task::spawn_local(async move {
            if let Err(e) = session.select_group(&group).await {
                log::debug!("group {} not opened: {e}", group.id);
            }
        });
    };

    let do_create = move || {
        let name = chat.with_untracked(|s| s.new_group_name.clone());
        if name.trim().is_empty() {
            return;
        }
        let session = session.get();
        leptos::task::spawn_local(async move {
            if let Ok(Some(_)) = session.create_group(&name).await {
                chat.update(|s| s.new_group_name.clear());
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_create();
    };

    view! {
        <nav class="group-sidebar">
            <div class="group-sidebar__heading">"Groups"</div>
            <ul class="group-sidebar__list">
                {move || {
                    let groups = chat.with(|s| s.groups.clone());
                    if groups.is_empty() {
                        return view! { <li class="group-sidebar__empty">"No groups yet"</li> }.into_any();
                    }
                    groups
                        .into_iter()
                        .map(|group| {
                            let label = group.title();
                            view! {
                                <li>
                                    <button class="group-sidebar__group" on:click=move |_| on_select(group.clone())>
                                        {label}
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </ul>

            <form class="group-sidebar__create" on:submit=on_submit>
                <input
                    class="group-sidebar__input"
                    type="text"
                    placeholder="New group name"
                    prop:value=move || chat.with(|s| s.new_group_name.clone())
                    on:input=move |ev| chat.update(|s| s.new_group_name = event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Create"
                </button>
            </form>
        </nav>
    }
}
