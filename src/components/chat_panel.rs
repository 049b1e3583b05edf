//! Open conversation: heading, message log and composer.

use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::state::chat::ChatState;

/// Chat panel showing the open group's log and an input for sending.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let session = expect_context::<SessionHandle>();

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Only log writes move this; polls and keystrokes leave it alone.
    let log_revision = Memo::new(move |_| chat.with(|s| s.log_revision));
    let title = Memo::new(move |_| chat.with(|s| s.title.clone()));

    // Keep the newest line in view.
    Effect::new(move || {
        log_revision.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        session.get().send_draft();
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let heading = move || title.get().unwrap_or_else(|| "Select a group".to_owned());
    let can_send = move || title.with(Option::is_some) && chat.with(|s| !s.draft.trim().is_empty());

    view! {
        <section class="chat-panel">
            <h2 class="chat-panel__title">{heading}</h2>

            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    log_revision.track();
                    chat.with_untracked(|s| s.lines.clone())
                        .into_iter()
                        .map(|line| {
                            let class = format!("chat-panel__line {}", line.kind.css_class());
                            view! { <div class=class>{line.text}</div> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || chat.with(|s| s.draft.clone())
                    on:input=move |ev| chat.update(|s| s.draft = event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </section>
    }
}
