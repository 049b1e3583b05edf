//! Light/dark toggle button.

use leptos::prelude::*;

use crate::app::ThemeHandle;
use crate::state::ui::UiState;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let themes = expect_context::<ThemeHandle>();

    let on_toggle = move |_| {
        let next = themes.get().toggle();
        ui.update(|u| u.theme = next);
    };

    view! {
        <button class="btn toolbar__dark-toggle" on:click=on_toggle title="Toggle dark mode">
            {move || ui.with(UiState::toggle_label)}
        </button>
    }
}
