//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::net::chat_session::ChatSession;
use crate::net::stream::{PageOrigin, WsConnector};
use crate::pages::chat::ChatPage;
use crate::state::chat::ChatState;
use crate::state::ui::UiState;
use crate::util::storage::{BrowserStorage, MemoryStorage, PreferenceStorage};
use crate::util::theme::ThemeStore;

/// Session controller as wired in the browser.
pub type BrowserSession = ChatSession<HttpApi, RwSignal<ChatState>, WsConnector>;

pub type BrowserThemeStore = ThemeStore<Box<dyn PreferenceStorage>>;

/// Context handle to the page's single session controller.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    session: StoredValue<Rc<BrowserSession>, LocalStorage>,
    started: StoredValue<bool>,
}

impl SessionHandle {
    pub fn get(&self) -> Rc<BrowserSession> {
        self.session.get_value()
    }

    /// `true` exactly once: for the first caller after the page loads.
    pub fn claim_start(&self) -> bool {
        let first = !self.started.get_value();
        self.started.set_value(true);
        first
    }
}

/// Context handle to the persisted theme preference.
#[derive(Clone, Copy)]
pub struct ThemeHandle(StoredValue<Rc<BrowserThemeStore>, LocalStorage>);

impl ThemeHandle {
    pub fn get(&self) -> Rc<BrowserThemeStore> {
        self.0.get_value()
    }
}

fn preference_storage() -> Box<dyn PreferenceStorage> {
    if BrowserStorage::is_available() {
        Box::new(BrowserStorage)
    } else {
        log::warn!("localStorage unavailable; theme will not persist");
        Box::new(MemoryStorage::new())
    }
}

/// Root application component.
///
/// Provides the chat view model, UI state, session controller and theme
/// store as contexts, starts the page-lifetime background tasks and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let chat = RwSignal::new(ChatState::default());
    let ui = RwSignal::new(UiState::default());

    let themes = Rc::new(ThemeStore::init(preference_storage(), config.theme_storage_key.clone()));
    ui.update(|u| u.theme = themes.active());

    let session = Rc::new(ChatSession::new(
        HttpApi::new(config.api_base.clone()),
        chat,
        WsConnector,
        PageOrigin::current(),
        &config,
    ));

    provide_context(chat);
    provide_context(ui);
    provide_context(SessionHandle {
        session: StoredValue::new_local(session.clone()),
        started: StoredValue::new(false),
    });
    provide_context(ThemeHandle(StoredValue::new_local(themes)));

    #[cfg(feature = "csr")]
    start_background_tasks(&session, &config);

    view! {
        <Title text="Group Chat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
                <Route path=(StaticSegment("chat"), ParamSegment("id")) view=ChatPage/>
            </Routes>
        </Router>
    }
}

/// Active-user poll and notification listener, both for the page lifetime.
#[cfg(feature = "csr")]
fn start_background_tasks(session: &Rc<BrowserSession>, config: &ClientConfig) {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::net::notifications::NotificationListener;
    use crate::net::presence::spawn_active_user_poll;

    let poll_alive = Arc::new(AtomicBool::new(true));
    spawn_active_user_poll(session.clone(), config.poll_interval(), poll_alive.clone());

    let url = PageOrigin::current().url(&config.notification_path);
    let resync_session = session.clone();
    let listener = NotificationListener::start(&WsConnector, &url, &config.group_created_prefix, move |_| {
        let session = resync_session.clone();
        leptos::task::spawn_local(async move { session.resync().await });
    });
    let listener = StoredValue::new_local(listener);

    on_cleanup(move || {
        poll_alive.store(false, Ordering::Relaxed);
        listener.with_value(NotificationListener::close);
    });
}
