//! Chat session controller.
//!
//! `ChatSession` owns the session state machine and drives every transition:
//! opening a group (join → history → render → stream), routing streamed frames
//! to the surface, sending the composer draft, and refreshing the group and
//! active-user lists.
//!
//! ORDERING
//! ========
//! A group's stream is opened only after its history has been rendered, so a
//! streamed frame can never appear above older history. Each `select_group`
//! call carries a `JoinTicket`; when selections overlap, only the most recent
//! one renders and opens a stream.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged and leave the page as it was. The only user-facing
//! error is a failed group creation, shown through `UiSurface::alert`.
//! Malformed frames render as system lines and dropped streams are not
//! reconnected.

#[cfg(test)]
#[path = "chat_session_test.rs"]
mod chat_session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::Utc;

use super::api::{ChatApi, RequestFailed};
use super::frame::parse_frame;
use super::stream::{FrameSink, PageOrigin, StreamConnector, StreamEvent, StreamHandle, chat_stream_path};
use super::types::{Group, GroupId, Message};
use crate::config::ClientConfig;
use crate::state::chat::ChatLine;
use crate::state::session::{JoinTicket, SessionPhase, SessionState};
use crate::state::surface::UiSurface;

/// How a `select_group` call that reached the server ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinOutcome {
    /// History rendered and the group's stream opened (or attempted).
    Opened,
    /// A later selection started first; this one was discarded.
    Superseded,
}

pub struct ChatSession<A, S, C: StreamConnector> {
    api: A,
    surface: S,
    connector: C,
    origin: PageOrigin,
    chat_stream_prefix: String,
    state: RefCell<SessionState<C::Handle>>,
    /// Generation of the stream whose frames may render.
    live_stream: Rc<Cell<u64>>,
}

impl<A, S, C> ChatSession<A, S, C>
where
    A: ChatApi,
    S: UiSurface + Clone + 'static,
    C: StreamConnector,
{
    pub fn new(api: A, surface: S, connector: C, origin: PageOrigin, config: &ClientConfig) -> Self {
        Self {
            api,
            surface,
            connector,
            origin,
            chat_stream_prefix: config.chat_stream_prefix.clone(),
            state: RefCell::new(SessionState::new()),
            live_stream: Rc::new(Cell::new(0)),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.borrow().phase()
    }

    pub fn current_group(&self) -> Option<GroupId> {
        self.state.borrow().current_group().cloned()
    }

    /// `true` when the open group has a stream that still accepts frames.
    pub fn has_open_stream(&self) -> bool {
        self.state.borrow().stream().is_some_and(StreamHandle::is_open)
    }

    /// Page start: render groups and active users, then open `initial` if given.
    pub async fn start(&self, initial: Option<GroupId>) {
        let groups = self.refresh_groups().await.unwrap_or_default();
        // Already logged; a failed first poll just leaves the list empty.
        if self.refresh_active_users().await.is_err() {
            log::debug!("initial active-user fetch failed");
        }

        if let Some(id) = initial {
            let group = groups
                .into_iter()
                .find(|g| g.id == id)
                .unwrap_or_else(|| Group { id, name: String::new() });
            if self.select_group(&group).await.is_err() {
                log::debug!("deep-linked group {} could not be opened", group.id);
            }
        }
    }

    /// Fetch and render the group list.
    ///
    /// # Errors
    ///
    /// Returns the request failure after logging it; the rendered list is kept.
    pub async fn refresh_groups(&self) -> Result<Vec<Group>, RequestFailed> {
        match self.api.list_groups().await {
            Ok(groups) => {
                self.surface.render_groups(groups.clone());
                Ok(groups)
            }
            Err(e) => {
                log::warn!("failed to load groups: {e}");
                Err(e)
            }
        }
    }

    /// Fetch and render the active-user list.
    ///
    /// # Errors
    ///
    /// Returns the request failure after logging it; the stale list is kept.
    pub async fn refresh_active_users(&self) -> Result<(), RequestFailed> {
        match self.api.list_active_users().await {
            Ok(users) => {
                self.surface.render_active_users(users);
                Ok(())
            }
            Err(e) => {
                log::warn!("failed to load active users: {e}");
                Err(e)
            }
        }
    }

    /// Bring the group and active-user lists up to date. The open group,
    /// its stream and the composer are left alone.
    pub async fn resync(&self) {
        log::info!("resynchronising group and active-user lists");
        let groups = self.refresh_groups().await;
        let users = self.refresh_active_users().await;
        if groups.is_err() || users.is_err() {
            log::debug!("resync incomplete; keeping previous lists where refresh failed");
        }
    }

    /// Create a group named `name` (trimmed) and re-render the group list.
    ///
    /// Returns `Ok(None)` for a blank name, which sends nothing.
    ///
    /// # Errors
    ///
    /// Returns the creation failure after alerting the user.
    pub async fn create_group(&self, name: &str) -> Result<Option<Group>, RequestFailed> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        match self.api.create_group(name).await {
            Ok(group) => {
                log::info!("created group {} ({})", group.name, group.id);
                if self.refresh_groups().await.is_err() {
                    log::debug!("group list not refreshed after create");
                }
                Ok(Some(group))
            }
            Err(e) => {
                self.surface.alert(&format!("Failed: {e}"));
                Err(e)
            }
        }
    }

    /// Open `group`: join it, fetch its history, render the history, then
    /// replace the chat stream.
    ///
    /// # Errors
    ///
    /// Returns the join or history failure after logging it. The previously
    /// open group, its rendered history and its stream are left untouched.
    pub async fn select_group(&self, group: &Group) -> Result<JoinOutcome, RequestFailed> {
        let ticket = self.state.borrow_mut().begin_join(group.id.clone());
        log::debug!("joining group {} (generation {})", group.id, ticket.generation());

        let history = match self.joined_history(&group.id).await {
            Ok(history) => history,
            Err(e) => {
                log::warn!("failed to open group {}: {e}", group.id);
                self.state.borrow_mut().abandon(&ticket);
                return Err(e);
            }
        };

        if !self.state.borrow().is_latest(&ticket) {
            log::debug!("discarding superseded join for group {}", group.id);
            return Ok(JoinOutcome::Superseded);
        }

        let received_at = Utc::now();
        let lines = history.iter().map(|m| ChatLine::message(m, received_at)).collect();
        self.surface.render_history(group.title(), lines);

        self.state
            .borrow_mut()
            .commit(&ticket, |id| self.open_chat_stream(id, &ticket));
        Ok(JoinOutcome::Opened)
    }

    /// Send the composer draft over the open stream and clear the composer.
    ///
    /// Returns `false`, leaving the draft in place, when the draft is blank or
    /// no stream is open.
    pub fn send_draft(&self) -> bool {
        let draft = self.surface.draft();
        if draft.trim().is_empty() {
            return false;
        }

        let sent = {
            let state = self.state.borrow();
            match state.stream() {
                Some(stream) => stream.send(&draft),
                None => false,
            }
        };
        if sent {
            self.surface.clear_draft();
        } else {
            log::debug!("no open chat stream; draft kept");
        }
        sent
    }

    async fn joined_history(&self, group_id: &GroupId) -> Result<Vec<Message>, RequestFailed> {
        self.api.join_group(group_id).await?;
        self.api.list_messages(group_id).await
    }

    fn open_chat_stream(&self, group_id: &GroupId, ticket: &JoinTicket) -> Option<C::Handle> {
        let url = self.origin.url(&chat_stream_path(&self.chat_stream_prefix, group_id));
        self.live_stream.set(ticket.generation());
        let sink = chat_frame_sink(self.surface.clone(), self.live_stream.clone(), ticket.generation(), url.clone());

        match self.connector.open(&url, sink) {
            Ok(handle) => {
                log::debug!("chat stream {url} opening");
                Some(handle)
            }
            Err(e) => {
                log::warn!("chat stream {url}: {e}");
                None
            }
        }
    }
}

/// Render frames from the stream opened for `generation` while it is live.
fn chat_frame_sink<S: UiSurface + 'static>(
    surface: S,
    live_stream: Rc<Cell<u64>>,
    generation: u64,
    url: String,
) -> FrameSink {
    Box::new(move |event| match event {
        StreamEvent::Frame(text) => {
            if live_stream.get() != generation {
                log::debug!("dropping frame from superseded stream {url}");
                return;
            }
            surface.append_line(ChatLine::from_frame(&parse_frame(&text), Utc::now()));
        }
        StreamEvent::Closed => {
            log::info!("chat stream {url} closed");
        }
    })
}
