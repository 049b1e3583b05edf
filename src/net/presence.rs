//! Active-user polling.
//!
//! The active-user list is refreshed on a fixed interval for the life of the
//! page. A failed poll keeps the stale list; the next tick tries again.

#[cfg(test)]
#[path = "presence_test.rs"]
mod presence_test;

use futures::{Stream, StreamExt, pin_mut};

use super::api::ChatApi;
use super::chat_session::ChatSession;
use super::stream::StreamConnector;
use crate::state::surface::UiSurface;

/// Refresh the active-user list once per item of `ticks`. Returns how many
/// polls succeeded once `ticks` ends.
pub async fn poll_active_users<A, S, C, T>(session: &ChatSession<A, S, C>, ticks: T) -> usize
where
    A: ChatApi,
    S: UiSurface + Clone + 'static,
    C: StreamConnector,
    T: Stream<Item = ()>,
{
    pin_mut!(ticks);
    let mut succeeded = 0;
    while ticks.next().await.is_some() {
        if session.refresh_active_users().await.is_ok() {
            succeeded += 1;
        }
    }
    succeeded
}

/// Poll every `interval` until `alive` is cleared.
#[cfg(feature = "csr")]
pub fn spawn_active_user_poll<A, S, C>(
    session: std::rc::Rc<ChatSession<A, S, C>>,
    interval: std::time::Duration,
    alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
) where
    A: ChatApi + 'static,
    S: UiSurface + Clone + 'static,
    C: StreamConnector + 'static,
{
    let interval_ms = u32::try_from(interval.as_millis()).unwrap_or(u32::MAX);
    leptos::task::spawn_local(async move {
        let ticks = gloo_timers::future::IntervalStream::new(interval_ms)
            .take_while(move |()| futures::future::ready(alive.load(std::sync::atomic::Ordering::Relaxed)));
        let succeeded = poll_active_users(&session, ticks).await;
        log::debug!("active-user poll stopped after {succeeded} successful refreshes");
    });
}
