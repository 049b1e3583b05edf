//! Global notification stream.
//!
//! One stream per page, opened at startup on the notification path. Frames
//! starting with the group-created prefix fire a callback (the page resyncs
//! its lists); everything else is ignored. A dropped notification stream is
//! logged and not reopened.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use super::frame::{Notification, parse_notification};
use super::stream::{FrameSink, StreamConnector, StreamEvent, StreamHandle};

/// Owner of the page's notification stream.
pub struct NotificationListener<H> {
    handle: Option<H>,
}

impl<H: StreamHandle> NotificationListener<H> {
    /// Open the notification stream at `url`. `on_group_created` receives the
    /// text following `prefix` for every group-created frame.
    ///
    /// A stream that cannot be opened is logged; the listener is then inert.
    pub fn start<C, F>(connector: &C, url: &str, prefix: &str, on_group_created: F) -> Self
    where
        C: StreamConnector<Handle = H>,
        F: FnMut(&str) + 'static,
    {
        let sink = notification_sink(prefix.to_owned(), url.to_owned(), on_group_created);
        match connector.open(url, sink) {
            Ok(handle) => {
                log::debug!("notification stream {url} opening");
                Self { handle: Some(handle) }
            }
            Err(e) => {
                log::warn!("notification stream {url}: {e}");
                Self { handle: None }
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.handle.as_ref().is_some_and(StreamHandle::is_open)
    }

    pub fn close(&self) {
        if let Some(handle) = &self.handle {
            handle.close();
        }
    }
}

fn notification_sink<F>(prefix: String, url: String, mut on_group_created: F) -> FrameSink
where
    F: FnMut(&str) + 'static,
{
    Box::new(move |event| match event {
        StreamEvent::Frame(text) => match parse_notification(&text, &prefix) {
            Notification::GroupCreated(group_id) => {
                log::info!("group created: {group_id}");
                on_group_created(&group_id);
            }
            Notification::Ignored => {}
        },
        StreamEvent::Closed => {
            log::warn!("notification stream {url} closed; not reconnecting");
        }
    })
}
