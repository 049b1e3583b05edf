//! Long-lived server-push connections.
//!
//! `StreamConnector` opens a stream and delivers its frames to a sink
//! callback; `StreamHandle` is the caller's side of the connection (send,
//! close). `WsConnector` implements both over browser websockets.
//!
//! All websocket I/O is gated behind `#[cfg(feature = "csr")]` since it
//! requires a browser environment. Native builds report
//! `StreamError::Unavailable` from `open`.
//!
//! ERROR HANDLING
//! ==============
//! A stream that fails to open is reported once as `StreamError`. A stream
//! that drops later produces a single `StreamEvent::Closed`; nothing here
//! reconnects.

#[cfg(test)]
#[path = "stream_test.rs"]
mod stream_test;

use thiserror::Error;

use super::types::GroupId;

/// Something that happened on an open stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamEvent {
    /// One inbound text frame.
    Frame(String),
    /// The connection ended, locally or remotely.
    Closed,
}

/// Callback receiving a stream's events, in arrival order.
pub type FrameSink = Box<dyn FnMut(StreamEvent)>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StreamError {
    #[error("failed to open stream: {0}")]
    Open(String),
    #[error("streams are only available in the browser")]
    Unavailable,
}

/// Caller-side control of one open stream.
pub trait StreamHandle {
    /// Queue `text` as one outbound frame. Returns `false` if the stream is
    /// no longer open.
    fn send(&self, text: &str) -> bool;
    /// Request closure. Idempotent, valid in any state.
    fn close(&self);
    fn is_open(&self) -> bool;
}

/// Opens streams by URL.
pub trait StreamConnector {
    type Handle: StreamHandle;

    /// Open `url`, delivering every event to `sink`.
    ///
    /// # Errors
    ///
    /// Returns `StreamError` when the connection cannot be started.
    fn open(&self, url: &str, sink: FrameSink) -> Result<Self::Handle, StreamError>;
}

/// Websocket scheme matching the page scheme (`https:` → `wss`).
pub fn ws_scheme(page_protocol: &str) -> &'static str {
    if page_protocol.trim_end_matches(':').eq_ignore_ascii_case("https") { "wss" } else { "ws" }
}

/// Absolute websocket URL for `path` on the page's own host.
pub fn stream_url(page_protocol: &str, host: &str, path: &str) -> String {
    format!("{}://{host}{path}", ws_scheme(page_protocol))
}

/// Path of the per-group chat stream.
pub fn chat_stream_path(prefix: &str, group_id: &GroupId) -> String {
    format!("{prefix}{}", urlencoding::encode(group_id.as_str()))
}

/// Scheme and host of the current page, used to build stream URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOrigin {
    pub protocol: String,
    pub host: String,
}

impl PageOrigin {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        Self { protocol: protocol.into(), host: host.into() }
    }

    /// Origin of the running page, falling back to plain `localhost`.
    pub fn current() -> Self {
        #[cfg(feature = "csr")]
        {
            let location = web_sys::window().map(|w| w.location());
            let protocol = location
                .as_ref()
                .and_then(|l| l.protocol().ok())
                .unwrap_or_else(|| "http:".to_owned());
            let host = location
                .as_ref()
                .and_then(|l| l.host().ok())
                .unwrap_or_else(|| "localhost:8000".to_owned());
            Self { protocol, host }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::new("http:", "localhost:8000")
        }
    }

    pub fn url(&self, path: &str) -> String {
        stream_url(&self.protocol, &self.host, path)
    }
}

/// `StreamConnector` over browser websockets.
#[derive(Clone, Copy, Debug, Default)]
pub struct WsConnector;

/// Handle to a websocket opened by [`WsConnector`].
#[derive(Debug)]
pub struct WsHandle {
    #[cfg(feature = "csr")]
    tx: futures::channel::mpsc::UnboundedSender<String>,
    open: std::rc::Rc<std::cell::Cell<bool>>,
}

impl StreamHandle for WsHandle {
    fn send(&self, text: &str) -> bool {
        if !self.open.get() {
            return false;
        }
        #[cfg(feature = "csr")]
        {
            self.tx.unbounded_send(text.to_owned()).is_ok()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
            false
        }
    }

    fn close(&self) {
        self.open.set(false);
        #[cfg(feature = "csr")]
        self.tx.close_channel();
    }

    fn is_open(&self) -> bool {
        self.open.get()
    }
}

impl StreamConnector for WsConnector {
    type Handle = WsHandle;

    #[cfg(feature = "csr")]
    fn open(&self, url: &str, sink: FrameSink) -> Result<WsHandle, StreamError> {
        use futures::channel::mpsc;
        use gloo_net::websocket::futures::WebSocket;

        let ws = WebSocket::open(url).map_err(|e| StreamError::Open(e.to_string()))?;
        let (tx, rx) = mpsc::unbounded::<String>();
        let open = std::rc::Rc::new(std::cell::Cell::new(true));

        leptos::task::spawn_local(run_socket(url.to_owned(), ws, rx, sink, open.clone()));
        Ok(WsHandle { tx, open })
    }

    #[cfg(not(feature = "csr"))]
    fn open(&self, url: &str, sink: FrameSink) -> Result<WsHandle, StreamError> {
        let _ = (url, sink);
        Err(StreamError::Unavailable)
    }
}

/// Pump one websocket until either side finishes, then report closure.
#[cfg(feature = "csr")]
async fn run_socket(
    url: String,
    ws: gloo_net::websocket::futures::WebSocket,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
    mut sink: FrameSink,
    open: std::rc::Rc<std::cell::Cell<bool>>,
) {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;

    let (mut ws_write, mut ws_read) = ws.split();

    {
        let send_task = async {
            while let Some(text) = rx.next().await {
                if ws_write.send(Message::Text(text)).await.is_err() {
                    break;
                }
            }
        };

        let recv_task = async {
            while let Some(msg) = ws_read.next().await {
                match msg {
                    Ok(Message::Text(text)) => sink(StreamEvent::Frame(text)),
                    Ok(Message::Bytes(bytes)) => {
                        sink(StreamEvent::Frame(String::from_utf8_lossy(&bytes).into_owned()));
                    }
                    Err(e) => {
                        log::warn!("stream {url} recv error: {e}");
                        break;
                    }
                }
            }
        };

        futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    }

    open.set(false);
    if let Ok(ws) = ws_write.reunite(ws_read) {
        if let Err(e) = ws.close(None, None) {
            log::debug!("stream {url} close: {e:?}");
        }
    }
    log::info!("stream {url} closed");
    sink(StreamEvent::Closed);
}
