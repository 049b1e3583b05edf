//! Networking: REST gateway, server-push streams and the session controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `stream` wraps websockets. `chat_session`
//! drives group selection and the per-group chat stream, `notifications`
//! watches the global stream for new groups, and `presence` polls active
//! users. `frame` classifies inbound frames and `types` defines the wire
//! schema.

pub mod api;
pub mod chat_session;
pub mod frame;
pub mod notifications;
pub mod presence;
pub mod stream;
pub mod types;
