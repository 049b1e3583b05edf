//! REST gateway for groups, history and presence.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: `HttpApi` compiles to stubs that fail with a transport
//! error, since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation is one request with no retry. A non-2xx status or any
//! transport/decode failure becomes `RequestFailed`; callers decide whether
//! to surface or swallow it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use thiserror::Error;

use super::types::{ActiveUser, Group, GroupId, Message};

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RequestFailed {
    /// The server answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),
    /// No usable response: network error, aborted request or undecodable body.
    #[error("{0}")]
    Transport(String),
}

/// The five calls the chat client makes against the REST API.
#[async_trait(?Send)]
pub trait ChatApi {
    /// `GET /api/groups`
    async fn list_groups(&self) -> Result<Vec<Group>, RequestFailed>;
    /// `POST /api/groups?name=<name>`; the server assigns the id.
    async fn create_group(&self, name: &str) -> Result<Group, RequestFailed>;
    /// `POST /api/groups/join?group_id=<id>`; joining twice is not an error.
    async fn join_group(&self, group_id: &GroupId) -> Result<(), RequestFailed>;
    /// `GET /api/messages?group_id=<id>`, oldest first.
    async fn list_messages(&self, group_id: &GroupId) -> Result<Vec<Message>, RequestFailed>;
    /// `GET /api/users/active`
    async fn list_active_users(&self) -> Result<Vec<ActiveUser>, RequestFailed>;
}

#[async_trait(?Send)]
impl<T: ChatApi + ?Sized> ChatApi for std::rc::Rc<T> {
    async fn list_groups(&self) -> Result<Vec<Group>, RequestFailed> {
        (**self).list_groups().await
    }

    async fn create_group(&self, name: &str) -> Result<Group, RequestFailed> {
        (**self).create_group(name).await
    }

    async fn join_group(&self, group_id: &GroupId) -> Result<(), RequestFailed> {
        (**self).join_group(group_id).await
    }

    async fn list_messages(&self, group_id: &GroupId) -> Result<Vec<Message>, RequestFailed> {
        (**self).list_messages(group_id).await
    }

    async fn list_active_users(&self) -> Result<Vec<ActiveUser>, RequestFailed> {
        (**self).list_active_users().await
    }
}

fn groups_endpoint(base: &str) -> String {
    format!("{base}/api/groups")
}

fn create_group_endpoint(base: &str, name: &str) -> String {
    format!("{base}/api/groups?name={}", urlencoding::encode(name))
}

fn join_group_endpoint(base: &str, group_id: &GroupId) -> String {
    format!("{base}/api/groups/join?group_id={}", urlencoding::encode(group_id.as_str()))
}

fn messages_endpoint(base: &str, group_id: &GroupId) -> String {
    format!("{base}/api/messages?group_id={}", urlencoding::encode(group_id.as_str()))
}

fn active_users_endpoint(base: &str) -> String {
    format!("{base}/api/users/active")
}

/// `ChatApi` over `fetch`, rooted at `base` (empty for same-origin).
#[derive(Clone, Debug, Default)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into().trim_end_matches('/').to_owned() }
    }

    #[cfg(feature = "csr")]
    async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, RequestFailed> {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| RequestFailed::Transport(e.to_string()))?;
        decode(resp).await
    }

    #[cfg(feature = "csr")]
    async fn post_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, RequestFailed> {
        let resp = gloo_net::http::Request::post(url)
            .send()
            .await
            .map_err(|e| RequestFailed::Transport(e.to_string()))?;
        decode(resp).await
    }

    /// POST where only the status matters; the body is not read.
    #[cfg(feature = "csr")]
    async fn post_status(url: &str) -> Result<(), RequestFailed> {
        let resp = gloo_net::http::Request::post(url)
            .send()
            .await
            .map_err(|e| RequestFailed::Transport(e.to_string()))?;
        if resp.ok() { Ok(()) } else { Err(RequestFailed::Status(resp.status())) }
    }

    #[cfg(not(feature = "csr"))]
    async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, RequestFailed> {
        let _ = url;
        Err(unavailable())
    }

    #[cfg(not(feature = "csr"))]
    async fn post_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, RequestFailed> {
        let _ = url;
        Err(unavailable())
    }

    #[cfg(not(feature = "csr"))]
    async fn post_status(url: &str) -> Result<(), RequestFailed> {
        let _ = url;
        Err(unavailable())
    }
}

#[cfg(feature = "csr")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, RequestFailed> {
    if !resp.ok() {
        return Err(RequestFailed::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| RequestFailed::Transport(e.to_string()))
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> RequestFailed {
    RequestFailed::Transport("not available outside the browser".to_owned())
}

#[async_trait(?Send)]
impl ChatApi for HttpApi {
    async fn list_groups(&self) -> Result<Vec<Group>, RequestFailed> {
        Self::get_json(&groups_endpoint(&self.base)).await
    }

    async fn create_group(&self, name: &str) -> Result<Group, RequestFailed> {
        Self::post_json(&create_group_endpoint(&self.base, name)).await
    }

    async fn join_group(&self, group_id: &GroupId) -> Result<(), RequestFailed> {
        Self::post_status(&join_group_endpoint(&self.base, group_id)).await
    }

    async fn list_messages(&self, group_id: &GroupId) -> Result<Vec<Message>, RequestFailed> {
        Self::get_json(&messages_endpoint(&self.base, group_id)).await
    }

    async fn list_active_users(&self) -> Result<Vec<ActiveUser>, RequestFailed> {
        Self::get_json(&active_users_endpoint(&self.base)).await
    }
}
