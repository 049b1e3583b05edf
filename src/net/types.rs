//! Wire DTOs for the chat REST API and chat stream payloads.
//!
//! DESIGN
//! ======
//! Types mirror the server's JSON so serde does the validation. Extra server
//! fields (`id`, `group_id`) are tolerated and ignored where the client has no
//! use for them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque group identifier. The server sends integers; strings are accepted too.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<i64> for GroupId {
    fn from(raw: i64) -> Self {
        Self(raw.to_string())
    }
}

impl<'de> Deserialize<'de> for GroupId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GroupIdVisitor;

        impl Visitor<'_> for GroupIdVisitor {
            type Value = GroupId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a group id as integer or string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<GroupId, E> {
                Ok(GroupId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<GroupId, E> {
                Ok(GroupId(v.to_string()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<GroupId, E> {
                if v.is_empty() {
                    return Err(E::custom("empty group id"));
                }
                Ok(GroupId(v.to_owned()))
            }
        }

        deserializer.deserialize_any(GroupIdVisitor)
    }
}

/// A chat group as listed by `GET /api/groups`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
}

impl Group {
    /// Heading shown while the group is open: its name, or `#<id>` when unnamed.
    pub fn title(&self) -> String {
        let name = self.name.trim();
        if name.is_empty() { format!("#{}", self.id) } else { name.to_owned() }
    }
}

/// A chat message, either from history or a streamed frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub author: String,
    pub content: String,
    /// ISO-8601 creation time; may lack a zone marker or be missing entirely.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One entry of `GET /api/users/active`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveUser {
    pub username: String,
}
