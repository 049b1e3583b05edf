//! Which group is open, and the stream that feeds it.
//!
//! DESIGN
//! ======
//! The open group and its stream handle live in one `OpenGroup` slot so they
//! always change together. A join in flight is tracked separately as a
//! `JoinTicket`; every new join bumps a monotonic generation, and only the
//! ticket carrying the latest generation may commit. Earlier joins that
//! resolve late are discarded.
//!
//! Committing closes the previous stream (whatever its state) before the
//! new one is opened, so at most one chat stream is ever intended live.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::stream::StreamHandle;
use crate::net::types::GroupId;

/// Observable phase of the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    JoiningGroup(GroupId),
    Streaming(GroupId),
}

/// Proof of an in-flight join, issued by [`SessionState::begin_join`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoinTicket {
    group_id: GroupId,
    generation: u64,
}

impl JoinTicket {
    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
struct OpenGroup<H> {
    group_id: GroupId,
    /// `None` when the stream could not be opened; the group stays open.
    stream: Option<H>,
}

/// Session state owned by the chat controller.
#[derive(Debug)]
pub struct SessionState<H> {
    open: Option<OpenGroup<H>>,
    pending: Option<JoinTicket>,
    generation: u64,
}

impl<H> Default for SessionState<H> {
    fn default() -> Self {
        Self { open: None, pending: None, generation: 0 }
    }
}

impl<H: StreamHandle> SessionState<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        if let Some(ticket) = &self.pending {
            return SessionPhase::JoiningGroup(ticket.group_id.clone());
        }
        match &self.open {
            Some(open) => SessionPhase::Streaming(open.group_id.clone()),
            None => SessionPhase::Idle,
        }
    }

    /// Group whose history is rendered, regardless of any join in flight.
    pub fn current_group(&self) -> Option<&GroupId> {
        self.open.as_ref().map(|o| &o.group_id)
    }

    /// Stream of the open group, if one was opened.
    pub fn stream(&self) -> Option<&H> {
        self.open.as_ref().and_then(|o| o.stream.as_ref())
    }

    /// Start a join for `group_id`, superseding any join still in flight.
    pub fn begin_join(&mut self, group_id: GroupId) -> JoinTicket {
        self.generation += 1;
        let ticket = JoinTicket { group_id, generation: self.generation };
        self.pending = Some(ticket.clone());
        ticket
    }

    /// `true` while no later join has been started.
    pub fn is_latest(&self, ticket: &JoinTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Drop a failed join. The open group and its stream are untouched.
    pub fn abandon(&mut self, ticket: &JoinTicket) {
        if self.pending.as_ref().is_some_and(|p| p.generation == ticket.generation) {
            self.pending = None;
        }
    }

    /// Switch to the ticket's group: close the previous stream, then open
    /// the new one via `open_stream`.
    ///
    /// Returns `false` without side effects when the ticket is stale.
    pub fn commit<F>(&mut self, ticket: &JoinTicket, open_stream: F) -> bool
    where
        F: FnOnce(&GroupId) -> Option<H>,
    {
        if !self.is_latest(ticket) {
            return false;
        }
        if let Some(previous) = self.open.take() {
            if let Some(stream) = previous.stream {
                stream.close();
            }
        }
        let stream = open_stream(&ticket.group_id);
        self.open = Some(OpenGroup { group_id: ticket.group_id.clone(), stream });
        self.pending = None;
        true
    }
}
