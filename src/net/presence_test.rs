use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::executor::block_on;
use futures::stream;
use leptos::prelude::{GetUntracked, RwSignal};

use super::*;
use crate::config::ClientConfig;
use crate::net::api::RequestFailed;
use crate::net::stream::{PageOrigin, WsConnector};
use crate::net::types::{ActiveUser, Group, GroupId, Message};
use crate::state::chat::ChatState;

#[derive(Default)]
struct ScriptedUsers {
    polls: RefCell<VecDeque<Result<Vec<ActiveUser>, RequestFailed>>>,
    calls: RefCell<usize>,
}

#[async_trait(?Send)]
impl ChatApi for ScriptedUsers {
    async fn list_groups(&self) -> Result<Vec<Group>, RequestFailed> {
        Ok(Vec::new())
    }

    async fn create_group(&self, name: &str) -> Result<Group, RequestFailed> {
        Ok(Group { id: GroupId::from(1), name: name.to_owned() })
    }

    async fn join_group(&self, _group_id: &GroupId) -> Result<(), RequestFailed> {
        Ok(())
    }

    async fn list_messages(&self, _group_id: &GroupId) -> Result<Vec<Message>, RequestFailed> {
        Ok(Vec::new())
    }

    async fn list_active_users(&self) -> Result<Vec<ActiveUser>, RequestFailed> {
        *self.calls.borrow_mut() += 1;
        self.polls.borrow_mut().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

fn user(name: &str) -> ActiveUser {
    ActiveUser { username: name.to_owned() }
}

type TestSession = ChatSession<Rc<ScriptedUsers>, RwSignal<ChatState>, WsConnector>;

fn session(polls: Vec<Result<Vec<ActiveUser>, RequestFailed>>) -> (TestSession, Rc<ScriptedUsers>, RwSignal<ChatState>) {
    let api = Rc::new(ScriptedUsers { polls: RefCell::new(polls.into()), ..ScriptedUsers::default() });
    let view = RwSignal::new(ChatState::default());
    let session = ChatSession::new(
        api.clone(),
        view,
        WsConnector,
        PageOrigin::new("http:", "localhost:8000"),
        &ClientConfig::default(),
    );
    (session, api, view)
}

#[test]
fn polls_once_per_tick() {
    let (session, api, _) = session(Vec::new());
    let succeeded = block_on(poll_active_users(&session, stream::repeat(()).take(3)));
    assert_eq!(succeeded, 3);
    assert_eq!(*api.calls.borrow(), 3);
}

#[test]
fn failed_poll_keeps_stale_list_until_next_success() {
    let (session, _, view) = session(vec![
        Ok(vec![user("ann")]),
        Err(RequestFailed::Transport("offline".to_owned())),
    ]);

    let succeeded = block_on(poll_active_users(&session, stream::repeat(()).take(2)));

    assert_eq!(succeeded, 1);
    assert_eq!(view.get_untracked().active_users, vec![user("ann")]);
}

#[test]
fn later_success_replaces_list_wholesale() {
    let (session, _, view) = session(vec![
        Ok(vec![user("ann"), user("bob")]),
        Err(RequestFailed::Status(503)),
        Ok(vec![user("cy")]),
    ]);

    let succeeded = block_on(poll_active_users(&session, stream::repeat(()).take(3)));

    assert_eq!(succeeded, 2);
    assert_eq!(view.get_untracked().active_users, vec![user("cy")]);
}

#[test]
fn no_ticks_no_requests() {
    let (session, api, _) = session(Vec::new());
    assert_eq!(block_on(poll_active_users(&session, stream::empty::<()>())), 0);
    assert_eq!(*api.calls.borrow(), 0);
}
