use super::*;

#[test]
fn ws_scheme_mirrors_page_scheme() {
    assert_eq!(ws_scheme("https:"), "wss");
    assert_eq!(ws_scheme("https"), "wss");
    assert_eq!(ws_scheme("http:"), "ws");
    assert_eq!(ws_scheme("file:"), "ws");
}

#[test]
fn stream_url_joins_scheme_host_and_path() {
    assert_eq!(stream_url("https:", "chat.example", "/ws"), "wss://chat.example/ws");
    assert_eq!(stream_url("http:", "localhost:8000", "/ws/chat/3"), "ws://localhost:8000/ws/chat/3");
}

#[test]
fn chat_stream_path_embeds_group_id() {
    assert_eq!(chat_stream_path("/ws/chat/", &GroupId::from(42)), "/ws/chat/42");
    assert_eq!(chat_stream_path("/ws/chat/", &GroupId::from("a b")), "/ws/chat/a%20b");
}

#[test]
fn page_origin_builds_urls() {
    let origin = PageOrigin::new("https:", "chat.example");
    assert_eq!(origin.url("/ws"), "wss://chat.example/ws");
}

#[cfg(not(feature = "csr"))]
#[test]
fn ws_connector_is_unavailable_outside_browser() {
    let result = WsConnector.open("ws://localhost/ws", Box::new(|_| {}));
    assert!(matches!(result, Err(StreamError::Unavailable)));
}
