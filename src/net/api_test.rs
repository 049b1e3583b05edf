use super::*;

#[test]
fn groups_endpoint_formats_expected_path() {
    assert_eq!(groups_endpoint(""), "/api/groups");
    assert_eq!(groups_endpoint("https://chat.example"), "https://chat.example/api/groups");
}

#[test]
fn create_group_endpoint_encodes_name() {
    assert_eq!(create_group_endpoint("", "general"), "/api/groups?name=general");
    assert_eq!(create_group_endpoint("", "rust & friends"), "/api/groups?name=rust%20%26%20friends");
}

#[test]
fn join_group_endpoint_formats_query() {
    assert_eq!(join_group_endpoint("", &GroupId::from(42)), "/api/groups/join?group_id=42");
}

#[test]
fn messages_endpoint_formats_query() {
    assert_eq!(messages_endpoint("", &GroupId::from(42)), "/api/messages?group_id=42");
}

#[test]
fn active_users_endpoint_formats_expected_path() {
    assert_eq!(active_users_endpoint(""), "/api/users/active");
}

#[test]
fn http_api_trims_trailing_slash_from_base() {
    let api = HttpApi::new("https://chat.example/");
    assert_eq!(groups_endpoint(&api.base), "https://chat.example/api/groups");
}

#[test]
fn request_failed_display_matches_alert_text() {
    assert_eq!(RequestFailed::Status(400).to_string(), "HTTP 400");
    assert_eq!(RequestFailed::Transport("offline".to_owned()).to_string(), "offline");
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_api_fails_outside_browser() {
    let api = HttpApi::new("");
    let result = futures::executor::block_on(api.list_groups());
    assert!(matches!(result, Err(RequestFailed::Transport(_))));
}

#[cfg(not(feature = "csr"))]
#[test]
fn join_fails_outside_browser() {
    let api = HttpApi::new("");
    let result = futures::executor::block_on(api.join_group(&GroupId::from(1)));
    assert!(matches!(result, Err(RequestFailed::Transport(_))));
}
