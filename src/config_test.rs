use super::*;

fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<&'static str> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

#[test]
fn defaults_match_server_contract() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.api_base, "");
    assert_eq!(cfg.active_user_poll_ms, 4000);
    assert_eq!(cfg.chat_stream_prefix, "/ws/chat/");
    assert_eq!(cfg.notification_path, "/ws");
    assert_eq!(cfg.group_created_prefix, "new_group:");
    assert_eq!(cfg.theme_storage_key, "scd-theme");
}

#[test]
fn empty_lookup_yields_defaults() {
    assert_eq!(ClientConfig::from_lookup(|_| None), ClientConfig::default());
}

#[test]
fn lookup_overrides_fields() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("GROUPCHAT_API_BASE", "https://chat.example/"),
        ("GROUPCHAT_POLL_MS", "2500"),
        ("GROUPCHAT_NOTIFICATION_PATH", "/notify"),
        ("GROUPCHAT_THEME_KEY", "my-theme"),
    ]));
    assert_eq!(cfg.api_base, "https://chat.example");
    assert_eq!(cfg.active_user_poll_ms, 2500);
    assert_eq!(cfg.notification_path, "/notify");
    assert_eq!(cfg.theme_storage_key, "my-theme");
    assert_eq!(cfg.chat_stream_prefix, "/ws/chat/");
}

#[test]
fn invalid_poll_interval_falls_back() {
    assert_eq!(parse_poll_ms(Some("soon")), DEFAULT_ACTIVE_USER_POLL_MS);
    assert_eq!(parse_poll_ms(Some("0")), DEFAULT_ACTIVE_USER_POLL_MS);
    assert_eq!(parse_poll_ms(Some("-5")), DEFAULT_ACTIVE_USER_POLL_MS);
    assert_eq!(parse_poll_ms(None), DEFAULT_ACTIVE_USER_POLL_MS);
    assert_eq!(parse_poll_ms(Some(" 750 ")), 750);
}

#[test]
fn blank_text_overrides_are_ignored() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("GROUPCHAT_GROUP_CREATED_PREFIX", "  ")]));
    assert_eq!(cfg.group_created_prefix, "new_group:");
}

#[test]
fn poll_interval_converts_to_duration() {
    let cfg = ClientConfig { active_user_poll_ms: 1500, ..ClientConfig::default() };
    assert_eq!(cfg.poll_interval(), Duration::from_millis(1500));
}
