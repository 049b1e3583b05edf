use super::*;

const PREFIX: &str = "new_group:";

// =============================================================
// parse_frame
// =============================================================

#[test]
fn parse_frame_reads_message_object() {
    let frame = parse_frame(r#"{"author":"ann","content":"hello","created_at":"2024-05-01T10:00:00"}"#);
    let IncomingFrame::Structured(msg) = frame else {
        panic!("expected structured frame");
    };
    assert_eq!(msg.author, "ann");
    assert_eq!(msg.content, "hello");
    assert_eq!(msg.created_at.as_deref(), Some("2024-05-01T10:00:00"));
}

#[test]
fn parse_frame_accepts_missing_timestamp() {
    let frame = parse_frame(r#"{"author":"bob","content":"yo"}"#);
    assert!(matches!(frame, IncomingFrame::Structured(ref m) if m.created_at.is_none()));
}

#[test]
fn parse_frame_keeps_plain_text_opaque() {
    assert_eq!(parse_frame("user left"), IncomingFrame::Opaque("user left".to_owned()));
    assert_eq!(
        parse_frame("[system] ann joined"),
        IncomingFrame::Opaque("[system] ann joined".to_owned())
    );
}

#[test]
fn parse_frame_keeps_malformed_json_opaque() {
    assert_eq!(parse_frame("{\"author\":"), IncomingFrame::Opaque("{\"author\":".to_owned()));
    assert_eq!(parse_frame(""), IncomingFrame::Opaque(String::new()));
}

#[test]
fn parse_frame_keeps_json_of_other_shapes_opaque() {
    assert_eq!(parse_frame("42"), IncomingFrame::Opaque("42".to_owned()));
    assert_eq!(parse_frame(r#"{"content":"no author"}"#), IncomingFrame::Opaque(r#"{"content":"no author"}"#.to_owned()));
    assert_eq!(parse_frame(r#"{"author":1,"content":"x"}"#), IncomingFrame::Opaque(r#"{"author":1,"content":"x"}"#.to_owned()));
}

// =============================================================
// parse_notification
// =============================================================

#[test]
fn parse_notification_detects_group_created() {
    assert_eq!(parse_notification("new_group:77", PREFIX), Notification::GroupCreated("77".to_owned()));
    assert_eq!(parse_notification("new_group:", PREFIX), Notification::GroupCreated(String::new()));
}

#[test]
fn parse_notification_ignores_other_frames() {
    assert_eq!(parse_notification("ping", PREFIX), Notification::Ignored);
    assert_eq!(parse_notification(" new_group:1", PREFIX), Notification::Ignored);
    assert_eq!(parse_notification("NEW_GROUP:1", PREFIX), Notification::Ignored);
}

#[test]
fn parse_notification_with_empty_prefix_ignores_everything() {
    assert_eq!(parse_notification("anything", ""), Notification::Ignored);
}
