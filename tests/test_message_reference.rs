use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use message_reference::{Flag, MessageReference};

#[derive(Debug, Serialize, Deserialize)]
struct NotificationAction {
    action: String,
    reference: Option<MessageReference>,
}

#[test]
fn test_message_reference() {
    env_logger::builder()
        .is_test(true)
        .filter_level(LevelFilter::Trace)
        .init();

    // build references

    let reference = MessageReference::new("account", 7, "INBOX", "42", None);
    let answered = reference.with_modified_flag(Some(Flag::Answered));
    let moved = reference.with_modified_uid("43");

    // check identity strings

    let identity = reference.to_identity_string();
    assert_eq!(identity, "#:YWNjb3VudA==:Nw==:SU5CT1g=:NDI=");
    assert_eq!(identity, reference.to_string());
    assert_eq!(
        answered.to_identity_string(),
        "#:YWNjb3VudA==:Nw==:SU5CT1g=:NDI=:ANSWERED"
    );
    assert_eq!(moved.to_identity_string(), "#:YWNjb3VudA==:Nw==:SU5CT1g=:NDM=");

    // check that identity strings resolve back to the same message

    let parsed = MessageReference::parse(Some(identity.as_str())).unwrap();
    assert_eq!(parsed, reference);
    assert_eq!(parsed.folder_id(), 7);
    assert_eq!(parsed.flag(), None);

    let parsed = MessageReference::parse(Some(answered.to_identity_string().as_str())).unwrap();
    assert_eq!(parsed, reference);
    assert_eq!(parsed.flag(), Some(Flag::Answered));

    let parsed = MessageReference::parse(Some("#:YWNjb3VudA==:Nw==:SU5CT1g=:NDI=:ANSWERED:SEEN"));
    assert_eq!(parsed.as_ref().and_then(MessageReference::flag), Some(Flag::Answered));
    assert_eq!(parsed, Some(reference.clone()));

    let parsed: MessageReference = moved.to_identity_string().parse().unwrap();
    assert_ne!(parsed, reference);
    assert!(parsed.matches(Some("account"), Some("INBOX"), Some("43")));

    // check that malformed identity strings do not resolve

    for identity in [
        "",
        "#",
        "@:YWNjb3VudA==:Nw==:SU5CT1g=:NDI=",
        "#:YWNjb3VudA==:Nw==:SU5CT1g=",
        "#:YW*jb3VudA==:Nw==:SU5CT1g=:NDI=",
        "#:YWNjb3VudA==:N*==:SU5CT1g=:NDI=",
        "#:YWNjb3VudA==:Nw==:SU5C%1g=:NDI=",
        "#:YWNjb3VudA==:Nw==:SU5CT1g=:N-I=",
        "#:YWNjb3VudA==:YWNjb3VudA==:SU5CT1g=:NDI=",
        "#:YWNjb3VudA==:Nw==:SU5CT1g=:NDI=:REPLIED",
    ] {
        assert_eq!(MessageReference::parse(Some(identity)), None);
    }
    assert_eq!(MessageReference::parse(None), None);

    // check references as hash map keys

    let mut notifications = HashMap::new();
    notifications.insert(reference.clone(), "new message");
    notifications.insert(answered.clone(), "answered message");
    notifications.insert(moved.clone(), "moved message");

    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications.get(&reference), Some(&"answered message"));
    assert_eq!(notifications.get(&moved), Some(&"moved message"));
}

#[test]
fn test_message_reference_payload() {
    let action = NotificationAction {
        action: "mark_as_read".into(),
        reference: Some(MessageReference::new(
            "o hai!",
            2,
            "folder",
            "10101010",
            Flag::Seen,
        )),
    };

    let json = serde_json::to_string(&action).unwrap();
    assert_eq!(
        json,
        r##"{"action":"mark_as_read","reference":"#:byBoYWkh:Mg==:Zm9sZGVy:MTAxMDEwMTA=:SEEN"}"##
    );

    let action: NotificationAction = serde_json::from_str(&json).unwrap();
    let reference = action.reference.unwrap();
    assert!(reference.matches(Some("o hai!"), Some("folder"), Some("10101010")));
    assert_eq!(reference.folder_id(), 2);
    assert_eq!(reference.flag(), Some(Flag::Seen));

    let action: NotificationAction =
        serde_json::from_str(r#"{"action":"mark_as_read","reference":null}"#).unwrap();
    assert!(action.reference.is_none());

    let result = serde_json::from_str::<NotificationAction>(
        r#"{"action":"mark_as_read","reference":"@:garbage"}"#,
    );
    assert!(result.is_err());
}
