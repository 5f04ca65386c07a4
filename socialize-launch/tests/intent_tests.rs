use socialize_launch::{Action, Extra, Intent};

#[test]
fn intent_builder_sets_fields() {
    let intent = Intent::new(Action::Send)
        .with_type("text/plain")
        .with_extra(Extra::Text, "Hello World!");

    assert_eq!(intent.action(), "android.intent.action.SEND");
    assert_eq!(intent.mime_type(), Some("text/plain"));
    assert_eq!(intent.extra(Extra::Text), Some("Hello World!"));
    assert!(intent.data().is_none());
}

#[test]
fn intent_with_uri() {
    let intent = Intent::new_with_uri(Action::View, "http://example.com");
    assert_eq!(intent.data(), Some("http://example.com"));
}

#[test]
fn extra_overwrites_same_key() {
    let intent = Intent::new(Action::Send)
        .with_extra(Extra::Subject, "one")
        .with_extra(Extra::Subject, "two");
    assert_eq!(intent.extra(Extra::Subject), Some("two"));
    assert_eq!(intent.extras().len(), 1);
}

#[test]
fn chooser_wraps_target() {
    let target = Intent::new(Action::Send).with_extra(Extra::Text, "hi");
    let chooser = target.clone().into_chooser_with_title(Some("Share via"));

    assert_eq!(chooser.action(), "android.intent.action.CHOOSER");
    assert_eq!(chooser.extra(Extra::Title), Some("Share via"));
    assert_eq!(chooser.target(), Some(&target));
    assert_eq!(chooser.resolve_target(), &target);
}

#[test]
fn chooser_without_title() {
    let chooser = Intent::new(Action::Send).into_chooser();
    assert!(chooser.extra(Extra::Title).is_none());
    assert_eq!(chooser.resolve_target().action(), "android.intent.action.SEND");
}

#[test]
fn custom_action_strings_are_kept() {
    let intent = Intent::new("com.example.OPEN");
    assert_eq!(intent.action(), "com.example.OPEN");
}

#[test]
fn intent_serde_roundtrip() {
    let intent = Intent::new_with_uri(Action::SendTo, "smsto:").with_extra(Extra::SmsBody, "yo");
    let json = serde_json::to_string(&intent).unwrap();
    let parsed: Intent = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, intent);
}
