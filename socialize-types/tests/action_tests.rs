use pretty_assertions::assert_eq;
use socialize_types::{
    ActionMetadata, ActionType, AuthProviderType, Comment, Entity, Like, PropagationInfo, Share,
    ShareType, SocialAction,
};

// ── Entity ────────────────────────────────────────────────────────

#[test]
fn entity_display_name_falls_back_to_key() {
    let entity = Entity::new("http://example.com/a", None);
    assert_eq!(entity.display_name(), "http://example.com/a");

    let named = Entity::named("http://example.com/a", "Article A");
    assert_eq!(named.display_name(), "Article A");
}

#[test]
fn entity_serde_omits_missing_name() {
    let json = serde_json::to_value(Entity::new("foo", None)).unwrap();
    assert_eq!(json, serde_json::json!({ "key": "foo" }));
}

// ── ShareType ─────────────────────────────────────────────────────

#[test]
fn share_type_wire_names() {
    for share_type in ShareType::ALL {
        let json = serde_json::to_string(&share_type).unwrap();
        assert_eq!(json, format!("\"{}\"", share_type.as_str()));
    }
}

#[test]
fn share_type_parse_is_case_insensitive() {
    assert_eq!("FACEBOOK".parse::<ShareType>().unwrap(), ShareType::Facebook);
    assert_eq!("sms".parse::<ShareType>().unwrap(), ShareType::Sms);
}

#[test]
fn share_type_parse_unknown() {
    assert!("myspace".parse::<ShareType>().is_err());
}

#[test]
fn share_type_auth_provider() {
    assert_eq!(
        ShareType::Facebook.auth_provider(),
        Some(AuthProviderType::Facebook)
    );
    assert_eq!(
        ShareType::Twitter.auth_provider(),
        Some(AuthProviderType::Twitter)
    );
    assert!(ShareType::Email.auth_provider().is_none());
    assert!(!ShareType::Sms.is_social_network());
}

// ── Records ───────────────────────────────────────────────────────

#[test]
fn like_references_entity_key() {
    let entity = Entity::named("foo", "Foo");
    let like = Like::new(&entity, ActionMetadata::default());

    assert_eq!(like.entity_key(), "foo");
    assert_eq!(like.entity(), Some(&entity));
    assert_eq!(like.action_type(), ActionType::Like);
    assert!(like.id().is_none());
}

#[test]
fn share_carries_medium_and_text() {
    let entity = Entity::new("foo", None);
    let share = Share::new(&entity, "look at this", ShareType::Twitter, ActionMetadata::default());

    assert_eq!(share.action_type(), ActionType::Share);
    assert_eq!(share.medium, ShareType::Twitter);
    assert_eq!(share.text, "look at this");
    assert!(share.propagation_info.is_none());
}

#[test]
fn comment_action_type() {
    let entity = Entity::new("foo", None);
    let comment = Comment::new(&entity, "nice", ActionMetadata::default());
    assert_eq!(comment.action_type(), ActionType::Comment);
    assert_eq!(comment.entity_key(), "foo");
}

#[test]
fn metadata_is_flattened_into_record() {
    let entity = Entity::new("foo", None);
    let like = Like::new(&entity, ActionMetadata::with_location(1.5, -2.0));
    let json = serde_json::to_value(&like).unwrap();

    assert_eq!(json["entity_key"], "foo");
    assert_eq!(json["share_location"], true);
    assert_eq!(json["location"]["lat"], 1.5);
    assert!(json.get("metadata").is_none());
}

#[test]
fn share_deserializes_service_response() {
    let json = serde_json::json!({
        "id": 12,
        "entity_key": "foo",
        "medium": "facebook",
        "text": "hi",
        "date": "2012-03-01T10:00:00Z",
        "propagation_info": {
            "app_url": "http://getsocialize.com/a/1",
            "entity_url": "http://getsocialize.com/e/9"
        }
    });

    let share: Share = serde_json::from_value(json).unwrap();
    assert_eq!(share.id.map(|id| id.get()), Some(12));
    assert_eq!(share.medium, ShareType::Facebook);
    assert_eq!(
        share.propagation_info,
        Some(PropagationInfo {
            app_url: Some("http://getsocialize.com/a/1".to_string()),
            entity_url: Some("http://getsocialize.com/e/9".to_string()),
            extra: Default::default(),
        })
    );
    assert_eq!(share.metadata, ActionMetadata::default());
}
