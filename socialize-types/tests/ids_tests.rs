use proptest::prelude::*;
use socialize_types::{ActionId, DeviceId, Error, UserId};
use std::collections::HashSet;
use std::str::FromStr;

// ── UserId ────────────────────────────────────────────────────────

#[test]
fn user_id_displays_as_decimal() {
    assert_eq!(UserId::new(69).to_string(), "69");
}

#[test]
fn user_id_from_str() {
    let id: UserId = "1234".parse().unwrap();
    assert_eq!(id.get(), 1234);
}

#[test]
fn user_id_from_str_invalid() {
    let err = UserId::from_str("sixty-nine").unwrap_err();
    assert!(matches!(err, Error::InvalidId(_)));
    assert!(err.to_string().starts_with("invalid id:"));
}

#[test]
fn user_id_serializes_as_bare_number() {
    let json = serde_json::to_string(&UserId::new(42)).unwrap();
    assert_eq!(json, "42");
}

// ── ActionId ──────────────────────────────────────────────────────

#[test]
fn action_id_displays_as_decimal() {
    assert_eq!(ActionId::from(3).to_string(), "3");
}

#[test]
fn action_id_from_str_invalid() {
    assert!(matches!("".parse::<ActionId>(), Err(Error::InvalidId(_))));
}

#[test]
fn action_id_ordering_follows_number() {
    assert!(ActionId::new(1) < ActionId::new(2));
}

// ── DeviceId ──────────────────────────────────────────────────────

#[test]
fn device_id_new_is_unique() {
    let a = DeviceId::new();
    let b = DeviceId::new();
    assert_ne!(a, b);
}

#[test]
fn device_id_display_and_parse() {
    let id = DeviceId::new();
    let parsed = DeviceId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn device_id_parse_invalid() {
    assert!(matches!(DeviceId::parse("not-a-uuid"), Err(Error::InvalidUuid(_))));
    assert!(matches!("not-a-uuid".parse::<DeviceId>(), Err(Error::InvalidUuid(_))));
}

#[test]
fn device_id_hash_and_eq() {
    let id = DeviceId::new();
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(id);
    assert_eq!(set.len(), 1);
}

// ── Properties ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn action_id_decimal_form_parses_back(raw in any::<i64>()) {
        let id = ActionId::new(raw);
        let text = id.to_string();
        prop_assert_eq!(text.clone(), raw.to_string());
        prop_assert_eq!(text.parse::<ActionId>().unwrap(), id);
    }

    #[test]
    fn user_id_decimal_form_parses_back(raw in any::<i64>()) {
        let id = UserId::new(raw);
        prop_assert_eq!(id.to_string().parse::<UserId>().unwrap(), id);
    }
}
