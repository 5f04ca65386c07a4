//! Endpoint path grammar.
//!
//! These exact shapes are what the service routes on:
//! `/<resource>/`, `/entity/{key}/<resource>/` and `/user/{id}/<resource>/`.

use socialize_types::UserId;

/// The collection root for a resource, e.g. `/like/`.
pub fn resource_root(resource: &str) -> String {
    format!("/{resource}/")
}

/// Actions of `resource` on the entity `key`. The key is percent-encoded.
pub fn by_entity(resource: &str, key: &str) -> String {
    format!("/entity/{}/{resource}/", urlencoding::encode(key))
}

/// Actions of `resource` by the user `user_id`, e.g. `/user/69/like/`.
pub fn by_user(resource: &str, user_id: UserId) -> String {
    format!("/user/{user_id}/{resource}/")
}
