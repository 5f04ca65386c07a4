//! Entities, users and the authenticated session.

use crate::{DeviceId, UserId};
use serde::{Deserialize, Serialize};

/// A likeable/shareable object on the host's side, identified by an opaque key
/// (typically a URL). The key never changes once the entity is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Entity {
    /// Creates an entity for `key` with an optional display name.
    pub fn new(key: impl Into<String>, name: Option<String>) -> Self {
        Self {
            key: key.into(),
            name,
        }
    }

    /// Creates a named entity.
    pub fn named(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(key, Some(name.into()))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The name when present, otherwise the key.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.key)
    }
}

/// A user of the Socialize service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl User {
    /// Creates a user with only an id set.
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            first_name: None,
            last_name: None,
            username: None,
        }
    }

    /// Full name, falling back to the username and then to the id.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self
                .username
                .clone()
                .unwrap_or_else(|| self.id.to_string()),
        }
    }
}

/// An authenticated session against the Socialize service.
///
/// Sessions are produced by the host's authentication flow and are read-only
/// for the SDK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub consumer_key: String,
    pub access_token: String,
    pub device_id: DeviceId,
}

impl Session {
    pub fn new(
        user: User,
        consumer_key: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            user,
            consumer_key: consumer_key.into(),
            access_token: access_token.into(),
            device_id: DeviceId::new(),
        }
    }

    /// The current user's id.
    pub fn user_id(&self) -> UserId {
        self.user.id
    }
}
