//! Action records and the metadata that travels with them.
//!
//! An action is a recorded user interaction (like, share, comment) against an
//! [`Entity`]. Records are built by the action systems before dispatch and are
//! never mutated by the transport layer.

use crate::{ActionId, Entity, Error, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The kind of a recorded action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Like,
    Share,
    Comment,
    View,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionType::Like => "like",
            ActionType::Share => "share",
            ActionType::Comment => "comment",
            ActionType::View => "view",
        };
        f.write_str(name)
    }
}

/// Account providers the host may have linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProviderType {
    Socialize,
    Facebook,
    Twitter,
}

/// The destination of a share. Closed set; each variant has at most one
/// share handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareType {
    Facebook,
    Twitter,
    Email,
    Sms,
    Other,
}

impl ShareType {
    /// Every share type, in wire order.
    pub const ALL: [ShareType; 5] = [
        ShareType::Facebook,
        ShareType::Twitter,
        ShareType::Email,
        ShareType::Sms,
        ShareType::Other,
    ];

    /// Stable lowercase name used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ShareType::Facebook => "facebook",
            ShareType::Twitter => "twitter",
            ShareType::Email => "email",
            ShareType::Sms => "sms",
            ShareType::Other => "other",
        }
    }

    /// The account provider that must be linked before sharing, if any.
    #[must_use]
    pub const fn auth_provider(&self) -> Option<AuthProviderType> {
        match self {
            ShareType::Facebook => Some(AuthProviderType::Facebook),
            ShareType::Twitter => Some(AuthProviderType::Twitter),
            ShareType::Email | ShareType::Sms | ShareType::Other => None,
        }
    }

    /// Whether this share goes through a third-party social network.
    #[must_use]
    pub const fn is_social_network(&self) -> bool {
        self.auth_provider().is_some()
    }
}

impl fmt::Display for ShareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShareType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShareType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownShareType(s.to_string()))
    }
}

/// A geographic location attached to an action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Per-call options for recording an action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub share_location: bool,
    /// Private actions are not shown in activity feeds.
    #[serde(default)]
    pub private: bool,
}

impl ActionMetadata {
    /// Metadata carrying a location the user agreed to share.
    pub fn with_location(lat: f64, lng: f64) -> Self {
        Self {
            location: Some(GeoPoint { lat, lng }),
            share_location: true,
            private: false,
        }
    }
}

/// How a share should be presented on the destination network.
/// Produced by the service, passed through to share handlers unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropagationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_url: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

/// Common read access to every action record.
pub trait SocialAction: Send + Sync {
    fn action_type(&self) -> ActionType;

    /// Server-assigned id; `None` until the record has been created.
    fn id(&self) -> Option<ActionId>;

    fn entity_key(&self) -> &str;

    fn entity(&self) -> Option<&Entity>;

    fn user(&self) -> Option<&User>;
}

macro_rules! impl_social_action {
    ($ty:ty, $kind:expr) => {
        impl SocialAction for $ty {
            fn action_type(&self) -> ActionType {
                $kind
            }

            fn id(&self) -> Option<ActionId> {
                self.id
            }

            fn entity_key(&self) -> &str {
                &self.entity_key
            }

            fn entity(&self) -> Option<&Entity> {
                self.entity.as_ref()
            }

            fn user(&self) -> Option<&User> {
                self.user.as_ref()
            }
        }
    };
}

/// A like of an entity by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ActionId>,
    pub entity_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<Entity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub metadata: ActionMetadata,
}

impl Like {
    /// A new, not yet created like of `entity`.
    pub fn new(entity: &Entity, metadata: ActionMetadata) -> Self {
        Self {
            id: None,
            entity_key: entity.key().to_string(),
            entity: Some(entity.clone()),
            user: None,
            date: None,
            metadata,
        }
    }
}

impl_social_action!(Like, ActionType::Like);

/// A share of an entity to some destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ActionId>,
    pub entity_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<Entity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    pub medium: ShareType,
    #[serde(default)]
    pub text: String,
    /// Filled in by the service on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propagation_info: Option<PropagationInfo>,
    #[serde(flatten)]
    pub metadata: ActionMetadata,
}

impl Share {
    pub fn new(
        entity: &Entity,
        text: impl Into<String>,
        medium: ShareType,
        metadata: ActionMetadata,
    ) -> Self {
        Self {
            id: None,
            entity_key: entity.key().to_string(),
            entity: Some(entity.clone()),
            user: None,
            date: None,
            medium,
            text: text.into(),
            propagation_info: None,
            metadata,
        }
    }
}

impl_social_action!(Share, ActionType::Share);

/// A text comment on an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ActionId>,
    pub entity_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<Entity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    pub text: String,
    #[serde(flatten)]
    pub metadata: ActionMetadata,
}

impl Comment {
    pub fn new(entity: &Entity, text: impl Into<String>, metadata: ActionMetadata) -> Self {
        Self {
            id: None,
            entity_key: entity.key().to_string(),
            entity: Some(entity.clone()),
            user: None,
            date: None,
            text: text.into(),
            metadata,
        }
    }
}

impl_social_action!(Comment, ActionType::Comment);
