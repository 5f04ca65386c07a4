//! Platform-neutral intent model.
//!
//! An intent describes a request for another app component: an action, an
//! optional data URI and MIME type, and string extras. The host turns it into
//! whatever its platform needs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod action;
pub use action::Action;

mod extra;
pub use extra::Extra;

/// A messaging object you can use to request an action from another app component.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    extras: BTreeMap<String, String>,
    /// The wrapped target of a chooser intent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<Box<Intent>>,
}

impl Intent {
    pub fn new(action: impl AsRef<str>) -> Self {
        Self {
            action: action.as_ref().to_string(),
            data: None,
            mime_type: None,
            extras: BTreeMap::new(),
            target: None,
        }
    }

    pub fn new_with_uri(action: impl AsRef<str>, uri: impl Into<String>) -> Self {
        Self {
            data: Some(uri.into()),
            ..Self::new(action)
        }
    }

    /// Add extended data to the intent.
    pub fn with_extra(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.extras.insert(key.as_ref().to_string(), value.into());
        self
    }

    /// Set an explicit MIME data type.
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.mime_type = Some(type_name.into());
        self
    }

    /// Builds a new [`Action::Chooser`] intent that wraps this one.
    pub fn into_chooser(self) -> Self {
        self.into_chooser_with_title(None::<&str>)
    }

    pub fn into_chooser_with_title(self, title: Option<impl Into<String>>) -> Self {
        let mut chooser = Intent::new(Action::Chooser);
        if let Some(title) = title {
            chooser = chooser.with_extra(Extra::Title, title);
        }
        chooser.target = Some(Box::new(self));
        chooser
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn extra(&self, key: impl AsRef<str>) -> Option<&str> {
        self.extras.get(key.as_ref()).map(String::as_str)
    }

    pub fn extras(&self) -> &BTreeMap<String, String> {
        &self.extras
    }

    /// The intent a chooser wraps.
    pub fn target(&self) -> Option<&Intent> {
        self.target.as_deref()
    }

    /// This intent, or the one it wraps if it is a chooser.
    pub fn resolve_target(&self) -> &Intent {
        match &self.target {
            Some(target) => target.resolve_target(),
            None => self,
        }
    }
}
