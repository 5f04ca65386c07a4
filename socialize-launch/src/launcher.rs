//! Launchers: adapters that start one external flow and interpret its result.

use crate::error::{LaunchError, LaunchResult};
use crate::host::{ActivityHost, ResultCode};
use crate::intent::{Action, Extra, Intent};

/// What a finished flow handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityResult {
    pub request_code: i32,
    pub result_code: ResultCode,
    pub data: Option<Intent>,
}

/// The single terminal outcome of a launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Completed(ActivityResult),
    /// The user backed out, or the host went away before the flow finished.
    Cancelled,
    Failed(LaunchError),
}

/// Starts a platform UI flow and reports its outcome.
pub trait Launcher: Send + Sync {
    /// Builds the intent to start.
    fn intent(&self, host: &dyn ActivityHost) -> LaunchResult<Intent>;

    /// Interprets the platform result. The default passes it through
    /// uninterpreted.
    fn on_result(
        &self,
        _host: &dyn ActivityHost,
        request_code: i32,
        result_code: ResultCode,
        returned: Option<&Intent>,
        _original: &Intent,
    ) -> LaunchOutcome {
        LaunchOutcome::Completed(ActivityResult {
            request_code,
            result_code,
            data: returned.cloned(),
        })
    }

    /// Whether the hosting screen should close once the flow completes.
    fn should_finish(&self) -> bool {
        true
    }
}

/// Receives the outcome of one launch.
pub trait LaunchListener: Send + Sync {
    fn on_result(&self, result: ActivityResult);

    fn on_cancel(&self) {}

    fn on_error(&self, error: LaunchError);
}

/// Launches a fixed intent.
#[derive(Debug, Clone)]
pub struct IntentLauncher {
    intent: Intent,
    finish: bool,
}

impl IntentLauncher {
    pub fn new(intent: Intent) -> Self {
        Self {
            intent,
            finish: true,
        }
    }

    /// Keeps the hosting screen open after the flow completes.
    pub fn keep_host(mut self) -> Self {
        self.finish = false;
        self
    }
}

impl Launcher for IntentLauncher {
    fn intent(&self, _host: &dyn ActivityHost) -> LaunchResult<Intent> {
        Ok(self.intent.clone())
    }

    fn should_finish(&self) -> bool {
        self.finish
    }
}

/// Opens an entity's page in whatever app handles its URL.
#[derive(Debug, Clone)]
pub struct EntityLauncher {
    url: String,
}

impl EntityLauncher {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Launcher for EntityLauncher {
    fn intent(&self, _host: &dyn ActivityHost) -> LaunchResult<Intent> {
        if self.url.is_empty() {
            return Err(LaunchError::NoActivity("empty entity url".to_string()));
        }
        Ok(Intent::new_with_uri(Action::View, self.url.clone()))
    }
}

/// Kind of message a [`ComposeLauncher`] drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeKind {
    Email,
    Sms,
}

impl std::fmt::Display for ComposeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComposeKind::Email => write!(f, "email"),
            ComposeKind::Sms => write!(f, "sms"),
        }
    }
}

/// MIME type used to target mail apps.
pub const EMAIL_MIME_TYPE: &str = "message/rfc822";

/// Opens the platform's email or SMS composer pre-filled with a message.
///
/// The host screen stays open: composing returns control to it.
#[derive(Debug, Clone)]
pub struct ComposeLauncher {
    kind: ComposeKind,
    subject: Option<String>,
    body: String,
    chooser_title: Option<String>,
}

impl ComposeLauncher {
    pub fn email(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: ComposeKind::Email,
            subject: Some(subject.into()),
            body: body.into(),
            chooser_title: None,
        }
    }

    pub fn sms(body: impl Into<String>) -> Self {
        Self {
            kind: ComposeKind::Sms,
            subject: None,
            body: body.into(),
            chooser_title: None,
        }
    }

    /// Wraps the email intent in a chooser with this title.
    pub fn with_chooser_title(mut self, title: impl Into<String>) -> Self {
        self.chooser_title = Some(title.into());
        self
    }

    pub fn kind(&self) -> ComposeKind {
        self.kind
    }

    /// The compose intent without any chooser around it.
    pub fn compose_intent(&self) -> Intent {
        match self.kind {
            ComposeKind::Email => {
                let mut intent = Intent::new(Action::Send)
                    .with_type(EMAIL_MIME_TYPE)
                    .with_extra(Extra::Text, self.body.clone());
                if let Some(subject) = &self.subject {
                    intent = intent.with_extra(Extra::Subject, subject.clone());
                }
                intent
            }
            ComposeKind::Sms => Intent::new_with_uri(Action::SendTo, "smsto:")
                .with_extra(Extra::SmsBody, self.body.clone()),
        }
    }
}

impl Launcher for ComposeLauncher {
    fn intent(&self, _host: &dyn ActivityHost) -> LaunchResult<Intent> {
        let intent = self.compose_intent();
        Ok(match (self.kind, &self.chooser_title) {
            (ComposeKind::Email, Some(title)) => intent.into_chooser_with_title(Some(title.clone())),
            _ => intent,
        })
    }

    fn on_result(
        &self,
        _host: &dyn ActivityHost,
        request_code: i32,
        result_code: ResultCode,
        returned: Option<&Intent>,
        _original: &Intent,
    ) -> LaunchOutcome {
        match result_code {
            ResultCode::Canceled => LaunchOutcome::Cancelled,
            ResultCode::Ok => LaunchOutcome::Completed(ActivityResult {
                request_code,
                result_code,
                data: returned.cloned(),
            }),
            ResultCode::User(code) => LaunchOutcome::Failed(LaunchError::UnexpectedResult(
                format!("{} composer returned code {}", self.kind, code),
            )),
        }
    }

    fn should_finish(&self) -> bool {
        false
    }
}
