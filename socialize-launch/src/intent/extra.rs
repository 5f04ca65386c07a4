/// Extra data to include with an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extra {
    Text,
    Subject,
    Email,
    Title,
    /// Body prefill understood by SMS apps.
    SmsBody,
}

impl AsRef<str> for Extra {
    fn as_ref(&self) -> &str {
        match self {
            Self::Text => "android.intent.extra.TEXT",
            Self::Subject => "android.intent.extra.SUBJECT",
            Self::Email => "android.intent.extra.EMAIL",
            Self::Title => "android.intent.extra.TITLE",
            Self::SmsBody => "sms_body",
        }
    }
}
