/// Action to invoke with an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Main,
    View,
    Send,
    SendTo,
    Chooser,
}

impl AsRef<str> for Action {
    fn as_ref(&self) -> &str {
        match self {
            Self::Main => "android.intent.action.MAIN",
            Self::View => "android.intent.action.VIEW",
            Self::Send => "android.intent.action.SEND",
            Self::SendTo => "android.intent.action.SENDTO",
            Self::Chooser => "android.intent.action.CHOOSER",
        }
    }
}
