//! API client configuration.

use serde::{Deserialize, Serialize};
use socialize_types::PageWindow;

/// Configuration for talking to the Socialize service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL for the REST API (e.g. `http://api.getsocialize.com/v1`).
    pub api_base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Window used by list calls that don't specify one.
    pub default_page: PageWindow,
    /// Sent as the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://api.getsocialize.com/v1".to_string(),
            timeout_secs: 30,
            default_page: PageWindow::default(),
            user_agent: format!("socialize-sdk-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
