//! Connection settings for the listing API.

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.reddit.com/";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            user_agent: concat!("frontpage/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
