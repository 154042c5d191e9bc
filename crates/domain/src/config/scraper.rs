use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScraperConfig {
    /// Base URL of the Browserless service rendering pages.
    #[serde(default = "default_browserless_url")]
    pub browserless_url: String,

    #[serde(default)]
    pub token: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            browserless_url: default_browserless_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_browserless_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_timeout_secs() -> u64 {
    45
}
