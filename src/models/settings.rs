use serde::{Deserialize, Serialize};

/// Default server address; the compresor service listens on Flask's usual port.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client settings persisted to settings.json.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Base URL of the compresor server.
    pub server_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
