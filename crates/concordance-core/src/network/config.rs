use serde::{Deserialize, Serialize};

/// Fetch behaviour for the external sentence sites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Connection timeout in seconds
    pub connect_timeout_seconds: u32,
    /// Per-request timeout in seconds; bounds each adapter's wait
    pub request_timeout_seconds: u32,
    /// User agent to use (rotated randomly when unset)
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: 10,
            request_timeout_seconds: 10,
            user_agent: None,
        }
    }
}
