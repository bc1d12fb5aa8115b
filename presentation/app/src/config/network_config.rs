use std::time::Duration;

/// Base URL for Cat as a Service (CATAAS).
pub const CATAAS_BASE_URL: &str = "https://cataas.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the CATAAS HTTP transport.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl NetworkConfig {
    /// Load network configuration through `lookup`
    ///
    /// Variables:
    /// - CATAAS_BASE_URL: API base URL (default: "https://cataas.com")
    /// - CATAAS_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("CATAAS_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| CATAAS_BASE_URL.to_string());
        let timeout_secs = lookup("CATAAS_TIMEOUT_SECS")
            .and_then(|secs| secs.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
