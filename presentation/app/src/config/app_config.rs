use super::network_config::NetworkConfig;

pub const DEFAULT_PAGE_LIMIT: u32 = 10;

pub struct AppConfig {
    pub network: NetworkConfig,
    pub page_limit: u32,
}

impl AppConfig {
    /// Environment variables:
    /// - CATS_PAGE_LIMIT: Number of cats fetched by the list screen (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let page_limit = lookup("CATS_PAGE_LIMIT")
            .and_then(|limit| limit.parse::<u32>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_PAGE_LIMIT);

        Self {
            network: NetworkConfig::from_lookup(&lookup),
            page_limit,
        }
    }
}
