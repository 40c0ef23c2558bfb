use std::time::Duration;

/// Default endpoint when neither the flag nor the environment names one.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

const API_URL_ENV: &str = "SANGATHAN_API_URL";

/// Connection settings for the hierarchy endpoint.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("sangathan/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Resolve the base URL: explicit flag, then `SANGATHAN_API_URL` (a
    /// `.env` file is honored), then the built-in default.
    pub fn resolve(api_url: Option<&str>) -> Self {
        dotenvy::dotenv().ok();
        let base_url = api_url
            .map(str::to_string)
            .or_else(|| std::env::var(API_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { base_url, ..Default::default() }
    }
}
