use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base path of the payment backend API, including the `/api` prefix.
    pub api_url: String,
    /// Origin used to build the checkout's return link.
    pub origin_url: String,
    /// Maximum status-poll attempts after redirect back from checkout.
    pub poll_attempts: u32,
    /// Fixed delay between status-poll attempts.
    pub poll_delay_ms: u64,
    /// Dev mode swaps the HTTP backend for the in-memory mock.
    pub dev_mode: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let dev_mode = env::var("STOREFRONT_ENV")
            .map(|v| v == "dev" || v == "development")
            .unwrap_or(false);

        let api_url = env::var("STOREFRONT_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8001/api".to_string());

        // Default origin is the API host without the /api prefix.
        let origin_url = env::var("STOREFRONT_ORIGIN_URL").unwrap_or_else(|_| {
            api_url
                .trim_end_matches('/')
                .trim_end_matches("/api")
                .to_string()
        });

        let poll_attempts: u32 = env::var("STOREFRONT_POLL_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let poll_delay_ms: u64 = env::var("STOREFRONT_POLL_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2000);

        Self {
            api_url,
            origin_url,
            poll_attempts,
            poll_delay_ms,
            dev_mode,
        }
    }

    pub fn poll_delay(&self) -> Duration {
        Duration::from_millis(self.poll_delay_ms)
    }
}
