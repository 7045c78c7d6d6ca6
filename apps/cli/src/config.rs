//! Environment configuration for the CLI.

/// Where to reach the API and how to behave, read once at startup.
pub struct ClientConfig {
    /// Base URL of the dashboard API
    pub base_url: String,
    /// Bearer token to seed the token store with, if any
    pub token: Option<String>,
    /// Log output format: "text" (default) or "json"
    pub log_format: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var("FOLIOVIEW_API_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string());
        let token = std::env::var("FOLIOVIEW_API_TOKEN").ok().filter(|t| !t.is_empty());
        let log_format =
            std::env::var("FOLIOVIEW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            base_url,
            token,
            log_format,
        }
    }
}
