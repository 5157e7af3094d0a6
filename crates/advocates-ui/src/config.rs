pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Resolved UI settings
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Base URL of the search API, without the `/api/advocates` path
    pub api_url: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
