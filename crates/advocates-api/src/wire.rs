use advocates_store::Advocate;
use serde::{Deserialize, Serialize};

pub const ADVOCATES_PATH: &str = "/api/advocates";

/// Error message carried by the degraded response.
pub const SEARCH_FAILED: &str = "Search failed";

/// Body of every `/api/advocates` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvocatesResponse {
    pub data: Vec<Advocate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AdvocatesResponse {
    pub fn found(data: Vec<Advocate>) -> Self {
        Self { data, error: None }
    }

    pub fn failed() -> Self {
        Self {
            data: Vec::new(),
            error: Some(SEARCH_FAILED.to_string()),
        }
    }
}
