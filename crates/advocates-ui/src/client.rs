use advocates_api::{AdvocatesResponse, ADVOCATES_PATH};
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// URL for one search. An empty term leaves the query string off entirely.
pub fn advocates_url(base: &str, term: &str) -> String {
    let base = base.trim_end_matches('/');
    if term.is_empty() {
        format!("{base}{ADVOCATES_PATH}")
    } else {
        format!(
            "{base}{ADVOCATES_PATH}?search={}",
            urlencoding::encode(term)
        )
    }
}

/// Blocking client for the search API.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    base_url: String,
    client: Client,
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Fetch advocates matching `term`. A degraded (non-2xx) answer is an error.
    pub fn fetch(&self, term: &str) -> Result<AdvocatesResponse> {
        let url = advocates_url(&self.base_url, term);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to reach {}", self.base_url))?;

        if !response.status().is_success() {
            let status = response.status();
            let reason = response
                .json::<AdvocatesResponse>()
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_default();
            anyhow::bail!("Search failed ({status}): {reason}");
        }

        response
            .json()
            .context("Failed to parse advocates response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_without_term() {
        assert_eq!(
            advocates_url("http://localhost:3000/", ""),
            "http://localhost:3000/api/advocates"
        );
    }

    #[test]
    fn test_url_encodes_term() {
        assert_eq!(
            advocates_url("http://localhost:3000", "Trauma & PTSD"),
            "http://localhost:3000/api/advocates?search=Trauma%20%26%20PTSD"
        );
        assert_eq!(
            advocates_url("http://h", "100%"),
            "http://h/api/advocates?search=100%25"
        );
    }
}
