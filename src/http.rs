//! Shared reqwest setup for upstream providers.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use url::Url;

/// Build an HTTP client with a fixed user agent and per-request timeout.
pub fn build_client(user_agent: &str, timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
        .context("Failed to create HTTP client")
}

/// Append query parameters to a base endpoint URL.
pub(crate) fn with_query(base: &Url, params: &[(&str, &str)]) -> Url {
    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_encodes_values() {
        let base = Url::parse("https://nominatim.example.org/search").unwrap();
        let url = with_query(&base, &[("q", "1 Queen St, Auckland"), ("format", "json")]);
        assert_eq!(
            url.as_str(),
            "https://nominatim.example.org/search?q=1+Queen+St%2C+Auckland&format=json"
        );
    }

    #[test]
    fn test_build_client() {
        assert!(build_client("tideline-test/0.1", Duration::from_secs(1)).is_ok());
    }
}
