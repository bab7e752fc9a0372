//! Open-Elevation lookup client (primary source).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::ElevationProvider;
use crate::error::ProviderError;
use crate::http::with_query;
use crate::models::GeoPoint;

const PROVIDER: &str = "open-elevation";

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    results: Vec<LookupResult>,
}

#[derive(Debug, Deserialize)]
struct LookupResult {
    elevation: Option<f64>,
}

pub struct OpenElevation {
    client: Client,
    endpoint: Url,
}

impl OpenElevation {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl ElevationProvider for OpenElevation {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn elevation(&self, point: GeoPoint) -> Result<f64, ProviderError> {
        let locations = point.to_string();
        let url = with_query(&self.endpoint, &[("locations", locations.as_str())]);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER, e))?;

        if !response.status().is_success() {
            return Err(ProviderError::Status {
                provider: PROVIDER,
                status: response.status().as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER, e))?;
        parse_lookup(&body)
    }
}

/// Extract the first elevation from an Open-Elevation lookup body.
fn parse_lookup(body: &str) -> Result<f64, ProviderError> {
    let data: LookupResponse = serde_json::from_str(body).map_err(|e| ProviderError::Malformed {
        provider: PROVIDER,
        message: e.to_string(),
    })?;

    data.results
        .first()
        .and_then(|r| r.elevation)
        .ok_or(ProviderError::Empty { provider: PROVIDER })
}
