//! Open-Meteo elevation client.
//!
//! Fallback for single lookups and the only source used for batches, since it
//! accepts comma-separated coordinate lists in one request.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::{BatchElevationProvider, ElevationProvider};
use crate::error::ProviderError;
use crate::http::with_query;
use crate::models::GeoPoint;

const PROVIDER: &str = "open-meteo";

#[derive(Debug, Deserialize)]
struct ElevationResponse {
    #[serde(default)]
    elevation: Vec<Option<f64>>,
}

pub struct OpenMeteo {
    client: Client,
    endpoint: Url,
}

impl OpenMeteo {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    async fn fetch(&self, points: &[GeoPoint]) -> Result<Vec<Option<f64>>, ProviderError> {
        let lats = join(points.iter().map(|p| p.lat));
        let lngs = join(points.iter().map(|p| p.lng));
        let url = with_query(
            &self.endpoint,
            &[("latitude", lats.as_str()), ("longitude", lngs.as_str())],
        );

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
        parse_elevations(&body)
    }
}

#[async_trait]
impl ElevationProvider for OpenMeteo {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn elevation(&self, point: GeoPoint) -> Result<f64, ProviderError> {
        self.fetch(&[point])
            .await?
            .first()
            .copied()
            .flatten()
            .ok_or(ProviderError::Empty { provider: PROVIDER })
    }
}

#[async_trait]
impl BatchElevationProvider for OpenMeteo {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn elevations(&self, points: &[GeoPoint]) -> Result<Vec<Option<f64>>, ProviderError> {
        let values = self.fetch(points).await?;
        Ok(align_to_request(values, points.len()))
    }
}

fn join(values: impl Iterator<Item = f64>) -> String {
    values.map(|v| v.to_string()).collect::<Vec<_>>().join(",")
}

fn parse_elevations(body: &str) -> Result<Vec<Option<f64>>, ProviderError> {
    let data: ElevationResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Malformed {
            provider: PROVIDER,
            message: e.to_string(),
        })?;
    Ok(data.elevation)
}

/// Pad short responses with explicit `None` and drop extras.
fn align_to_request(mut values: Vec<Option<f64>>, requested: usize) -> Vec<Option<f64>> {
    values.resize(requested, None);
    values
}
