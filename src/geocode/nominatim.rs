//! Nominatim (OpenStreetMap) geocoding client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use super::{GeocodeQuery, GeocodeResult, Geocoder, ReverseGeocodeResult};
use crate::error::ProviderError;
use crate::http::with_query;
use crate::models::GeoPoint;

const PROVIDER: &str = "nominatim";

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    display_name: String,
    #[serde(rename = "type")]
    place_type: Option<String>,
    importance: Option<f64>,
    #[serde(default)]
    address: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ReverseHit {
    display_name: Option<String>,
    #[serde(default)]
    address: Map<String, Value>,
}

/// Nominatim client. The base URL is the server root; `/search` and
/// `/reverse` are appended.
pub struct Nominatim {
    client: Client,
    search_endpoint: Url,
    reverse_endpoint: Url,
}

impl Nominatim {
    pub fn new(client: Client, base_url: &Url) -> Result<Self, url::ParseError> {
        // Keep any path prefix on the base URL
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            client,
            search_endpoint: base.join("search")?,
            reverse_endpoint: base.join("reverse")?,
        })
    }

    async fn get(&self, url: Url) -> Result<String, ProviderError> {
        debug!("Nominatim request: {}", url);

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

        response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER, e))
    }
}

#[async_trait]
impl Geocoder for Nominatim {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn search(&self, query: &GeocodeQuery) -> Result<Vec<GeocodeResult>, ProviderError> {
        let text = query.search_text();
        let limit = query.limit.to_string();
        let url = with_query(
            &self.search_endpoint,
            &[
                ("q", text.as_str()),
                ("format", "json"),
                ("limit", limit.as_str()),
                ("addressdetails", "1"),
            ],
        );

        parse_search(&self.get(url).await?)
    }

    async fn reverse(&self, point: GeoPoint) -> Result<ReverseGeocodeResult, ProviderError> {
        let lat = point.lat.to_string();
        let lon = point.lng.to_string();
        let url = with_query(
            &self.reverse_endpoint,
            &[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("format", "json"),
                ("addressdetails", "1"),
            ],
        );

        parse_reverse(&self.get(url).await?)
    }
}

fn malformed(message: impl ToString) -> ProviderError {
    ProviderError::Malformed {
        provider: PROVIDER,
        message: message.to_string(),
    }
}

fn parse_search(body: &str) -> Result<Vec<GeocodeResult>, ProviderError> {
    let hits: Vec<SearchHit> = serde_json::from_str(body).map_err(|e| malformed(e))?;

    hits.into_iter()
        .map(|hit| -> Result<GeocodeResult, ProviderError> {
            let lat = hit
                .lat
                .parse::<f64>()
                .map_err(|_| malformed(format!("invalid lat '{}'", hit.lat)))?;
            let lng = hit
                .lon
                .parse::<f64>()
                .map_err(|_| malformed(format!("invalid lon '{}'", hit.lon)))?;

            Ok(GeocodeResult {
                lat,
                lng,
                display_name: hit.display_name,
                place_type: hit.place_type,
                importance: hit.importance,
                address: hit.address,
            })
        })
        .collect()
}

fn parse_reverse(body: &str) -> Result<ReverseGeocodeResult, ProviderError> {
    let hit: ReverseHit = serde_json::from_str(body).map_err(|e| malformed(e))?;
    Ok(ReverseGeocodeResult {
        display_name: hit.display_name,
        address: hit.address,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_FIXTURE: &str = include_str!("../../tests/fixtures/nominatim_search.json");
    const REVERSE_FIXTURE: &str = include_str!("../../tests/fixtures/nominatim_reverse.json");

    #[test]
    fn test_parse_search_fixture() {
        let results = parse_search(SEARCH_FIXTURE).unwrap();
        assert_eq!(results.len(), 2);

        let first = &results[0];
        assert_eq!(first.lat, -36.8484);
        assert_eq!(first.lng, 174.7622);
        assert_eq!(first.place_type.as_deref(), Some("city"));
        assert_eq!(first.importance, Some(0.75));
        assert_eq!(first.address["country"], "New Zealand");

        // No address details on the second hit
        assert!(results[1].address.is_empty());
        assert_eq!(results[1].importance, None);
    }

    #[test]
    fn test_parse_search_empty() {
        assert!(parse_search("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_search_bad_coordinate() {
        let body = r#"[{"lat": "north", "lon": "1.0", "display_name": "x"}]"#;
        assert!(matches!(
            parse_search(body).unwrap_err(),
            ProviderError::Malformed { .. }
        ));
    }

    #[test]
    fn test_parse_reverse_fixture() {
        let result = parse_reverse(REVERSE_FIXTURE).unwrap();
        assert_eq!(
            result.display_name.as_deref(),
            Some("Civic Square, Wellington Central, Wellington, 6011, New Zealand")
        );
        assert_eq!(result.address["city"], "Wellington");
    }

    #[test]
    fn test_parse_reverse_unable_to_geocode() {
        let result = parse_reverse(r#"{"error": "Unable to geocode"}"#).unwrap();
        assert_eq!(result.display_name, None);
        assert!(result.address.is_empty());
    }

    #[test]
    fn test_endpoints_keep_base_path() {
        let base = Url::parse("https://geo.example.org/nominatim").unwrap();
        let client = Client::new();
        let nominatim = Nominatim::new(client, &base).unwrap();
        assert_eq!(
            nominatim.search_endpoint.as_str(),
            "https://geo.example.org/nominatim/search"
        );
        assert_eq!(
            nominatim.reverse_endpoint.as_str(),
            "https://geo.example.org/nominatim/reverse"
        );
    }
}
