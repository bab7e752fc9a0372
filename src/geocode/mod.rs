//! Forward and reverse geocoding.

mod nominatim;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ProviderError;
use crate::models::GeoPoint;

pub use nominatim::Nominatim;

/// Free-text address search
#[derive(Debug, Clone)]
pub struct GeocodeQuery {
    pub address: String,
    /// Appended to the address to narrow the search
    pub country: Option<String>,
    pub limit: u32,
}

impl GeocodeQuery {
    pub const DEFAULT_LIMIT: u32 = 5;

    /// Text sent upstream: "{address}, {country}" when a country is given.
    pub fn search_text(&self) -> String {
        match self.country.as_deref() {
            Some(country) if !country.is_empty() => format!("{}, {}", self.address, country),
            _ => self.address.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeResult {
    pub lat: f64,
    pub lng: f64,
    pub display_name: String,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub importance: Option<f64>,
    /// Structured address components as returned upstream
    pub address: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReverseGeocodeResult {
    pub display_name: Option<String>,
    pub address: Map<String, Value>,
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    fn name(&self) -> &'static str;

    async fn search(&self, query: &GeocodeQuery) -> Result<Vec<GeocodeResult>, ProviderError>;

    async fn reverse(&self, point: GeoPoint) -> Result<ReverseGeocodeResult, ProviderError>;
}
