//! Geocoding endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ApiError, ApiQuery, AppState, PointParams};
use crate::geocode::{GeocodeQuery, GeocodeResult};

/// Nominatim refuses limits above this
const MAX_LIMIT: u32 = 40;

#[derive(Deserialize)]
pub(super) struct GeocodeParams {
    address: String,
    country: Option<String>,
    limit: Option<u32>,
}

#[derive(Serialize)]
pub(super) struct GeocodeResponse {
    results: Vec<GeocodeResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

/// Forward geocoding
pub(super) async fn geocode_handler(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<GeocodeParams>,
) -> Result<Json<GeocodeResponse>, ApiError> {
    let query = GeocodeQuery {
        address: params.address,
        country: params.country,
        limit: params
            .limit
            .unwrap_or(GeocodeQuery::DEFAULT_LIMIT)
            .clamp(1, MAX_LIMIT),
    };

    let results = state
        .geocoder
        .search(&query)
        .await
        .map_err(|e| ApiError::from_geocoder("Geocoding", e))?;

    if results.is_empty() {
        return Ok(Json(GeocodeResponse {
            results,
            source: None,
            message: Some("No results found for this address"),
        }));
    }

    Ok(Json(GeocodeResponse {
        results,
        source: Some(state.geocoder.name()),
        message: None,
    }))
}

#[derive(Serialize)]
pub(super) struct ReverseResponse {
    lat: f64,
    lng: f64,
    display_name: Option<String>,
    address: Map<String, Value>,
    source: &'static str,
}

/// Reverse geocoding
pub(super) async fn reverse_handler(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PointParams>,
) -> Result<Json<ReverseResponse>, ApiError> {
    let point = params.point();

    let result = state
        .geocoder
        .reverse(point)
        .await
        .map_err(|e| ApiError::from_geocoder("Reverse geocoding", e))?;

    Ok(Json(ReverseResponse {
        lat: point.lat,
        lng: point.lng,
        display_name: result.display_name,
        address: result.address,
        source: state.geocoder.name(),
    }))
}
