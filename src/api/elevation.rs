//! Elevation endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    response::Json,
};
use serde::{Deserialize, Serialize};

use super::{ApiError, ApiQuery, AppState, PointParams, UNIT_METERS};
use crate::models::parse_coordinate_list;

#[derive(Serialize)]
pub(super) struct ElevationResponse {
    elevation: f64,
    lat: f64,
    lng: f64,
    source: &'static str,
    unit: &'static str,
}

/// Single point elevation, primary source with fallback
pub(super) async fn elevation_handler(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PointParams>,
) -> Result<Json<ElevationResponse>, ApiError> {
    let point = params.point();

    let reading = state.elevation.fetch_elevation(point).await.map_err(|e| {
        tracing::warn!("Elevation unavailable for {}: {}", point, e);
        ApiError::ServiceUnavailable(
            "Unable to fetch elevation data. Please try again later.".to_string(),
        )
    })?;

    Ok(Json(ElevationResponse {
        elevation: reading.value,
        lat: point.lat,
        lng: point.lng,
        source: reading.source,
        unit: UNIT_METERS,
    }))
}

#[derive(Deserialize)]
pub(super) struct BatchParams {
    /// Pipe-separated pairs: "lat1,lng1|lat2,lng2"
    coordinates: String,
}

#[derive(Serialize)]
struct BatchEntry {
    lat: f64,
    lng: f64,
    elevation: Option<f64>,
}

#[derive(Serialize)]
pub(super) struct BatchResponse {
    results: Vec<BatchEntry>,
    source: &'static str,
    unit: &'static str,
}

/// Multi-point elevation in a single upstream request
pub(super) async fn batch_handler(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<BatchParams>,
) -> Result<Json<BatchResponse>, ApiError> {
    let points = parse_coordinate_list(&params.coordinates)
        .map_err(|e| ApiError::BadRequest(format!("Invalid coordinates format: {}", e)))?;

    let elevations = state
        .batch_elevation
        .elevations(&points)
        .await
        .map_err(|e| {
            tracing::warn!("Batch elevation failed for {} points: {}", points.len(), e);
            ApiError::ServiceUnavailable(
                "Unable to fetch elevation data. Please try again later.".to_string(),
            )
        })?;

    let results = points
        .iter()
        .enumerate()
        .map(|(i, point)| BatchEntry {
            lat: point.lat,
            lng: point.lng,
            elevation: elevations.get(i).copied().flatten(),
        })
        .collect();

    Ok(Json(BatchResponse {
        results,
        source: state.batch_elevation.name(),
        unit: UNIT_METERS,
    }))
}
