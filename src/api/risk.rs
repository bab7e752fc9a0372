//! Risk assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    response::Json,
};
use serde::{Deserialize, Serialize};

use super::{ApiError, ApiQuery, AppState, PointParams, UNIT_METERS};
use crate::models::GeoPoint;
use crate::risk::{calculate_flood_risk, summarize_scenarios, RiskAssessment, ScenarioSummary};

/// Accepted sea level rise range in meters, inclusive
const SEA_LEVEL_RISE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

#[derive(Deserialize)]
pub(super) struct RiskParams {
    lat: f64,
    lng: f64,
    sea_level_rise: f64,
}

#[derive(Serialize)]
struct ElevationInfo {
    value: f64,
    unit: &'static str,
    source: &'static str,
}

#[derive(Serialize)]
struct Scenario {
    sea_level_rise: f64,
    unit: &'static str,
}

#[derive(Serialize)]
pub(super) struct RiskResponse {
    location: GeoPoint,
    elevation: ElevationInfo,
    scenario: Scenario,
    risk: RiskAssessment,
}

/// Flood risk for one location under one scenario
pub(super) async fn risk_handler(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<RiskParams>,
) -> Result<Json<RiskResponse>, ApiError> {
    if !SEA_LEVEL_RISE_RANGE.contains(&params.sea_level_rise) {
        return Err(ApiError::BadRequest(format!(
            "sea_level_rise must be between {} and {} meters",
            SEA_LEVEL_RISE_RANGE.start(),
            SEA_LEVEL_RISE_RANGE.end()
        )));
    }

    let point = GeoPoint::new(params.lat, params.lng);
    let reading = state.elevation.fetch_elevation(point).await.map_err(|e| {
        tracing::warn!("Risk assessment without elevation for {}: {}", point, e);
        ApiError::ServiceUnavailable(
            "Unable to fetch elevation data for risk assessment".to_string(),
        )
    })?;

    let risk = calculate_flood_risk(reading.value, params.sea_level_rise);
    tracing::debug!(
        "Risk at {} for {}m rise: {} (score {})",
        point,
        params.sea_level_rise,
        risk.level,
        risk.score
    );

    Ok(Json(RiskResponse {
        location: point,
        elevation: ElevationInfo {
            value: reading.value,
            unit: UNIT_METERS,
            source: reading.source,
        },
        scenario: Scenario {
            sea_level_rise: params.sea_level_rise,
            unit: UNIT_METERS,
        },
        risk,
    }))
}

#[derive(Serialize)]
pub(super) struct SummaryResponse {
    location: GeoPoint,
    elevation: f64,
    scenarios: Vec<ScenarioSummary>,
}

/// Risk levels for the fixed 1-5m scenarios
pub(super) async fn summary_handler(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PointParams>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let point = params.point();
    let reading = state.elevation.fetch_elevation(point).await.map_err(|e| {
        tracing::warn!("Risk summary without elevation for {}: {}", point, e);
        ApiError::ServiceUnavailable("Unable to fetch elevation data".to_string())
    })?;

    Ok(Json(SummaryResponse {
        location: point,
        elevation: reading.value,
        scenarios: summarize_scenarios(reading.value),
    }))
}
