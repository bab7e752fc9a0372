//! HTTP API: elevation, geocoding and flood risk endpoints.

mod elevation;
mod error;
mod geocode;
mod risk;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{FromRequestParts, Query},
    http::HeaderValue,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{Config, CorsConfig, UpstreamConfig};
use crate::elevation::{
    BatchElevationProvider, ElevationChain, ElevationProvider, OpenElevation, OpenMeteo,
};
use crate::geocode::{Geocoder, Nominatim};
use crate::http::build_client;
use crate::models::GeoPoint;

pub use error::ApiError;

const UNIT_METERS: &str = "meters";

/// Application state shared across handlers
pub struct AppState {
    /// Single lookups: primary source first, then fallbacks
    pub elevation: ElevationChain,
    pub batch_elevation: Arc<dyn BatchElevationProvider>,
    pub geocoder: Arc<dyn Geocoder>,
}

impl AppState {
    /// Wire up the public upstream services.
    pub fn from_config(upstream: &UpstreamConfig) -> Result<Self> {
        let lookup_client = build_client(&upstream.user_agent, upstream.lookup_timeout())?;
        let batch_client = build_client(&upstream.user_agent, upstream.batch_timeout())?;

        let providers: Vec<Arc<dyn ElevationProvider>> = vec![
            Arc::new(OpenElevation::new(
                lookup_client.clone(),
                upstream.open_elevation_url.clone(),
            )),
            Arc::new(OpenMeteo::new(
                lookup_client.clone(),
                upstream.open_meteo_url.clone(),
            )),
        ];

        let geocoder = Nominatim::new(lookup_client, &upstream.nominatim_url)
            .context("Invalid Nominatim URL")?;

        Ok(Self {
            elevation: ElevationChain::new(providers),
            batch_elevation: Arc::new(OpenMeteo::new(
                batch_client,
                upstream.open_meteo_url.clone(),
            )),
            geocoder: Arc::new(geocoder),
        })
    }
}

/// Build the full router from startup configuration.
pub fn app(config: &Config) -> Result<Router> {
    let state = AppState::from_config(&config.upstream)?;
    router(Arc::new(state), &config.cors)
}

/// Build the router around already constructed providers.
pub fn router(state: Arc<AppState>, cors: &CorsConfig) -> Result<Router> {
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/elevation", get(elevation::elevation_handler))
        .route("/api/elevation/batch", get(elevation::batch_handler))
        .route("/api/geocode", get(geocode::geocode_handler))
        .route("/api/reverse-geocode", get(geocode::reverse_handler))
        .route("/api/risk", get(risk::risk_handler))
        .route("/api/risk/summary", get(risk::summary_handler))
        .layer(cors_layer(cors)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Credentialed CORS for an explicit origin list. Methods and headers are
/// mirrored since wildcards are not allowed alongside credentials.
fn cors_layer(cors: &CorsConfig) -> Result<CorsLayer> {
    let origins = cors
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin '{}'", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// `Query` that rejects with the JSON error body instead of plain text
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub(crate) struct ApiQuery<T>(pub(crate) T);

#[derive(Deserialize)]
pub(crate) struct PointParams {
    lat: f64,
    lng: f64,
}

impl PointParams {
    fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Service index
async fn index_handler() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Climate Risk Assessment API",
        "health": "/health",
        "endpoints": {
            "elevation": "/api/elevation?lat={lat}&lng={lng}",
            "elevation_batch": "/api/elevation/batch?coordinates={lat},{lng}|{lat},{lng}",
            "geocode": "/api/geocode?address={address}",
            "reverse_geocode": "/api/reverse-geocode?lat={lat}&lng={lng}",
            "risk": "/api/risk?lat={lat}&lng={lng}&sea_level_rise={meters}",
            "risk_summary": "/api/risk/summary?lat={lat}&lng={lng}"
        }
    }))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Health check endpoint
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
