//! Tideline - flood risk under sea level rise scenarios
//!
//! This library provides the risk scoring core, the upstream elevation and
//! geocoding clients, and the HTTP API served by the `tideline-server` binary.

pub mod api;
pub mod config;
pub mod elevation;
pub mod error;
pub mod geocode;
pub mod http;
pub mod models;
pub mod risk;

pub use models::GeoPoint;
pub use risk::{calculate_flood_risk, RiskAssessment, RiskLevel};
