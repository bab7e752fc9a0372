//! Flood risk assessment.
//!
//! Pure functions only: no I/O, safe to call from any number of requests at
//! once.

mod calculator;
mod summary;
mod zone;

pub use calculator::{calculate_flood_risk, RiskAssessment, RiskLevel};
pub use summary::{summarize_scenarios, ScenarioSummary, SUMMARY_SCENARIOS};
pub use zone::{calculate_distance_to_coast, get_flood_zone_classification, FloodZone};
