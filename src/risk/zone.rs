//! FEMA-style flood zone classification.

use serde::Serialize;

use crate::models::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FloodZone {
    /// Coastal high hazard
    #[serde(rename = "V")]
    V,
    /// 100-year flood zone with base flood elevation
    #[serde(rename = "AE")]
    AE,
    /// 100-year flood zone
    #[serde(rename = "A")]
    A,
    /// 500-year flood zone
    #[serde(rename = "X-SHADED")]
    XShaded,
    /// Minimal flood hazard
    #[serde(rename = "X")]
    X,
}

impl FloodZone {
    pub fn code(&self) -> &'static str {
        match self {
            FloodZone::V => "V",
            FloodZone::AE => "AE",
            FloodZone::A => "A",
            FloodZone::XShaded => "X-SHADED",
            FloodZone::X => "X",
        }
    }
}

impl std::fmt::Display for FloodZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Classify a property into a flood zone by elevation alone.
///
/// `distance_to_coast` is accepted so callers can pass it once it exists, but
/// it does not affect the result yet.
pub fn get_flood_zone_classification(elevation: f64, _distance_to_coast: Option<f64>) -> FloodZone {
    if elevation < 0.0 {
        FloodZone::V
    } else if elevation < 2.0 {
        FloodZone::AE
    } else if elevation < 5.0 {
        FloodZone::A
    } else if elevation < 10.0 {
        FloodZone::XShaded
    } else {
        FloodZone::X
    }
}

/// Distance to the nearest coastline in kilometers.
///
/// No coastline dataset is loaded, so this is always unknown.
pub fn calculate_distance_to_coast(_point: GeoPoint) -> Option<f64> {
    None
}
