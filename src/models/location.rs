//! Coordinate types shared by the providers and the HTTP layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Geographic point (lat/lng, WGS84 degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateParseError {
    #[error("coordinate list is empty")]
    Empty,

    #[error("expected 'lat,lng' but got '{0}'")]
    MalformedPair(String),

    #[error("invalid number '{value}' in pair '{pair}'")]
    InvalidNumber { pair: String, value: String },
}

/// Parse a batch coordinate list: "lat1,lng1|lat2,lng2|..."
///
/// Every pair must contain exactly two numbers. Whitespace around numbers is
/// tolerated; anything else rejects the whole list.
pub fn parse_coordinate_list(input: &str) -> Result<Vec<GeoPoint>, CoordinateParseError> {
    if input.trim().is_empty() {
        return Err(CoordinateParseError::Empty);
    }

    input
        .split('|')
        .map(|pair| {
            let parts: Vec<&str> = pair.split(',').collect();
            if parts.len() != 2 {
                return Err(CoordinateParseError::MalformedPair(pair.to_string()));
            }

            let parse = |raw: &str| {
                raw.trim()
                    .parse::<f64>()
                    .map_err(|_| CoordinateParseError::InvalidNumber {
                        pair: pair.to_string(),
                        value: raw.to_string(),
                    })
            };

            Ok(GeoPoint::new(parse(parts[0])?, parse(parts[1])?))
        })
        .collect()
}
