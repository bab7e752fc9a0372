//! Core data models shared across providers and the API.

pub mod location;

pub use location::{parse_coordinate_list, CoordinateParseError, GeoPoint};
