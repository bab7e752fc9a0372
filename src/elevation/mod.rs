//! Elevation lookups against public DEM services.

mod open_elevation;
mod open_meteo;
mod provider;

pub use open_elevation::OpenElevation;
pub use open_meteo::OpenMeteo;
pub use provider::{BatchElevationProvider, ElevationChain, ElevationProvider, ElevationReading};
