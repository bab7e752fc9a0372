//! Elevation provider trait and the ordered fallback chain.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::ProviderError;
use crate::models::GeoPoint;

/// A source of ground elevation for a single point.
#[async_trait]
pub trait ElevationProvider: Send + Sync {
    /// Stable identifier reported back to clients as the data source
    fn name(&self) -> &'static str;

    /// Elevation in meters above mean sea level
    async fn elevation(&self, point: GeoPoint) -> Result<f64, ProviderError>;
}

/// A source that can look up many points in one request.
#[async_trait]
pub trait BatchElevationProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// One entry per requested point, in request order. Points the upstream
    /// did not answer for are `None`.
    async fn elevations(&self, points: &[GeoPoint]) -> Result<Vec<Option<f64>>, ProviderError>;
}

/// Elevation value together with the provider that supplied it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationReading {
    pub value: f64,
    pub source: &'static str,
}

/// Tries providers in order; the first success wins.
#[derive(Clone)]
pub struct ElevationChain {
    providers: Vec<Arc<dyn ElevationProvider>>,
}

impl ElevationChain {
    pub fn new(providers: Vec<Arc<dyn ElevationProvider>>) -> Self {
        Self { providers }
    }

    /// Look up elevation, falling back through the chain sequentially.
    pub async fn fetch_elevation(&self, point: GeoPoint) -> Result<ElevationReading, ProviderError> {
        for provider in &self.providers {
            match provider.elevation(point).await {
                Ok(value) => {
                    debug!("{} elevation at {}: {}m", provider.name(), point, value);
                    return Ok(ElevationReading {
                        value,
                        source: provider.name(),
                    });
                }
                Err(e) => {
                    warn!("{} elevation lookup failed for {}: {}", provider.name(), point, e);
                }
            }
        }

        Err(ProviderError::Unavailable("elevation"))
    }
}
