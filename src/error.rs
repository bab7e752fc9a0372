//! Errors raised by upstream data providers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Every configured source failed or returned nothing usable
    #[error("no provider could supply {0}")]
    Unavailable(&'static str),

    #[error("{provider} timed out")]
    Timeout { provider: &'static str },

    #[error("{provider} responded with status {status}")]
    Status { provider: &'static str, status: u16 },

    #[error("{provider} returned no usable data")]
    Empty { provider: &'static str },

    #[error("{provider} returned malformed data: {message}")]
    Malformed {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} request failed: {source}")]
    Request {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ProviderError {
    /// Wrap a transport error, keeping timeouts distinguishable.
    pub fn from_reqwest(provider: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout { provider }
        } else {
            ProviderError::Request {
                provider,
                source: err,
            }
        }
    }
}
