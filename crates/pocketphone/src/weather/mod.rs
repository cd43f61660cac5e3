//! Weather lookups against Open-Meteo
//!
//! The parsing half (field extraction, WMO conditions, report model) is
//! always available. The HTTP client lives behind the `weather` feature.

mod condition;
pub mod extract;
mod report;

#[cfg(feature = "weather")]
mod client;

use thiserror::Error;

pub use condition::Condition;
pub use report::{format_temperature, Place, WeatherReport};

#[cfg(feature = "weather")]
pub use client::{WeatherClient, USER_AGENT};

/// Weather lookup errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Query was empty or whitespace
    #[error("Please enter a city name.")]
    BlankQuery,

    /// Geocoding returned no coordinates
    #[error("City not found.")]
    CityNotFound,

    /// Base URL in the configuration is not a valid URL
    #[error("Invalid weather URL: {0}")]
    InvalidUrl(String),

    /// Server answered with a non-success status
    #[error("Weather service returned HTTP {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Transport failure (connect, timeout, body read)
    #[cfg(feature = "weather")]
    #[error("Weather request failed: {0}")]
    Http(#[from] reqwest::Error),
}
