//! Open-Meteo HTTP client
//!
//! One lookup is two sequential GETs (geocode, then forecast). There is no
//! retry or backoff; any failure ends the lookup.

use std::time::Duration;

use reqwest::Url;
use tracing::{debug, info};

use super::report::{Place, WeatherReport};
use super::WeatherError;
use crate::config::WeatherConfig;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("pocketphone/", env!("CARGO_PKG_VERSION"));

/// Async weather client
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    geocode_url: String,
    forecast_url: String,
}

impl WeatherClient {
    /// Creates a client from the weather configuration
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(config, http))
    }

    /// Creates a client around a prebuilt `reqwest` client
    #[must_use]
    pub fn with_client(config: &WeatherConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            geocode_url: config.geocode_url.clone(),
            forecast_url: config.forecast_url.clone(),
        }
    }

    /// Geocoding request URL for a city query
    pub fn geocode_url(&self, query: &str) -> Result<Url, WeatherError> {
        Url::parse_with_params(
            &self.geocode_url,
            &[
                ("name", query.trim()),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ],
        )
        .map_err(|e| WeatherError::InvalidUrl(e.to_string()))
    }

    /// Forecast request URL for coordinates
    pub fn forecast_url(&self, latitude: f64, longitude: f64) -> Result<Url, WeatherError> {
        let latitude = format!("{latitude:.6}");
        let longitude = format!("{longitude:.6}");
        Url::parse_with_params(
            &self.forecast_url,
            &[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current_weather", "true"),
                ("daily", "temperature_2m_max,temperature_2m_min"),
                ("timezone", "auto"),
            ],
        )
        .map_err(|e| WeatherError::InvalidUrl(e.to_string()))
    }

    /// Performs one GET and returns the body text
    pub async fn get(&self, url: Url) -> Result<String, WeatherError> {
        debug!(%url, "GET");
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(WeatherError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp.text().await?)
    }

    /// Geocodes `query` and fetches its current weather
    pub async fn lookup(&self, query: &str) -> Result<WeatherReport, WeatherError> {
        if query.trim().is_empty() {
            return Err(WeatherError::BlankQuery);
        }

        let geo = self.get(self.geocode_url(query)?).await?;
        let place = Place::from_geocode(&geo, query)?;
        info!(place = %place.name, place.latitude, place.longitude, "geocoded");

        let forecast = self
            .get(self.forecast_url(place.latitude, place.longitude)?)
            .await?;
        Ok(WeatherReport::from_forecast(place, &forecast))
    }
}
