//! Place and forecast models built from raw API responses

use serde::{Deserialize, Serialize};

use super::condition::Condition;
use super::extract::{find_integer, find_number, find_string, first_array_number, section};
use super::WeatherError;

/// A geocoded place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Display name, e.g. `"San Diego, United States"`
    pub name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Place {
    /// Reads the first geocoding result.
    ///
    /// Coordinates are required. The name falls back to the trimmed query
    /// and the country is appended when present.
    pub fn from_geocode(json: &str, query: &str) -> Result<Self, WeatherError> {
        let (Some(latitude), Some(longitude)) =
            (find_number(json, "latitude"), find_number(json, "longitude"))
        else {
            return Err(WeatherError::CityNotFound);
        };

        let base = find_string(json, "name").unwrap_or_else(|| query.trim());
        let name = match find_string(json, "country") {
            Some(country) => format!("{base}, {country}"),
            None => base.to_string(),
        };

        Ok(Self {
            name,
            latitude,
            longitude,
        })
    }
}

/// Current conditions plus today's range for one place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Where the forecast is for
    pub place: Place,
    /// Current temperature in °C
    pub temperature_c: Option<f64>,
    /// Current sky condition
    pub condition: Option<Condition>,
    /// Current wind speed in km/h
    pub wind_kmh: Option<f64>,
    /// Today's high in °C
    pub high_c: Option<f64>,
    /// Today's low in °C
    pub low_c: Option<f64>,
}

impl WeatherReport {
    /// Reads a forecast response.
    ///
    /// Current values come from the `current_weather` object only; a
    /// response without it still yields the daily range.
    #[must_use]
    pub fn from_forecast(place: Place, json: &str) -> Self {
        let current = section(json, "current_weather");
        Self {
            place,
            temperature_c: current.and_then(|cw| find_number(cw, "temperature")),
            condition: current
                .and_then(|cw| find_integer(cw, "weathercode"))
                .map(Condition::from_code),
            wind_kmh: current.and_then(|cw| find_number(cw, "windspeed")),
            high_c: first_array_number(json, "temperature_2m_max"),
            low_c: first_array_number(json, "temperature_2m_min"),
        }
    }

    /// Current temperature line, e.g. `"72°F"`
    #[must_use]
    pub fn temperature_line(&self) -> Option<String> {
        self.temperature_c.map(format_temperature)
    }

    /// Condition line, e.g. `"Partly cloudy"`
    #[must_use]
    pub fn condition_line(&self) -> Option<String> {
        self.condition.map(|c| c.label().to_string())
    }

    /// Wind line, e.g. `"Wind: 12 km/h"`
    #[must_use]
    pub fn wind_line(&self) -> Option<String> {
        self.wind_kmh
            .map(|w| format!("Wind: {:.0} km/h", w.round()))
    }

    /// High/low line; only when both ends are known
    #[must_use]
    pub fn range_line(&self) -> Option<String> {
        match (self.high_c, self.low_c) {
            (Some(high), Some(low)) => Some(format!(
                "Today — High: {}   Low: {}",
                format_temperature(high),
                format_temperature(low)
            )),
            _ => None,
        }
    }

    /// All display lines in screen order, skipping unknown values
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(Some(self.place.name.clone()))
            .chain([
                self.temperature_line(),
                self.condition_line(),
                self.range_line(),
                self.wind_line(),
            ])
            .flatten()
            .collect()
    }
}

/// Renders a Celsius value as whole degrees Fahrenheit
#[must_use]
pub fn format_temperature(celsius: f64) -> String {
    let fahrenheit = celsius * 9.0 / 5.0 + 32.0;
    format!("{:.0}°F", fahrenheit.round())
}
