//! Phone configuration
//!
//! Everything lives under one data directory (`~/.pocketphone` by default).
//! An optional `config.yaml` there overrides the defaults below.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PhoneError, PhoneResult};
use crate::wallpaper::Size;

/// Environment variable the CLI reads for `--data-dir`
pub const DATA_DIR_ENV: &str = "POCKETPHONE_DATA_DIR";

/// Config file name inside the data directory
pub const CONFIG_FILE: &str = "config.yaml";

const NOTES_FILE: &str = "notes.txt";
const SETTINGS_FILE: &str = "settings.txt";
const LOG_FILE: &str = "pocketphone.log";

/// Default screen width in pixels
pub const SCREEN_WIDTH: f64 = 420.0;

/// Default screen height in pixels
pub const SCREEN_HEIGHT: f64 = 820.0;

/// `~/.pocketphone`, or `./.pocketphone` when there is no home directory
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pocketphone")
}

/// Open-Meteo endpoints and HTTP timeouts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Geocoding search endpoint
    pub geocode_url: String,
    /// Forecast endpoint
    pub forecast_url: String,
    /// TCP connect timeout
    pub connect_timeout_secs: u64,
    /// Whole-request timeout
    pub request_timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocode_url: "https://geocoding-api.open-meteo.com/v1/search".to_string(),
            forecast_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            connect_timeout_secs: 8,
            request_timeout_secs: 12,
        }
    }
}

/// Phone configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneConfig {
    /// Data directory; always the directory the config was loaded from
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Wallpaper assets; `<data_dir>/assets` when unset
    pub assets_dir: Option<PathBuf>,
    /// Screen size used for wallpaper layout
    pub screen: Size,
    /// Weather service settings
    pub weather: WeatherConfig,
    /// Status bar clock refresh period
    pub clock_refresh_secs: u64,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            assets_dir: None,
            screen: Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            weather: WeatherConfig::default(),
            clock_refresh_secs: 30,
        }
    }
}

impl PhoneConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `<data_dir>/config.yaml`, falling back to defaults when absent
    pub fn load(data_dir: Option<&Path>) -> PhoneResult<Self> {
        let data_dir = data_dir.map_or_else(default_data_dir, Path::to_path_buf);
        let path = data_dir.join(CONFIG_FILE);

        let config = match fs::read_to_string(&path) {
            Ok(text) => serde_yaml_ng::from_str::<Self>(&text)
                .map_err(|e| PhoneError::config(format!("{}: {e}", path.display())))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(?path, "no config file, using defaults");
                Self::default()
            }
            Err(e) => return Err(PhoneError::io(&path, e)),
        };
        Ok(config.with_data_dir(data_dir))
    }

    /// Set data directory
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set assets directory
    #[must_use]
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = Some(dir.into());
        self
    }

    /// Set screen size
    #[must_use]
    pub const fn with_screen(mut self, screen: Size) -> Self {
        self.screen = screen;
        self
    }

    /// Set weather settings
    #[must_use]
    pub fn with_weather(mut self, weather: WeatherConfig) -> Self {
        self.weather = weather;
        self
    }

    /// Set clock refresh period
    #[must_use]
    pub const fn with_clock_refresh_secs(mut self, secs: u64) -> Self {
        self.clock_refresh_secs = secs;
        self
    }

    /// Wallpaper assets directory
    #[must_use]
    pub fn assets_dir(&self) -> PathBuf {
        self.assets_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join("assets"))
    }

    /// Notes file
    #[must_use]
    pub fn notes_path(&self) -> PathBuf {
        self.data_dir.join(NOTES_FILE)
    }

    /// Wallpaper settings file
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }

    /// Log file used while the TUI owns the terminal
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}
