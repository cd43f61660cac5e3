//! Error types for the phone library

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::weather::WeatherError;

/// Result type for library operations
pub type PhoneResult<T> = Result<T, PhoneError>;

/// Errors surfaced by the collaborator apps.
///
/// The calculator itself never fails; its only failure (divide by zero) is
/// rendered as the `"Error"` display.
#[derive(Debug, Error)]
pub enum PhoneError {
    /// Filesystem error while reading or writing app data
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Character in a key sequence that is not a calculator key
    #[error("Invalid calculator key '{key}' at position {position}")]
    InvalidKey {
        /// Offending character
        key: char,
        /// Character index in the sequence
        position: usize,
    },

    /// Built-in wallpaper name not in the catalog
    #[error("Unknown wallpaper '{name}'")]
    UnknownWallpaper {
        /// Requested name
        name: String,
    },

    /// Wallpaper image could not be probed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Weather lookup failed
    #[error(transparent)]
    Weather(#[from] WeatherError),

    /// Terminal setup, drawing, or event read failed
    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),
}

impl PhoneError {
    /// Wraps an I/O error with the path it happened on
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown-wallpaper error
    #[must_use]
    pub fn unknown_wallpaper(name: impl Into<String>) -> Self {
        Self::UnknownWallpaper { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = PhoneError::io(
            "/tmp/notes.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/notes.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_config_error() {
        let err = PhoneError::config("bad yaml");
        assert_eq!(err.to_string(), "Configuration error: bad yaml");
    }

    #[test]
    fn test_invalid_key_error() {
        let err = PhoneError::InvalidKey {
            key: 'q',
            position: 3,
        };
        assert_eq!(err.to_string(), "Invalid calculator key 'q' at position 3");
    }

    #[test]
    fn test_unknown_wallpaper_error() {
        let err = PhoneError::unknown_wallpaper("Nope");
        assert!(err.to_string().contains("Nope"));
    }

    #[test]
    fn test_weather_error_is_transparent() {
        let err: PhoneError = WeatherError::CityNotFound.into();
        assert_eq!(err.to_string(), "City not found.");
    }

    #[test]
    fn test_terminal_error_has_source() {
        use std::error::Error as _;
        let err = PhoneError::Terminal(std::io::Error::other("no tty"));
        assert_eq!(err.to_string(), "Terminal error: no tty");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(PhoneError::config("x"));
        assert!(err.to_string().contains("Configuration"));
    }
}
