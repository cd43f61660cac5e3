//! Pocketphone - a smartphone home screen for the terminal
//!
//! A launcher grid with a status bar clock and four working apps:
//!
//! - **Calculator**: a four-function engine with left-to-right chaining
//! - **Notes**: timestamped one-line notes kept in a text file
//! - **Weather**: Open-Meteo geocoding and current conditions
//! - **Settings**: wallpaper choice with cover-fit layout
//!
//! # Example
//!
//! ```rust
//! use pocketphone::prelude::*;
//!
//! let mut calc = CalculatorEngine::new();
//! for key in CalcKey::parse_sequence("2+3×4=").unwrap() {
//!     calc.press(key);
//! }
//! // No precedence: (2 + 3) × 4
//! assert_eq!(calc.display(), "20");
//!
//! calc.clear_all();
//! for key in CalcKey::parse_sequence("7/0=").unwrap() {
//!     calc.press(key);
//! }
//! assert_eq!(calc.display(), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod calculator;
pub mod config;
pub mod error;
pub mod home;
pub mod notes;
pub mod wallpaper;
pub mod weather;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::{CalcKey, CalculatorEngine, EngineState, Operation, Readout};
    pub use crate::config::{PhoneConfig, WeatherConfig};
    pub use crate::error::{PhoneError, PhoneResult};
    pub use crate::home::{clock_text, HomeApp, HomeScreen};
    pub use crate::notes::{Note, NoteStore};
    pub use crate::wallpaper::{
        cover_fit, image_size, Offset, Placement, Size, WallpaperSettings, WallpaperSource,
        BUILTIN,
    };
    pub use crate::weather::{Condition, Place, WeatherError, WeatherReport};

    #[cfg(feature = "weather")]
    pub use crate::weather::WeatherClient;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_calculator() {
        let mut calc = CalculatorEngine::new();
        calc.digit('5');
        calc.set_operator(Operation::Add);
        calc.digit('3');
        assert_eq!(calc.equals(), "8");
    }

    #[test]
    fn test_prelude_wallpaper_layout() {
        let config = PhoneConfig::default();
        let placement = cover_fit(config.screen, Size::new(840.0, 1640.0), Offset::default());
        assert_eq!(placement.map(|p| p.scale), Some(0.5));
    }

    #[test]
    fn test_prelude_home() {
        assert_eq!(HomeScreen::new().selected(), HomeApp::Calculator);
        assert_eq!(BUILTIN.len(), 3);
    }
}
