//! Command handlers
//!
//! Each handler module contains:
//! - The execution logic for a CLI command
//! - Pure helpers that build its output
//! - Tests for those helpers

pub mod calc;
pub mod home;
pub mod notes;
pub mod wallpaper;
pub mod weather;

pub use calc::{execute_calc, replay};
pub use home::execute_home;
pub use notes::execute_notes;
pub use wallpaper::execute_wallpaper;
pub use weather::execute_weather;
