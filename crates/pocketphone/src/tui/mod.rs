//! Terminal phone
//!
//! - `app`: screen state and actions
//! - `input`: key events to actions, per screen
//! - `keypad`: calculator keypad with hit testing
//! - `ui`: ratatui rendering
//! - `runner`: crossterm setup and the event loop

mod app;
mod input;
mod keypad;
mod runner;
mod ui;

pub use app::{PhoneApp, Screen, WeatherRequest, WeatherStatus, NUDGE_STEP};
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use runner::{handle_event, run};
pub use ui::{keypad_area, render, PhoneLayout, PhoneUI, PHONE_COLS, PHONE_ROWS};
