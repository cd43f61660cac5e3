//! Keyboard input handling
//!
//! Key events are mapped per screen: the same key can type text in Notes
//! and move the cursor on the home screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::Screen;
use crate::calculator::CalcKey;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the application
    Quit,
    /// Return to the home screen
    Back,
    /// Move up (cursor, selection, or offset)
    Up,
    /// Move down
    Down,
    /// Move left
    Left,
    /// Move right
    Right,
    /// Enter: launch, add, search, or apply
    Activate,
    /// Press a calculator key
    Calc(CalcKey),
    /// Type a character into the text field
    InsertChar(char),
    /// Delete the character before the cursor
    Backspace,
    /// Delete the selected item
    Delete,
    /// Write to disk
    Save,
    /// Cycle to the next choice
    Next,
    /// Reset the wallpaper offset
    Reset,
    /// No action (ignored input)
    None,
}

/// Maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a key event on `screen` to an action
    #[must_use]
    pub fn handle_key(&self, screen: Screen, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('s') => KeyAction::Save,
                _ => KeyAction::None,
            };
        }

        if code == KeyCode::Esc {
            return if screen == Screen::Home {
                KeyAction::None
            } else {
                KeyAction::Back
            };
        }

        match screen {
            Screen::Home => Self::home_key(code),
            Screen::Calculator => Self::calculator_key(code),
            Screen::Notes | Screen::Weather => Self::text_key(screen, code),
            Screen::Settings => Self::settings_key(code),
        }
    }

    fn home_key(code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::Up,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::Down,
            KeyCode::Left | KeyCode::Char('h') => KeyAction::Left,
            KeyCode::Right | KeyCode::Char('l') => KeyAction::Right,
            KeyCode::Enter => KeyAction::Activate,
            _ => KeyAction::None,
        }
    }

    fn calculator_key(code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char(c) => CalcKey::from_char(c).map_or(KeyAction::None, KeyAction::Calc),
            KeyCode::Enter => KeyAction::Calc(CalcKey::Equals),
            KeyCode::Delete | KeyCode::Backspace => KeyAction::Calc(CalcKey::Clear),
            _ => KeyAction::None,
        }
    }

    fn text_key(screen: Screen, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char(c) => KeyAction::InsertChar(c),
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Enter => KeyAction::Activate,
            KeyCode::Up if screen == Screen::Notes => KeyAction::Up,
            KeyCode::Down if screen == Screen::Notes => KeyAction::Down,
            KeyCode::Delete if screen == Screen::Notes => KeyAction::Delete,
            _ => KeyAction::None,
        }
    }

    fn settings_key(code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Tab => KeyAction::Next,
            KeyCode::Enter => KeyAction::Activate,
            KeyCode::Up => KeyAction::Up,
            KeyCode::Down => KeyAction::Down,
            KeyCode::Left => KeyAction::Left,
            KeyCode::Right => KeyAction::Right,
            KeyCode::Char('r') => KeyAction::Reset,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn handle(screen: Screen, event: KeyEvent) -> KeyAction {
        InputHandler::new().handle_key(screen, event)
    }

    // ===== Global keys =====

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for screen in Screen::ALL {
            assert_eq!(handle(screen, ctrl('c')), KeyAction::Quit);
        }
    }

    #[test]
    fn test_ctrl_s_saves() {
        assert_eq!(handle(Screen::Notes, ctrl('s')), KeyAction::Save);
    }

    #[test]
    fn test_esc_goes_back_except_home() {
        assert_eq!(handle(Screen::Home, key(KeyCode::Esc)), KeyAction::None);
        for screen in [Screen::Calculator, Screen::Notes, Screen::Weather, Screen::Settings] {
            assert_eq!(handle(screen, key(KeyCode::Esc)), KeyAction::Back);
        }
    }

    // ===== Home =====

    #[test]
    fn test_home_navigation() {
        assert_eq!(handle(Screen::Home, key(KeyCode::Up)), KeyAction::Up);
        assert_eq!(handle(Screen::Home, key(KeyCode::Char('l'))), KeyAction::Right);
        assert_eq!(handle(Screen::Home, key(KeyCode::Enter)), KeyAction::Activate);
        assert_eq!(handle(Screen::Home, key(KeyCode::Char('q'))), KeyAction::Quit);
    }

    // ===== Calculator =====

    #[test]
    fn test_calculator_keys() {
        let s = Screen::Calculator;
        assert_eq!(
            handle(s, key(KeyCode::Char('7'))),
            KeyAction::Calc(CalcKey::Digit('7'))
        );
        assert_eq!(
            handle(s, key(KeyCode::Char('*'))),
            KeyAction::Calc(CalcKey::Operator(Operation::Multiply))
        );
        assert_eq!(handle(s, key(KeyCode::Enter)), KeyAction::Calc(CalcKey::Equals));
        assert_eq!(handle(s, key(KeyCode::Delete)), KeyAction::Calc(CalcKey::Clear));
        assert_eq!(handle(s, key(KeyCode::Char('q'))), KeyAction::None);
    }

    // ===== Text screens =====

    #[test]
    fn test_notes_typing() {
        let s = Screen::Notes;
        assert_eq!(handle(s, key(KeyCode::Char('q'))), KeyAction::InsertChar('q'));
        assert_eq!(handle(s, key(KeyCode::Backspace)), KeyAction::Backspace);
        assert_eq!(handle(s, key(KeyCode::Enter)), KeyAction::Activate);
        assert_eq!(handle(s, key(KeyCode::Delete)), KeyAction::Delete);
        assert_eq!(handle(s, key(KeyCode::Down)), KeyAction::Down);
    }

    #[test]
    fn test_weather_has_no_list_keys() {
        let s = Screen::Weather;
        assert_eq!(handle(s, key(KeyCode::Char('x'))), KeyAction::InsertChar('x'));
        assert_eq!(handle(s, key(KeyCode::Up)), KeyAction::None);
        assert_eq!(handle(s, key(KeyCode::Delete)), KeyAction::None);
    }

    // ===== Settings =====

    #[test]
    fn test_settings_keys() {
        let s = Screen::Settings;
        assert_eq!(handle(s, key(KeyCode::Tab)), KeyAction::Next);
        assert_eq!(handle(s, key(KeyCode::Enter)), KeyAction::Activate);
        assert_eq!(handle(s, key(KeyCode::Left)), KeyAction::Left);
        assert_eq!(handle(s, key(KeyCode::Char('r'))), KeyAction::Reset);
        assert_eq!(handle(s, key(KeyCode::Char('q'))), KeyAction::None);
    }
}
