//! Terminal event loop
//!
//! The loop is synchronous: it polls crossterm for input with a short
//! timeout. Weather lookups run on a small tokio runtime and report back
//! over an unbounded channel drained once per iteration.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use super::app::{PhoneApp, Screen};
use super::input::InputHandler;
use super::ui::{keypad_area, render};
use crate::config::PhoneConfig;
use crate::error::{PhoneError, PhoneResult};
use crate::weather::{WeatherClient, WeatherError, WeatherReport};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

type LookupResult = (u64, Result<WeatherReport, WeatherError>);

/// Runs the phone until the user quits
pub fn run(config: PhoneConfig) -> PhoneResult<()> {
    let mut app = PhoneApp::new(config)?;
    let client = WeatherClient::new(&app.config().weather)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .map_err(PhoneError::Terminal)?;

    enable_raw_mode().map_err(PhoneError::Terminal)?;
    let mut terminal = or_rollback(enter_screen, disable_raw_mode).map_err(PhoneError::Terminal)?;

    info!("phone started");
    let result = event_loop(&mut terminal, &mut app, &runtime, &client);

    disable_raw_mode().map_err(PhoneError::Terminal)?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(PhoneError::Terminal)?;
    terminal.show_cursor().map_err(PhoneError::Terminal)?;
    info!("phone stopped");

    result.map_err(PhoneError::Terminal)
}

fn enter_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    or_rollback(
        || Terminal::new(CrosstermBackend::new(io::stdout())),
        || execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture),
    )
}

/// Runs `step`; if it fails, runs `rollback` and returns the original error
fn or_rollback<T>(
    step: impl FnOnce() -> io::Result<T>,
    rollback: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    step().or_else(|e| {
        if let Err(undo) = rollback() {
            warn!(error = %undo, "terminal restore failed");
        }
        Err(e)
    })
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut PhoneApp,
    runtime: &Runtime,
    client: &WeatherClient,
) -> io::Result<()> {
    let (tx, mut rx) = unbounded_channel();
    let handler = InputHandler::new();
    let refresh = Duration::from_secs(app.config().clock_refresh_secs.max(1));
    let mut last_tick = Instant::now();

    while !app.should_quit() {
        terminal.draw(|frame| render(app, frame))?;

        if event::poll(POLL_INTERVAL)? {
            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);
            handle_event(app, &handler, &event::read()?, area);
        }

        spawn_lookup(app, runtime, client, &tx);
        drain_results(app, &mut rx);

        if last_tick.elapsed() >= refresh {
            app.tick_clock(Local::now());
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Applies one terminal event; `area` is the terminal size
pub fn handle_event(app: &mut PhoneApp, handler: &InputHandler, event: &Event, area: Rect) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            let action = handler.handle_key(app.screen(), *key);
            app.handle_action(action, Local::now());
        }
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) if app.screen() == Screen::Calculator => {
            if let Some(index) = app.keypad().hit_test(keypad_area(area), *column, *row) {
                app.click_keypad(index);
            }
        }
        _ => {}
    }
}

fn spawn_lookup(
    app: &mut PhoneApp,
    runtime: &Runtime,
    client: &WeatherClient,
    tx: &UnboundedSender<LookupResult>,
) {
    let Some(request) = app.take_weather_request() else {
        return;
    };
    info!(city = %request.city, id = request.id, "weather lookup");
    let client = client.clone();
    let tx = tx.clone();
    runtime.spawn(async move {
        let result = client.lookup(&request.city).await;
        if tx.send((request.id, result)).is_err() {
            debug!(id = request.id, "event loop gone, dropping weather result");
        }
    });
}

fn drain_results(app: &mut PhoneApp, rx: &mut UnboundedReceiver<LookupResult>) {
    while let Ok((id, result)) = rx.try_recv() {
        app.finish_weather(id, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::CalcKey;
    use crate::home::HomeApp;
    use crate::tui::app::WeatherStatus;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 34,
    };

    fn app() -> (tempfile::TempDir, PhoneApp) {
        let dir = tempfile::tempdir().unwrap();
        let app = PhoneApp::new(PhoneConfig::new().with_data_dir(dir.path())).unwrap();
        (dir, app)
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_key_press_reaches_app() {
        let (_dir, mut app) = app();
        let handler = InputHandler::new();
        handle_event(&mut app, &handler, &press(KeyCode::Enter), AREA);
        assert_eq!(app.screen(), Screen::Calculator);
        handle_event(&mut app, &handler, &press(KeyCode::Char('4')), AREA);
        assert_eq!(app.calculator().display(), "4");
    }

    #[test]
    fn test_key_release_ignored() {
        let (_dir, mut app) = app();
        let handler = InputHandler::new();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        handle_event(&mut app, &handler, &release, AREA);
        assert_eq!(app.screen(), Screen::Home);
    }

    #[test]
    fn test_click_outside_calculator_ignored() {
        let (_dir, mut app) = app();
        let handler = InputHandler::new();
        let keypad = keypad_area(AREA);
        handle_event(&mut app, &handler, &click(keypad.x + 2, keypad.y + 2), AREA);
        assert_eq!(app.screen(), Screen::Home);
        assert_eq!(app.calculator().display(), "0");
    }

    #[test]
    fn test_click_keypad() {
        let (_dir, mut app) = app();
        let handler = InputHandler::new();
        app.launch(HomeApp::Calculator);

        // Top-left button is C; type a digit first so the clear is visible
        app.press_calc(CalcKey::Digit('9'));
        let keypad = keypad_area(AREA);
        handle_event(&mut app, &handler, &click(keypad.x + 2, keypad.y + 2), AREA);
        assert_eq!(app.calculator().display(), "0");
        assert_eq!(app.keypad().pressed().unwrap().key, CalcKey::Clear);
    }

    #[test]
    fn test_failed_setup_step_rolls_back() {
        let rolled_back = std::cell::Cell::new(false);
        let result: io::Result<()> = or_rollback(
            || Err(io::Error::other("no alternate screen")),
            || {
                rolled_back.set(true);
                Ok(())
            },
        );
        assert_eq!(result.unwrap_err().to_string(), "no alternate screen");
        assert!(rolled_back.get());
    }

    #[test]
    fn test_setup_keeps_original_error_when_restore_fails() {
        let result: io::Result<()> = or_rollback(
            || Err(io::Error::other("backend")),
            || Err(io::Error::other("restore")),
        );
        assert_eq!(result.unwrap_err().to_string(), "backend");
    }

    #[test]
    fn test_successful_setup_skips_rollback() {
        let rolled_back = std::cell::Cell::new(false);
        let value = or_rollback(
            || Ok(7),
            || {
                rolled_back.set(true);
                Ok(())
            },
        )
        .unwrap();
        assert_eq!(value, 7);
        assert!(!rolled_back.get());
    }

    #[test]
    fn test_drain_results() {
        let (_dir, mut app) = app();
        app.launch(HomeApp::Weather);
        for c in "Oslo".chars() {
            app.handle_action(crate::tui::KeyAction::InsertChar(c), Local::now());
        }
        app.submit_weather();
        let request = app.take_weather_request().unwrap();

        let (tx, mut rx) = unbounded_channel();
        tx.send((request.id, Err(WeatherError::CityNotFound))).unwrap();
        drain_results(&mut app, &mut rx);
        assert_eq!(
            app.weather(),
            &WeatherStatus::Failed("City not found.".to_string())
        );
    }
}
