//! TUI application state
//!
//! All state is synchronous. The one asynchronous operation, a weather
//! lookup, is handed out through [`PhoneApp::take_weather_request`] and its
//! result comes back through [`PhoneApp::finish_weather`].

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::calculator::{CalcKey, CalculatorEngine};
use crate::config::PhoneConfig;
use crate::error::{PhoneError, PhoneResult};
use crate::home::{clock_text, HomeApp, HomeScreen, DEMO_ONLY};
use crate::notes::NoteStore;
use crate::wallpaper::{
    cover_fit, image_size, Offset, Placement, Size, WallpaperSettings, WallpaperSource, BUILTIN,
};
use crate::weather::{WeatherError, WeatherReport};

/// Wallpaper nudge per arrow key, in pixels
pub const NUDGE_STEP: f64 = 10.0;

/// Which screen the phone shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Launcher grid
    #[default]
    Home,
    /// Calculator app
    Calculator,
    /// Notes app
    Notes,
    /// Weather app
    Weather,
    /// Wallpaper settings
    Settings,
}

impl Screen {
    /// All screens
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Calculator,
        Self::Notes,
        Self::Weather,
        Self::Settings,
    ];

    /// Screen title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Calculator => "Calculator",
            Self::Notes => "Notes",
            Self::Weather => "Weather",
            Self::Settings => "Settings",
        }
    }

    /// Screen behind a launcher tile; `None` for demo-only tiles
    #[must_use]
    pub const fn for_app(app: HomeApp) -> Option<Self> {
        match app {
            HomeApp::Calculator => Some(Self::Calculator),
            HomeApp::Notes => Some(Self::Notes),
            HomeApp::Weather => Some(Self::Weather),
            HomeApp::Settings => Some(Self::Settings),
            HomeApp::Clock | HomeApp::Music | HomeApp::Mail | HomeApp::Photos => None,
        }
    }
}

/// Weather screen status
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WeatherStatus {
    /// Nothing searched yet
    #[default]
    Idle,
    /// Lookup in flight for this city
    Searching(String),
    /// Lookup finished
    Ready(WeatherReport),
    /// Lookup failed with this message
    Failed(String),
}

/// A weather lookup waiting to be started
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    /// Sequence number; only the latest request's result is shown
    pub id: u64,
    /// City query
    pub city: String,
}

/// Phone application state
#[derive(Debug)]
pub struct PhoneApp {
    config: PhoneConfig,
    screen: Screen,
    home: HomeScreen,
    calculator: CalculatorEngine,
    keypad: Keypad,
    notes: NoteStore,
    note_input: String,
    note_selected: usize,
    weather_input: String,
    weather: WeatherStatus,
    weather_request: Option<WeatherRequest>,
    weather_seq: u64,
    wallpaper_settings: WallpaperSettings,
    wallpaper: Option<WallpaperSource>,
    wallpaper_size: Option<Size>,
    wallpaper_choice: usize,
    offset: Offset,
    message: Option<String>,
    clock: String,
    should_quit: bool,
}

impl PhoneApp {
    /// Opens the notes file and the saved wallpaper from `config`
    pub fn new(config: PhoneConfig) -> PhoneResult<Self> {
        let notes = NoteStore::open(config.notes_path())?;
        let wallpaper_settings = WallpaperSettings::new(config.settings_path());
        let wallpaper = wallpaper_settings.load();

        let mut app = Self {
            config,
            screen: Screen::Home,
            home: HomeScreen::new(),
            calculator: CalculatorEngine::new(),
            keypad: Keypad::new(),
            notes,
            note_input: String::new(),
            note_selected: 0,
            weather_input: String::new(),
            weather: WeatherStatus::Idle,
            weather_request: None,
            weather_seq: 0,
            wallpaper_settings,
            wallpaper: None,
            wallpaper_size: None,
            wallpaper_choice: 0,
            offset: Offset::default(),
            message: None,
            clock: clock_text(&Local::now()),
            should_quit: false,
        };
        if let Some(source) = wallpaper {
            app.show_wallpaper(source);
        }
        Ok(app)
    }

    // ===== Accessors =====

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &PhoneConfig {
        &self.config
    }

    /// Current screen
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// Launcher cursor
    #[must_use]
    pub const fn home(&self) -> &HomeScreen {
        &self.home
    }

    /// Calculator engine
    #[must_use]
    pub const fn calculator(&self) -> &CalculatorEngine {
        &self.calculator
    }

    /// Calculator keypad with highlight state
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Note store
    #[must_use]
    pub const fn notes(&self) -> &NoteStore {
        &self.notes
    }

    /// Text typed into the note field
    #[must_use]
    pub fn note_input(&self) -> &str {
        &self.note_input
    }

    /// Selected note index
    #[must_use]
    pub const fn note_selected(&self) -> usize {
        self.note_selected
    }

    /// Text typed into the city field
    #[must_use]
    pub fn weather_input(&self) -> &str {
        &self.weather_input
    }

    /// Weather screen status
    #[must_use]
    pub const fn weather(&self) -> &WeatherStatus {
        &self.weather
    }

    /// Wallpaper currently shown
    #[must_use]
    pub const fn wallpaper(&self) -> Option<&WallpaperSource> {
        self.wallpaper.as_ref()
    }

    /// Built-in highlighted in settings
    #[must_use]
    pub const fn wallpaper_choice(&self) -> usize {
        self.wallpaper_choice
    }

    /// Wallpaper nudge
    #[must_use]
    pub const fn offset(&self) -> Offset {
        self.offset
    }

    /// Cover-fit placement of the current wallpaper on the phone screen
    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        cover_fit(self.config.screen, self.wallpaper_size?, self.offset)
    }

    /// Info or error line
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Status bar clock text
    #[must_use]
    pub fn clock(&self) -> &str {
        &self.clock
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ===== Actions =====

    /// Applies one input action
    pub fn handle_action(&mut self, action: KeyAction, now: DateTime<Local>) {
        if action == KeyAction::None {
            return;
        }
        self.message = None;

        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Back => self.go_home(),
            _ => match self.screen {
                Screen::Home => self.home_action(action),
                Screen::Calculator => {
                    if let KeyAction::Calc(key) = action {
                        self.press_calc(key);
                    }
                }
                Screen::Notes => self.notes_action(action, now),
                Screen::Weather => self.weather_action(action),
                Screen::Settings => self.settings_action(action),
            },
        }
    }

    /// Returns to the launcher
    pub fn go_home(&mut self) {
        self.keypad.release_all();
        self.screen = Screen::Home;
    }

    /// Opens a launcher tile
    pub fn launch(&mut self, app: HomeApp) {
        self.home.select(app);
        match Screen::for_app(app) {
            Some(screen) => {
                debug!(?screen, "launch");
                self.screen = screen;
            }
            None => self.message = Some(DEMO_ONLY.to_string()),
        }
    }

    /// Sends a key to the calculator and highlights its button
    pub fn press_calc(&mut self, key: CalcKey) {
        self.keypad.highlight(key);
        self.calculator.press(key);
    }

    /// Presses the keypad button at `index` (mouse click)
    pub fn click_keypad(&mut self, index: usize) {
        if let Some(key) = self.keypad.get_button(index).map(|b| b.key) {
            self.press_calc(key);
        }
    }

    /// Updates the status bar clock
    pub fn tick_clock(&mut self, now: DateTime<Local>) {
        self.clock = clock_text(&now);
    }

    fn home_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Up => self.home.move_up(),
            KeyAction::Down => self.home.move_down(),
            KeyAction::Left => self.home.move_left(),
            KeyAction::Right => self.home.move_right(),
            KeyAction::Activate => self.launch(self.home.selected()),
            _ => {}
        }
    }

    // ===== Notes =====

    fn notes_action(&mut self, action: KeyAction, now: DateTime<Local>) {
        match action {
            KeyAction::InsertChar(c) => self.note_input.push(c),
            KeyAction::Backspace => {
                self.note_input.pop();
            }
            KeyAction::Activate => self.add_note(now),
            KeyAction::Up => self.note_selected = self.note_selected.saturating_sub(1),
            KeyAction::Down => {
                if self.note_selected + 1 < self.notes.len() {
                    self.note_selected += 1;
                }
            }
            KeyAction::Delete => self.delete_selected_note(),
            KeyAction::Save => {
                let result = self.notes.save().map(|()| "Saved.".to_string());
                self.report(result);
            }
            _ => {}
        }
    }

    fn add_note(&mut self, now: DateTime<Local>) {
        match self.notes.add(&self.note_input, now) {
            Ok(Some(_)) => {
                self.note_input.clear();
                self.note_selected = 0;
            }
            Ok(None) => {}
            Err(e) => self.fail(&e),
        }
    }

    fn delete_selected_note(&mut self) {
        match self.notes.remove(self.note_selected) {
            Ok(_) => {
                self.note_selected = self.note_selected.min(self.notes.len().saturating_sub(1));
            }
            Err(e) => self.fail(&e),
        }
    }

    // ===== Weather =====

    fn weather_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::InsertChar(c) => self.weather_input.push(c),
            KeyAction::Backspace => {
                self.weather_input.pop();
            }
            KeyAction::Activate => self.submit_weather(),
            _ => {}
        }
    }

    /// Queues a lookup for the typed city
    pub fn submit_weather(&mut self) {
        let city = self.weather_input.trim().to_string();
        if city.is_empty() {
            self.weather = WeatherStatus::Failed(WeatherError::BlankQuery.to_string());
            return;
        }
        self.weather_seq += 1;
        self.weather_request = Some(WeatherRequest {
            id: self.weather_seq,
            city: city.clone(),
        });
        self.weather = WeatherStatus::Searching(city);
    }

    /// Takes the queued lookup, if any
    pub fn take_weather_request(&mut self) -> Option<WeatherRequest> {
        self.weather_request.take()
    }

    /// Delivers a lookup result; results of superseded requests are dropped
    pub fn finish_weather(&mut self, id: u64, result: Result<WeatherReport, WeatherError>) {
        if id != self.weather_seq {
            debug!(id, latest = self.weather_seq, "dropping stale weather result");
            return;
        }
        self.weather = match result {
            Ok(report) => WeatherStatus::Ready(report),
            Err(e) => {
                warn!(error = %e, "weather lookup failed");
                WeatherStatus::Failed(e.to_string())
            }
        };
    }

    // ===== Settings =====

    fn settings_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Next => self.wallpaper_choice = (self.wallpaper_choice + 1) % BUILTIN.len(),
            KeyAction::Activate => self.apply_wallpaper(),
            KeyAction::Up => self.offset = self.offset.nudge(0.0, -NUDGE_STEP),
            KeyAction::Down => self.offset = self.offset.nudge(0.0, NUDGE_STEP),
            KeyAction::Left => self.offset = self.offset.nudge(-NUDGE_STEP, 0.0),
            KeyAction::Right => self.offset = self.offset.nudge(NUDGE_STEP, 0.0),
            KeyAction::Reset => self.offset = Offset::default(),
            _ => {}
        }
    }

    /// Applies and persists the highlighted built-in
    pub fn apply_wallpaper(&mut self) {
        let Some(builtin) = BUILTIN.get(self.wallpaper_choice) else {
            return;
        };
        let source = WallpaperSource::Builtin(builtin);
        let result = self
            .wallpaper_settings
            .save(&source)
            .map(|()| format!("Wallpaper: {source}"));
        self.show_wallpaper(source);
        self.report(result);
    }

    fn show_wallpaper(&mut self, source: WallpaperSource) {
        let path = source.image_path(&self.config.assets_dir());
        self.wallpaper_size = match image_size(&path) {
            Ok(size) => Some(size),
            Err(e) => {
                warn!(?path, error = %e, "wallpaper image unavailable");
                None
            }
        };
        if let WallpaperSource::Builtin(b) = &source {
            if let Some(i) = BUILTIN.iter().position(|x| x == *b) {
                self.wallpaper_choice = i;
            }
        }
        self.wallpaper = Some(source);
    }

    fn report(&mut self, result: PhoneResult<String>) {
        match result {
            Ok(msg) => self.message = Some(msg),
            Err(e) => self.fail(&e),
        }
    }

    fn fail(&mut self, err: &PhoneError) {
        warn!(error = %err, "action failed");
        self.message = Some(format!("Error: {err}"));
    }
}
