//! Launcher grid and status bar clock

use chrono::{DateTime, TimeZone};

/// Launcher columns
pub const GRID_COLUMNS: usize = 4;

/// Launcher rows
pub const GRID_ROWS: usize = 2;

/// Message shown when a demo-only tile is opened
pub const DEMO_ONLY: &str = "Demo only";

/// A tile on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeApp {
    /// Calculator app
    Calculator,
    /// Notes app
    Notes,
    /// Clock (demo only)
    Clock,
    /// Weather app
    Weather,
    /// Music (demo only)
    Music,
    /// Mail (demo only)
    Mail,
    /// Wallpaper settings
    Settings,
    /// Photos (demo only)
    Photos,
}

impl HomeApp {
    /// All tiles in grid order, row by row
    pub const ALL: [Self; GRID_COLUMNS * GRID_ROWS] = [
        Self::Calculator,
        Self::Notes,
        Self::Clock,
        Self::Weather,
        Self::Music,
        Self::Mail,
        Self::Settings,
        Self::Photos,
    ];

    /// Tile label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Calculator => "Calculator",
            Self::Notes => "Notes",
            Self::Clock => "Clock",
            Self::Weather => "Weather",
            Self::Music => "Music",
            Self::Mail => "Mail",
            Self::Settings => "Settings",
            Self::Photos => "Photos",
        }
    }

    /// Tiles with no app behind them
    #[must_use]
    pub const fn is_demo_only(&self) -> bool {
        matches!(self, Self::Clock | Self::Music | Self::Mail | Self::Photos)
    }

    /// Tile at `(column, row)`
    #[must_use]
    pub fn at(column: usize, row: usize) -> Option<Self> {
        if column >= GRID_COLUMNS || row >= GRID_ROWS {
            return None;
        }
        Some(Self::ALL[row * GRID_COLUMNS + column])
    }

    /// `(column, row)` of this tile
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        let index = Self::ALL.iter().position(|a| a == self).unwrap_or(0);
        (index % GRID_COLUMNS, index / GRID_COLUMNS)
    }
}

impl std::fmt::Display for HomeApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Selection cursor on the launcher grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomeScreen {
    column: usize,
    row: usize,
}

impl HomeScreen {
    /// Cursor on the first tile
    #[must_use]
    pub const fn new() -> Self {
        Self { column: 0, row: 0 }
    }

    /// Selected tile
    #[must_use]
    pub fn selected(&self) -> HomeApp {
        HomeApp::at(self.column, self.row).unwrap_or(HomeApp::Calculator)
    }

    /// Moves the cursor onto `app`
    pub fn select(&mut self, app: HomeApp) {
        (self.column, self.row) = app.position();
    }

    /// Move left, stopping at the edge
    pub fn move_left(&mut self) {
        self.column = self.column.saturating_sub(1);
    }

    /// Move right, stopping at the edge
    pub fn move_right(&mut self) {
        self.column = (self.column + 1).min(GRID_COLUMNS - 1);
    }

    /// Move up, stopping at the edge
    pub fn move_up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    /// Move down, stopping at the edge
    pub fn move_down(&mut self) {
        self.row = (self.row + 1).min(GRID_ROWS - 1);
    }
}

/// Status bar clock text, `HH:mm`
#[must_use]
pub fn clock_text<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%H:%M").to_string()
}
