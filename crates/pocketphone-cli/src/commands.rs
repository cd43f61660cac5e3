//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ColorChoice;
use crate::output::OutputFormat;

/// Pocketphone: a smartphone home screen in the terminal
#[derive(Parser, Debug)]
#[command(name = "pocketphone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Directory holding notes, settings, config.yaml and the log
    #[arg(long, env = "POCKETPHONE_DATA_DIR", global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive phone
    Home,

    /// Replay calculator keys and print the display
    ///
    /// Keys: digits, `.`, `+ - * x × / ÷`, `=`, `%`, `~` or `±` (sign), `c` (clear).
    /// Operators chain left to right, so "2+3*4=" prints 20.
    Calc(CalcArgs),

    /// Manage notes
    Notes(NotesArgs),

    /// Look up current weather for a city
    Weather(WeatherArgs),

    /// Choose and inspect the wallpaper
    Wallpaper(WallpaperArgs),
}

/// Arguments for the calc command
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// Key sequence, e.g. "12+7="
    #[arg(allow_hyphen_values = true)]
    pub keys: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the notes command
#[derive(Parser, Debug)]
pub struct NotesArgs {
    /// Notes subcommand
    #[command(subcommand)]
    pub command: NotesCommand,
}

/// Notes subcommands
#[derive(Subcommand, Debug)]
pub enum NotesCommand {
    /// List notes, newest first
    List {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Add a timestamped note
    Add {
        /// Note text; several words are joined with spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete a note by its number in `notes list`
    Delete {
        /// Note number, starting at 1
        index: usize,
    },
}

/// Arguments for the weather command
#[derive(Parser, Debug)]
pub struct WeatherArgs {
    /// City name; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub city: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the wallpaper command
#[derive(Parser, Debug)]
pub struct WallpaperArgs {
    /// Wallpaper subcommand
    #[command(subcommand)]
    pub command: WallpaperCommand,
}

/// Wallpaper subcommands
#[derive(Subcommand, Debug)]
pub enum WallpaperCommand {
    /// List built-in wallpapers
    List,

    /// Set the wallpaper to a built-in name or an image path
    Set {
        /// Built-in name (case-insensitive) or image file
        wallpaper: String,
    },

    /// Show the current wallpaper and its cover-fit placement
    Show {
        /// Horizontal offset in pixels (clamped to ±300)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset_x: f64,

        /// Vertical offset in pixels (clamped to ±300)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset_y: f64,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Always => Self::Always,
            ColorArg::Auto => Self::Auto,
            ColorArg::Never => Self::Never,
        }
    }
}
