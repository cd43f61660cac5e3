//! Pocketphone CLI library
//!
//! Command definitions, configuration and handlers behind the `pocketphone`
//! binary.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{
    CalcArgs, Cli, ColorArg, Commands, NotesArgs, NotesCommand, WallpaperArgs, WallpaperCommand,
    WeatherArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{heading, OutputFormat, Reporter};
