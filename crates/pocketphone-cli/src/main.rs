//! Pocketphone CLI
//!
//! ## Usage
//!
//! ```bash
//! pocketphone home                     # Launch the phone
//! pocketphone calc "12+7="             # Replay calculator keys
//! pocketphone notes add buy milk       # Add a note
//! pocketphone weather San Diego        # Current conditions
//! pocketphone wallpaper set kitty      # Pick a built-in wallpaper
//! ```

use clap::Parser;
use pocketphone_cli::{
    handlers::{execute_calc, execute_home, execute_notes, execute_wallpaper, execute_weather},
    logging, Cli, CliConfig, CliResult, Commands, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    console::set_colors_enabled(config.color.should_color());
    console::set_colors_enabled_stderr(config.color.should_color());

    // The phone owns the terminal, so its logs go to a file
    if matches!(cli.command, Commands::Home) {
        let log_path = config.phone_config()?.log_path();
        logging::init_file(config.verbosity, &log_path)?;
    } else {
        logging::init_stderr(config.verbosity)?;
    }

    match cli.command {
        Commands::Home => execute_home(&config),
        Commands::Calc(args) => execute_calc(&args),
        Commands::Notes(args) => execute_notes(&config, &args.command),
        Commands::Weather(args) => execute_weather(&config, &args),
        Commands::Wallpaper(args) => execute_wallpaper(&config, &args.command),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.clone().into())
        .with_data_dir(cli.data_dir.clone())
}
