//! Home command handler

use crate::config::CliConfig;
use crate::error::CliResult;

/// Launches the interactive phone; returns when the user quits
#[cfg(feature = "tui")]
pub fn execute_home(config: &CliConfig) -> CliResult<()> {
    let phone = config.phone_config()?;
    tracing::info!(data_dir = %phone.data_dir.display(), "launching phone");
    pocketphone::tui::run(phone)?;
    Ok(())
}

/// Launches the interactive phone; unavailable in this build
#[cfg(not(feature = "tui"))]
pub fn execute_home(_config: &CliConfig) -> CliResult<()> {
    Err(crate::error::CliError::FeatureDisabled { feature: "tui" })
}
