//! Weather command handler

use pocketphone::weather::{WeatherClient, WeatherReport};
use tracing::info;

use crate::commands::WeatherArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{heading, OutputFormat, Reporter};

/// Execute the weather command
pub fn execute_weather(config: &CliConfig, args: &WeatherArgs) -> CliResult<()> {
    let phone = config.phone_config()?;
    let city = args.city.join(" ");
    let client = WeatherClient::new(&phone.weather)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let reporter = Reporter::new(config.verbosity.is_quiet());
    let spinner = reporter.spinner("Searching…");
    info!(%city, "weather lookup");
    let result = runtime.block_on(client.lookup(&city));
    spinner.finish_and_clear();

    let report = result.map_err(CliError::from)?;
    match args.format {
        OutputFormat::Text => {
            for line in report_lines(&report) {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

/// Place heading followed by whichever readings the service returned
#[must_use]
pub fn report_lines(report: &WeatherReport) -> Vec<String> {
    let mut lines = report.lines();
    if let Some(first) = lines.first_mut() {
        *first = heading(first.as_str());
    }
    lines
}
