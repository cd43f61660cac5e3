//! Calc command handler

use pocketphone::calculator::{CalcKey, CalculatorEngine, Operation};
use serde::Serialize;
use tracing::debug;

use crate::commands::CalcArgs;
use crate::error::CliResult;
use crate::output::OutputFormat;

/// Final engine state after a replay
#[derive(Debug, Serialize, PartialEq)]
pub struct CalcOutput {
    /// Number of keys pressed
    pub keys: usize,
    /// Display text
    pub display: String,
    /// Left operand when an operator is still pending
    pub accumulator: Option<f64>,
    /// Pending operator symbol
    pub operator: Option<&'static str>,
}

impl CalcOutput {
    fn new(keys: usize, engine: &CalculatorEngine) -> Self {
        Self {
            keys,
            display: engine.display(),
            accumulator: engine.accumulator(),
            operator: engine.pending_operator().map(|op: Operation| op.symbol()),
        }
    }
}

/// Presses every key of `input` on a fresh engine
pub fn replay(input: &str) -> CliResult<CalcOutput> {
    let keys = CalcKey::parse_sequence(input)?;
    let mut engine = CalculatorEngine::new();
    for key in &keys {
        let shown = engine.press(*key);
        debug!(key = key.label(), display = %shown, "calc key");
    }
    Ok(CalcOutput::new(keys.len(), &engine))
}

/// Execute the calc command
pub fn execute_calc(args: &CalcArgs) -> CliResult<()> {
    let output = replay(&args.keys)?;
    match args.format {
        OutputFormat::Text => println!("{}", output.display),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }
    Ok(())
}
