//! Output formatting and status messages

use std::time::Duration;

use clap::ValueEnum;
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Status messages on stderr; stdout carries only command results
#[derive(Debug)]
pub struct Reporter {
    term: Term,
    /// Quiet mode
    pub quiet: bool,
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            quiet,
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self
            .term
            .write_line(&format!("{} {message}", style("✓").green().bold()));
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self
            .term
            .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
    }

    /// Spinner shown while waiting on the network; hidden in quiet mode
    /// or when stderr is not a terminal
    #[must_use]
    pub fn spinner(&self, message: impl Into<String>) -> ProgressBar {
        if self.quiet || !self.term.is_term() {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }
}

/// Bold heading, or plain text when colors are off
#[must_use]
pub fn heading(text: &str) -> String {
    style(text).bold().to_string()
}
