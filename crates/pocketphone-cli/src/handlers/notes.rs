//! Notes command handler

use chrono::Local;
use pocketphone::notes::{Note, NoteStore};

use crate::commands::NotesCommand;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{OutputFormat, Reporter};

/// Execute a notes subcommand
pub fn execute_notes(config: &CliConfig, command: &NotesCommand) -> CliResult<()> {
    let phone = config.phone_config()?;
    let mut store = NoteStore::open(phone.notes_path())?;
    let reporter = Reporter::new(config.verbosity.is_quiet());

    match command {
        NotesCommand::List { format } => match format {
            OutputFormat::Text => {
                if store.is_empty() {
                    reporter.warning("No notes yet");
                }
                for line in list_lines(store.notes()) {
                    println!("{line}");
                }
            }
            OutputFormat::Json => {
                let lines: Vec<&str> = store.notes().iter().map(Note::line).collect();
                println!("{}", serde_json::to_string_pretty(&lines)?);
            }
        },
        NotesCommand::Add { text } => match store.add(&text.join(" "), Local::now())? {
            Some(note) => reporter.success(&format!("Added: {note}")),
            None => return Err(CliError::invalid_argument("note text is empty")),
        },
        NotesCommand::Delete { index } => {
            let removed = index
                .checked_sub(1)
                .map(|i| store.remove(i))
                .transpose()?
                .flatten();
            match removed {
                Some(note) => reporter.success(&format!("Deleted: {note}")),
                None => {
                    return Err(CliError::invalid_argument(format!(
                        "no note #{index} ({} stored)",
                        store.len()
                    )))
                }
            }
        }
    }
    Ok(())
}

/// Numbered lines for `notes list`, newest first
#[must_use]
pub fn list_lines(notes: &[Note]) -> Vec<String> {
    let width = notes.len().to_string().len();
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| format!("{:>width$}. {note}", i + 1))
        .collect()
}
