//! Timestamped notes persisted as a plain text file
//!
//! One note per line, newest first. Each line is `yyyy-MM-dd HH:mm — text`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDateTime};
use tracing::{debug, info};

use crate::error::{PhoneError, PhoneResult};

/// Separator between timestamp and body
pub const STAMP_SEPARATOR: &str = " — ";

/// Timestamp format for new notes
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single stored note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    line: String,
}

impl Note {
    /// Builds a note stamped at `now`
    #[must_use]
    pub fn new(body: &str, now: DateTime<Local>) -> Self {
        Self {
            line: format!("{}{STAMP_SEPARATOR}{body}", now.format(STAMP_FORMAT)),
        }
    }

    /// Wraps a line read from disk as-is
    #[must_use]
    pub fn from_line(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    /// The full stored line
    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    fn split(&self) -> Option<(&str, &str)> {
        self.line
            .split_once(STAMP_SEPARATOR)
            .filter(|(stamp, _)| NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).is_ok())
    }

    /// Timestamp part, if the line starts with one in [`STAMP_FORMAT`]
    #[must_use]
    pub fn stamp(&self) -> Option<&str> {
        self.split().map(|(stamp, _)| stamp)
    }

    /// Text part; the whole line when there is no timestamp
    #[must_use]
    pub fn body(&self) -> &str {
        self.split().map_or(self.line.as_str(), |(_, body)| body)
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.line)
    }
}

/// Note list backed by a file
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
    notes: Vec<Note>,
}

impl NoteStore {
    /// Loads notes from `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> PhoneResult<Self> {
        let path = path.into();
        let notes = match fs::read_to_string(&path) {
            Ok(text) => text
                .lines()
                .filter(|l| !l.trim().is_empty())
                .map(Note::from_line)
                .collect(),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(?path, "no notes file yet");
                Vec::new()
            }
            Err(e) => return Err(PhoneError::io(&path, e)),
        };
        debug!(?path, count = notes.len(), "notes loaded");
        Ok(Self { path, notes })
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Notes, newest first
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether there are no notes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Adds a note at the top and persists.
    ///
    /// Blank text is ignored. Line breaks are folded into single spaces.
    pub fn add(&mut self, text: &str, now: DateTime<Local>) -> PhoneResult<Option<Note>> {
        let body = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if body.is_empty() {
            return Ok(None);
        }
        let note = Note::new(&body, now);
        self.notes.insert(0, note.clone());
        self.save()?;
        Ok(Some(note))
    }

    /// Removes the note at `index` and persists; out of range is a no-op
    pub fn remove(&mut self, index: usize) -> PhoneResult<Option<Note>> {
        if index >= self.notes.len() {
            debug!(index, len = self.notes.len(), "remove out of range");
            return Ok(None);
        }
        let note = self.notes.remove(index);
        self.save()?;
        Ok(Some(note))
    }

    /// Writes all notes to the backing file
    pub fn save(&self) -> PhoneResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PhoneError::io(parent, e))?;
        }
        let mut text = String::new();
        for note in &self.notes {
            text.push_str(note.line());
            text.push('\n');
        }
        fs::write(&self.path, text).map_err(|e| PhoneError::io(&self.path, e))?;
        info!(path = ?self.path, count = self.notes.len(), "notes saved");
        Ok(())
    }
}
