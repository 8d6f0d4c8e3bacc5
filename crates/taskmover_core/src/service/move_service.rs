//! Move uncompleted tasks from the previous daily note into today's.
//!
//! # Responsibility
//! - Resolve yesterday/today note paths from settings.
//! - Create today's note from the template when it does not exist yet.
//! - Run extraction + substitution and persist the result.
//!
//! # Invariants
//! - Extraction always completes before today's note is touched.
//! - An existing note for today is never recreated, only modified.
//! - Every failure surfaces as one `MoveError` with a descriptive message.

use crate::config::TaskMoverSettings;
use crate::processor::{apply_tasks_to_template, extract_uncompleted_tasks};
use crate::service::template::TemplateLoader;
use crate::vault::path::daily_note_path;
use crate::vault::store::{NoteStore, StoreError};
use chrono::{Days, NaiveDate};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Move operation failure.
#[derive(Debug)]
pub enum MoveError {
    /// No day before the requested date is representable.
    DateOutOfRange(NaiveDate),
    /// The previous day's note does not exist.
    PreviousNoteMissing(String),
    /// Today's note did not exist and could not be created.
    Create { path: String, source: StoreError },
    /// A note could not be read.
    Read { path: String, source: StoreError },
    /// Today's note could not be written back.
    Modify { path: String, source: StoreError },
}

impl Display for MoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateOutOfRange(date) => write!(f, "no previous day for {date}"),
            Self::PreviousNoteMissing(path) => write!(f, "Previous day note not found at {path}"),
            Self::Create { path, source } => {
                write!(f, "Failed to create file at {path}: {source}")
            }
            Self::Read { path, source } => write!(f, "Failed to read file {path}: {source}"),
            Self::Modify { path, source } => write!(f, "Failed to modify file {path}: {source}"),
        }
    }
}

impl Error for MoveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DateOutOfRange(_) | Self::PreviousNoteMissing(_) => None,
            Self::Create { source, .. } => Some(source),
            Self::Read { source, .. } => Some(source),
            Self::Modify { source, .. } => Some(source),
        }
    }
}

impl MoveError {
    fn code(&self) -> &'static str {
        match self {
            Self::DateOutOfRange(_) => "date_out_of_range",
            Self::PreviousNoteMissing(_) => "previous_note_missing",
            Self::Create { .. } => "create_failed",
            Self::Read { .. } => "read_failed",
            Self::Modify { .. } => "modify_failed",
        }
    }
}

/// Result of one successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Vault-relative path of the previous day's note.
    pub source_path: String,
    /// Vault-relative path of today's note.
    pub target_path: String,
    /// Whether today's note was created by this move.
    pub created: bool,
    /// Number of unchecked task lines carried over.
    pub moved_tasks: usize,
    /// Final text written to today's note.
    pub content: String,
}

/// Move service facade over a vault store.
pub struct TaskMoveService<S: NoteStore> {
    store: S,
    settings: TaskMoverSettings,
}

impl<S: NoteStore> TaskMoveService<S> {
    pub fn new(store: S, settings: TaskMoverSettings) -> Self {
        Self { store, settings }
    }

    pub fn settings(&self) -> &TaskMoverSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Moves unchecked tasks from the note of the day before `today`.
    ///
    /// # Errors
    /// - `PreviousNoteMissing` when yesterday's note does not exist.
    /// - `Create`/`Read`/`Modify` when vault I/O fails.
    pub fn move_uncompleted_tasks(&self, today: NaiveDate) -> Result<MoveOutcome, MoveError> {
        let started_at = Instant::now();
        info!("event=task_move module=service status=start date={}", today);

        match self.run_move(today) {
            Ok(outcome) => {
                info!(
                    "event=task_move module=service status=ok duration_ms={} created={} moved_tasks={} target={}",
                    started_at.elapsed().as_millis(),
                    outcome.created,
                    outcome.moved_tasks,
                    outcome.target_path
                );
                Ok(outcome)
            }
            Err(err) => {
                error!(
                    "event=task_move module=service status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    fn run_move(&self, today: NaiveDate) -> Result<MoveOutcome, MoveError> {
        let yesterday = today
            .checked_sub_days(Days::new(1))
            .ok_or(MoveError::DateOutOfRange(today))?;
        let folder = self.settings.daily_note_folder.as_str();
        let format = self.settings.daily_note_format.as_str();

        let source_path = daily_note_path(yesterday, folder, format);
        if !self.store.exists(&source_path) {
            return Err(MoveError::PreviousNoteMissing(source_path));
        }
        let source_content = self.read_note(&source_path)?;
        let tasks = extract_uncompleted_tasks(&source_content);

        let target_path = daily_note_path(today, folder, format);
        let template_content = if self.settings.create_empty_note {
            TemplateLoader::new(&self.store).template_content(&self.settings.template_path)
        } else {
            String::new()
        };
        let created = self.get_or_create_note(&target_path, &template_content)?;
        let target_content = self.read_note(&target_path)?;

        let content = apply_tasks_to_template(&target_content, &tasks);
        self.store
            .modify(&target_path, &content)
            .map_err(|source| MoveError::Modify {
                path: target_path.clone(),
                source,
            })?;

        Ok(MoveOutcome {
            source_path,
            target_path,
            created,
            moved_tasks: tasks.total_tasks(),
            content,
        })
    }

    fn get_or_create_note(&self, path: &str, content: &str) -> Result<bool, MoveError> {
        if self.store.exists(path) {
            return Ok(false);
        }
        self.store
            .create(path, content)
            .map_err(|source| MoveError::Create {
                path: path.to_string(),
                source,
            })?;
        info!("event=note_create module=service status=ok path={}", path);
        Ok(true)
    }

    fn read_note(&self, path: &str) -> Result<String, MoveError> {
        self.store.read(path).map_err(|source| MoveError::Read {
            path: path.to_string(),
            source,
        })
    }
}
