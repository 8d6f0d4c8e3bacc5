//! Persisted task mover settings.
//!
//! # Responsibility
//! - Define the user-tunable settings consumed by the move orchestration.
//! - Load/save settings as JSON, tolerating partially populated files.
//!
//! # Invariants
//! - Missing fields fall back to `TaskMoverSettings::default()` values.
//! - A missing settings file is not an error; it yields defaults.
//! - On-disk field names are camelCase so plugin `data.json` files load as-is.

use log::{error, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default vault-relative folder for daily notes (vault root).
pub const DEFAULT_DAILY_NOTE_FOLDER: &str = "/";
/// Default moment-style filename format for daily notes.
pub const DEFAULT_DAILY_NOTE_FORMAT: &str = "YYYY-MM-DD";

/// User settings for moving uncompleted tasks between daily notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskMoverSettings {
    /// Vault-relative folder holding daily notes, e.g. `Journal/Daily`.
    pub daily_note_folder: String,
    /// Moment-style date format used for daily note file names.
    pub daily_note_format: String,
    /// Whether the host should display today's note after a move.
    pub open_note_after_move: bool,
    /// Vault-relative template path. Empty selects the built-in template.
    pub template_path: String,
    /// Whether a newly created note is seeded from the template.
    pub create_empty_note: bool,
}

impl Default for TaskMoverSettings {
    fn default() -> Self {
        Self {
            daily_note_folder: DEFAULT_DAILY_NOTE_FOLDER.to_string(),
            daily_note_format: DEFAULT_DAILY_NOTE_FORMAT.to_string(),
            open_note_after_move: true,
            template_path: String::new(),
            create_empty_note: true,
        }
    }
}

impl TaskMoverSettings {
    /// Loads settings from a JSON file.
    ///
    /// # Errors
    /// - `ConfigError::Io` when the file exists but cannot be read.
    /// - `ConfigError::Parse` when the file is not valid settings JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=settings_load module=config status=ok source=default");
                return Ok(Self::default());
            }
            Err(err) => {
                error!(
                    "event=settings_load module=config status=error error_code=read_failed error={}",
                    err
                );
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let settings = serde_json::from_str::<Self>(&raw).map_err(|err| {
            error!(
                "event=settings_load module=config status=error error_code=parse_failed error={}",
                err
            );
            ConfigError::Parse {
                path: path.to_path_buf(),
                source: err,
            }
        })?;
        info!("event=settings_load module=config status=ok source=file");
        Ok(settings)
    }

    /// Writes settings as pretty JSON, creating parent folders as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let raw = serde_json::to_string_pretty(self).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            source: err,
        })?;
        std::fs::write(path, raw).map_err(io_error)?;
        info!("event=settings_save module=config status=ok");
        Ok(())
    }
}

/// Settings load/save failure.
#[derive(Debug)]
pub enum ConfigError {
    /// Settings file could not be read or written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Settings file content is not valid JSON for this schema.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "settings file `{}` I/O failed: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "settings file `{}` is invalid: {source}", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}
