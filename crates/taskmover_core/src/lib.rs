//! Core logic for carrying unchecked tasks from one daily note to the next.
//! Host layers (CLI, editors) only wire storage and settings into this crate.

pub mod config;
pub mod logging;
pub mod model;
pub mod processor;
pub mod service;
pub mod vault;

pub use config::{ConfigError, TaskMoverSettings};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task_mapping::{TaskMapping, NO_HEADING, NO_TASKS_FALLBACK, TASK_PLACEHOLDER};
pub use processor::{apply_tasks_to_template, extract_uncompleted_tasks};
pub use service::move_service::{MoveError, MoveOutcome, TaskMoveService};
pub use service::template::{TemplateLoader, DEFAULT_TEMPLATE};
pub use vault::{daily_note_path, suggest_template_files, FsNoteStore, NoteStore, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
