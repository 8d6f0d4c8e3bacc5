//! Command-line host for moving unchecked tasks between daily notes.
//!
//! # Responsibility
//! - Wire a vault directory and settings file into `taskmover_core`.
//! - Report each operation as a single success or error message.

mod cli;

use chrono::{Local, NaiveDate};
use clap::Parser;
use cli::{Cli, Command};
use log::info;
use std::path::Path;
use std::process::ExitCode;
use taskmover_core::{
    apply_tasks_to_template, default_log_level, extract_uncompleted_tasks, init_logging,
    suggest_template_files, FsNoteStore, TaskMapping, TaskMoveService, TaskMoverSettings,
};

const SETTINGS_RELATIVE_PATH: &str = ".taskmover/settings.json";
const TEMPLATE_SUGGESTION_LIMIT: usize = 10;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = setup_logging(&cli) {
        // Logging is best-effort; the command itself still runs.
        eprintln!("taskmover: logging disabled: {err}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(cli: &Cli) -> Result<(), String> {
    let log_dir = match &cli.log_dir {
        Some(dir) => dir.clone(),
        None => dirs::data_local_dir()
            .ok_or_else(|| "no local data directory available".to_string())?
            .join("taskmover")
            .join("logs"),
    };
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, &log_dir).map_err(|err| err.to_string())
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Move {
            vault,
            settings,
            date,
            open,
            no_open,
        } => {
            let settings_path = settings.unwrap_or_else(|| vault.join(SETTINGS_RELATIVE_PATH));
            let settings = TaskMoverSettings::load(&settings_path)
                .map_err(|err| format!("Error moving tasks: {err}"))?;
            let today = date.unwrap_or_else(|| Local::now().date_naive());
            let show_note = if open {
                true
            } else if no_open {
                false
            } else {
                settings.open_note_after_move
            };

            let service = TaskMoveService::new(FsNoteStore::new(&vault), settings);
            let outcome = service
                .move_uncompleted_tasks(today)
                .map_err(|err| format!("Error moving tasks: {err}"))?;

            println!("Tasks moved successfully to today's note");
            if show_note {
                println!("--- {} ---", outcome.target_path);
                print!("{}", outcome.content);
            }
            Ok(())
        }
        Command::Extract { note } => {
            let content = read_text(&note)?;
            let tasks = extract_uncompleted_tasks(&content);
            let json = serde_json_pretty(&tasks)?;
            println!("{json}");
            Ok(())
        }
        Command::Apply { template, from } => {
            let template = read_text(&template)?;
            let source = read_text(&from)?;
            let tasks = extract_uncompleted_tasks(&source);
            print!("{}", apply_tasks_to_template(&template, &tasks));
            Ok(())
        }
        Command::Templates { query, vault } => {
            let store = FsNoteStore::new(&vault);
            let suggestions = suggest_template_files(&store, &query, TEMPLATE_SUGGESTION_LIMIT)
                .map_err(|err| format!("Error listing templates: {err}"))?;
            if suggestions.is_empty() {
                info!("event=template_suggest module=cli status=ok results=0");
            }
            for path in suggestions {
                println!("{path}");
            }
            Ok(())
        }
    }
}

fn read_text(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read file {}: {err}", path.display()))
}

fn serde_json_pretty(tasks: &TaskMapping) -> Result<String, String> {
    serde_json::to_string_pretty(tasks).map_err(|err| format!("Failed to encode tasks: {err}"))
}

/// Parses `YYYY-MM-DD` date arguments.
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|err| format!("invalid date `{value}` (expected YYYY-MM-DD): {err}"))
}
