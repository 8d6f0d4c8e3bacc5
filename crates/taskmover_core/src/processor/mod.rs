//! Task carry-over processor.
//!
//! # Responsibility
//! - Extract unchecked tasks from a daily note, grouped by heading.
//! - Substitute extracted tasks into a target note's placeholders.
//!
//! # Invariants
//! - Both operations are pure text transforms and never fail.
//! - No placeholder token survives template application.

pub mod apply;
pub mod extract;

pub use apply::apply_tasks_to_template;
pub use extract::{extract_uncompleted_tasks, is_heading, is_uncompleted_task};
