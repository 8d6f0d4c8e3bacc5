//! Placeholder substitution for carried-over tasks.
//!
//! # Invariants
//! - Headings anchor by literal first occurrence, not by document structure.
//! - Each heading consumes at most one placeholder, the first one after it.
//! - Remaining placeholders are replaced by the fallback text unconditionally.

use crate::model::task_mapping::{TaskMapping, NO_TASKS_FALLBACK, TASK_PLACEHOLDER};

/// Inserts the task lines of `tasks` in place of placeholders in `template`.
///
/// Substituted text is inserted literally.
pub fn apply_tasks_to_template(template: &str, tasks: &TaskMapping) -> String {
    let mut content = template.to_string();

    for (heading, lines) in tasks.iter() {
        if heading.is_empty() {
            continue;
        }

        let Some((before, after)) = content.split_once(heading) else {
            continue;
        };
        if !after.contains(TASK_PLACEHOLDER) {
            continue;
        }

        let tasks_content = if lines.is_empty() {
            NO_TASKS_FALLBACK.to_string()
        } else {
            lines.join("\n")
        };
        let replaced = after.replacen(TASK_PLACEHOLDER, &tasks_content, 1);
        content = format!("{before}{heading}{replaced}");
    }

    content.replace(TASK_PLACEHOLDER, NO_TASKS_FALLBACK)
}
