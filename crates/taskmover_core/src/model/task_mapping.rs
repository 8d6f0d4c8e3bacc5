//! Ordered heading -> task grouping.
//!
//! # Responsibility
//! - Keep unchecked task lines grouped by the heading they appeared under.
//! - Make revisit/reset semantics explicit instead of incidental.
//!
//! # Invariants
//! - Iteration order is insertion order of headings.
//! - `reset` on an existing heading clears it in place; it does not move.
//! - `reset` after `remove` appends the heading at the end again.

use indexmap::IndexMap;
use serde::Serialize;

/// Placeholder token consumed during template application.
pub const TASK_PLACEHOLDER: &str = "<<tasks>>";
/// Text inserted when a placeholder has no tasks to receive.
pub const NO_TASKS_FALLBACK: &str = "No tasks from yesterday:)";
/// Reserved heading key for lines before the first heading.
pub const NO_HEADING: &str = "";

/// Unchecked task lines grouped by their enclosing heading.
///
/// Serializes as an ordered object `{heading: [tasks]}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TaskMapping {
    entries: IndexMap<String, Vec<String>>,
}

impl TaskMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `heading` to a fresh empty sequence.
    ///
    /// An existing entry keeps its position and loses its tasks.
    pub fn reset(&mut self, heading: &str) {
        self.entries.insert(heading.to_string(), Vec::new());
    }

    /// Drops `heading` and its tasks. Returns the removed tasks, if any.
    pub fn remove(&mut self, heading: &str) -> Option<Vec<String>> {
        self.entries.shift_remove(heading)
    }

    /// Appends one task line under `heading`, creating the entry when absent.
    pub fn push_task(&mut self, heading: &str, task: impl Into<String>) {
        match self.entries.get_mut(heading) {
            Some(tasks) => tasks.push(task.into()),
            None => {
                self.entries.insert(heading.to_string(), vec![task.into()]);
            }
        }
    }

    /// Returns the tasks collected under `heading`.
    pub fn get(&self, heading: &str) -> Option<&[String]> {
        self.entries.get(heading).map(Vec::as_slice)
    }

    pub fn contains_heading(&self, heading: &str) -> bool {
        self.entries.contains_key(heading)
    }

    /// Iterates `(heading, tasks)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(heading, tasks)| (heading.as_str(), tasks.as_slice()))
    }

    /// Headings in insertion order.
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of heading entries, empty ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of task lines across all headings.
    pub fn total_tasks(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

// `IndexMap` equality ignores order; heading order is part of the value here.
impl PartialEq for TaskMapping {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for TaskMapping {}

impl FromIterator<(String, Vec<String>)> for TaskMapping {
    /// Later duplicates overwrite the earlier value in place.
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TaskMapping;

    #[test]
    fn reset_existing_heading_clears_in_place() {
        let mut mapping = TaskMapping::new();
        mapping.push_task("# A", "- [ ] one");
        mapping.push_task("# B", "- [ ] two");

        mapping.reset("# A");

        let headings = mapping.headings().collect::<Vec<_>>();
        assert_eq!(headings, vec!["# A", "# B"]);
        assert_eq!(mapping.get("# A"), Some(&[] as &[String]));
        assert_eq!(mapping.total_tasks(), 1);
    }

    #[test]
    fn reset_after_remove_appends_at_end() {
        let mut mapping = TaskMapping::new();
        mapping.reset("# A");
        mapping.push_task("# B", "- [ ] two");

        assert_eq!(mapping.remove("# A"), Some(Vec::new()));
        mapping.reset("# A");

        let headings = mapping.headings().collect::<Vec<_>>();
        assert_eq!(headings, vec!["# B", "# A"]);
    }

    #[test]
    fn from_iter_overwrites_duplicate_keys() {
        let mapping: TaskMapping = vec![
            ("# A".to_string(), vec!["- [ ] old".to_string()]),
            ("# B".to_string(), Vec::new()),
            ("# A".to_string(), vec!["- [ ] new".to_string()]),
        ]
        .into_iter()
        .collect();

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("# A"), Some(&["- [ ] new".to_string()][..]));
        assert_eq!(mapping.headings().next(), Some("# A"));
    }

    #[test]
    fn equality_is_order_sensitive() {
        let mut first = TaskMapping::new();
        first.reset("# A");
        first.reset("# B");
        let mut second = TaskMapping::new();
        second.reset("# B");
        second.reset("# A");

        assert_ne!(first, second);
        second.remove("# B");
        second.reset("# B");
        assert_eq!(first, second);
    }

    #[test]
    fn serializes_as_ordered_object() {
        let mut mapping = TaskMapping::new();
        mapping.push_task("# Z", "- [ ] last letter");
        mapping.push_task("# A", "- [ ] first letter");

        let json = serde_json::to_string(&mapping).unwrap();
        assert_eq!(
            json,
            r##"{"# Z":["- [ ] last letter"],"# A":["- [ ] first letter"]}"##
        );
    }
}
