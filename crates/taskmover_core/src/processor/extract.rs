//! Unchecked task extraction.
//!
//! # Invariants
//! - Lines are split on `\n` only; a trailing `\r` stays part of the line.
//! - A heading bucket is pruned only when the next heading starts and the
//!   bucket is still empty. The last heading always keeps its bucket.
//! - Revisiting a heading resets its bucket.

use crate::model::task_mapping::{TaskMapping, NO_HEADING};
use once_cell::sync::Lazy;
use regex::Regex;

// `.` must not cross line terminators, including the ones `\n` splitting leaves behind.
static UNCHECKED_TASK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^- \[ \][^\r\n\u{2028}\u{2029}]+$").expect("valid unchecked task regex")
});

/// Returns whether the raw line opens a heading section.
pub fn is_heading(line: &str) -> bool {
    line.starts_with('#')
}

/// Returns whether the line is an unchecked checklist item once trimmed.
pub fn is_uncompleted_task(line: &str) -> bool {
    UNCHECKED_TASK_RE.is_match(trim_line(line))
}

// Byte order marks count as whitespace, so a note's first line still trims clean.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Groups the unchecked task lines of `content` by enclosing heading.
///
/// Task lines are stored trimmed; headings are stored verbatim.
pub fn extract_uncompleted_tasks(content: &str) -> TaskMapping {
    let mut mapping = TaskMapping::new();
    mapping.reset(NO_HEADING);
    let mut current_heading = NO_HEADING;

    for line in content.split('\n') {
        if is_heading(line) {
            if mapping
                .get(current_heading)
                .is_some_and(|tasks| tasks.is_empty())
            {
                mapping.remove(current_heading);
            }
            current_heading = line;
            mapping.reset(current_heading);
        } else if is_uncompleted_task(line) {
            mapping.push_task(current_heading, trim_line(line));
        }
    }

    mapping
}

#[cfg(test)]
mod tests {
    use super::{extract_uncompleted_tasks, is_heading, is_uncompleted_task};

    #[test]
    fn task_pattern_requires_text_after_checkbox() {
        assert!(is_uncompleted_task("- [ ] a"));
        assert!(is_uncompleted_task("   - [ ] indented\t"));
        assert!(!is_uncompleted_task("- [ ] "));
        assert!(!is_uncompleted_task("- [x] done"));
        assert!(!is_uncompleted_task("- [] missing space"));
        assert!(!is_uncompleted_task("* [ ] other bullet"));
    }

    #[test]
    fn unicode_line_separators_end_task_text() {
        assert!(!is_uncompleted_task("- [ ] a\u{2028}b"));
        assert!(!is_uncompleted_task("- [ ] a\u{2029}b"));
        assert!(!is_uncompleted_task("- [ ] a\rb"));
        assert!(is_uncompleted_task("- [ ] a\u{2028}"));
    }

    #[test]
    fn byte_order_mark_is_trimmed_from_first_task() {
        let mapping = extract_uncompleted_tasks("\u{FEFF}- [ ] first\n- [ ] second\n");

        assert_eq!(
            mapping.get(""),
            Some(&["- [ ] first".to_string(), "- [ ] second".to_string()][..])
        );
    }

    #[test]
    fn heading_check_uses_raw_first_character() {
        assert!(is_heading("# Title"));
        assert!(is_heading("###no space"));
        assert!(!is_heading(" # indented"));
    }

    #[test]
    fn trailing_carriage_return_is_trimmed_from_tasks_but_kept_in_headings() {
        let mapping = extract_uncompleted_tasks("# Work\r\n- [ ] ship\r\n");
        assert_eq!(
            mapping.get("# Work\r"),
            Some(&["- [ ] ship".to_string()][..])
        );
    }
}
