//! Daily note path resolution.
//!
//! # Invariants
//! - Resolved paths never start or end with `/` and never contain `//`.
//! - Date formats use moment-style tokens; unknown letters pass through.

use chrono::NaiveDate;

const DAILY_NOTE_EXTENSION: &str = ".md";

// Longest tokens first so `YYYY` wins over `YY`.
const MOMENT_TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("DDDD", "%j"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("dddd", "%A"),
    ("ddd", "%a"),
];

/// Returns the vault-relative path of the daily note for `date`.
pub fn daily_note_path(date: NaiveDate, folder: &str, format: &str) -> String {
    let folder = folder.trim_matches('/');
    let file_name = daily_note_file_name(date, format);
    if folder.is_empty() {
        normalize_vault_path(&file_name)
    } else {
        normalize_vault_path(&format!("{folder}/{file_name}"))
    }
}

/// Formats the daily note file name, extension included.
pub fn daily_note_file_name(date: NaiveDate, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    format!("{}{DAILY_NOTE_EXTENSION}", date.format(&chrono_format))
}

/// Normalizes a vault-relative path.
///
/// Backslashes become `/`, repeated separators collapse and leading/trailing
/// separators are dropped.
pub fn normalize_vault_path(path: &str) -> String {
    path.replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

fn moment_to_chrono_format(format: &str) -> String {
    let mut output = String::with_capacity(format.len() * 2);
    let mut rest = format;

    'outer: while let Some(ch) = rest.chars().next() {
        if ch == '[' {
            if let Some(end) = rest.find(']') {
                push_literal(&mut output, &rest[1..end]);
                rest = &rest[end + 1..];
                continue;
            }
        }

        for (token, replacement) in MOMENT_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                output.push_str(replacement);
                rest = tail;
                continue 'outer;
            }
        }

        push_literal(&mut output, &rest[..ch.len_utf8()]);
        rest = &rest[ch.len_utf8()..];
    }

    output
}

fn push_literal(output: &mut String, literal: &str) {
    output.push_str(&literal.replace('%', "%%"));
}
