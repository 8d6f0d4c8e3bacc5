//! Note storage contract and filesystem vault implementation.
//!
//! # Responsibility
//! - Abstract read/create/modify of vault notes for the move service.
//! - Keep filesystem details (path joining, folder creation) behind the trait.
//!
//! # Invariants
//! - `create` never overwrites an existing note.
//! - Parent folder creation failures are ignored; only the note write reports.

use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const MARKDOWN_EXTENSION: &str = "md";

pub type StoreResult<T> = Result<T, StoreError>;

/// Note storage failure.
#[derive(Debug)]
pub enum StoreError {
    /// No note exists at the vault-relative path.
    NotFound(String),
    /// Path has `.`/`..` segments and could leave the vault root.
    OutsideVault(String),
    /// Underlying I/O failed for the vault-relative path.
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl StoreError {
    fn from_io(path: &str, source: std::io::Error) -> Self {
        if source.kind() == ErrorKind::NotFound {
            Self::NotFound(path.to_string())
        } else {
            Self::Io {
                path: path.to_string(),
                source,
            }
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "note not found: {path}"),
            Self::OutsideVault(path) => write!(f, "path escapes the vault: {path}"),
            Self::Io { source, .. } => write!(f, "{source}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) | Self::OutsideVault(_) => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Vault storage used by the move service.
///
/// Paths are vault-relative and `/`-separated.
pub trait NoteStore {
    /// Returns whether a note file exists at `path`.
    fn exists(&self, path: &str) -> bool;
    /// Reads the full text of the note at `path`.
    fn read(&self, path: &str) -> StoreResult<String>;
    /// Creates a new note with `content`, creating parent folders first.
    fn create(&self, path: &str, content: &str) -> StoreResult<()>;
    /// Replaces the full text of an existing note.
    fn modify(&self, path: &str, content: &str) -> StoreResult<()>;
    /// Lists vault-relative paths of all markdown notes, sorted.
    fn list_markdown_files(&self) -> StoreResult<Vec<String>>;
}

/// Filesystem-backed vault rooted at one directory.
#[derive(Debug, Clone)]
pub struct FsNoteStore {
    root: PathBuf,
}

impl FsNoteStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a vault-relative path to a filesystem path.
    ///
    /// # Errors
    /// - `OutsideVault` when any segment is `.` or `..`.
    pub fn resolve(&self, path: &str) -> StoreResult<PathBuf> {
        let mut resolved = self.root.clone();
        for segment in path.split(['/', '\\']).filter(|segment| !segment.is_empty()) {
            if segment == "." || segment == ".." {
                return Err(StoreError::OutsideVault(path.to_string()));
            }
            resolved.push(segment);
        }
        Ok(resolved)
    }

    fn ensure_parent(&self, path: &str) {
        let Some((folder, _)) = path.rsplit_once('/') else {
            return;
        };
        if folder.is_empty() {
            return;
        }
        let Ok(target) = self.resolve(folder) else {
            return;
        };
        if let Err(err) = std::fs::create_dir_all(target) {
            debug!(
                "event=folder_create module=vault status=ignored folder={} error={}",
                folder, err
            );
        }
    }
}

impl NoteStore for FsNoteStore {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|target| target.is_file())
    }

    fn read(&self, path: &str) -> StoreResult<String> {
        std::fs::read_to_string(self.resolve(path)?).map_err(|err| StoreError::from_io(path, err))
    }

    fn create(&self, path: &str, content: &str) -> StoreResult<()> {
        let target = self.resolve(path)?;
        self.ensure_parent(path);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(target)
            .map_err(|err| StoreError::Io {
                path: path.to_string(),
                source: err,
            })?;
        file.write_all(content.as_bytes())
            .map_err(|err| StoreError::Io {
                path: path.to_string(),
                source: err,
            })
    }

    fn modify(&self, path: &str, content: &str) -> StoreResult<()> {
        let target = self.resolve(path)?;
        if !target.is_file() {
            return Err(StoreError::NotFound(path.to_string()));
        }
        std::fs::write(target, content).map_err(|err| StoreError::from_io(path, err))
    }

    fn list_markdown_files(&self) -> StoreResult<Vec<String>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(
                        "event=vault_scan module=vault status=skipped error={}",
                        err
                    );
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let is_markdown = entry
                .path()
                .extension()
                .is_some_and(|ext| ext == MARKDOWN_EXTENSION);
            if !is_markdown {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                let segments = relative
                    .components()
                    .map(|part| part.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>();
                files.push(segments.join("/"));
            }
        }

        files.sort();
        Ok(files)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Suggests template notes whose path contains `query`, case-insensitively.
///
/// Paths starting with the query rank first; ties sort by path. An empty
/// query yields no suggestions.
pub fn suggest_template_files(
    store: &impl NoteStore,
    query: &str,
    limit: usize,
) -> StoreResult<Vec<String>> {
    if query.is_empty() {
        return Ok(Vec::new());
    }
    let needle = query.to_lowercase();

    let mut matches = store
        .list_markdown_files()?
        .into_iter()
        .filter_map(|path| {
            let lowered = path.to_lowercase();
            lowered
                .contains(&needle)
                .then(|| (!lowered.starts_with(&needle), path))
        })
        .collect::<Vec<_>>();
    matches.sort();

    Ok(matches
        .into_iter()
        .take(limit)
        .map(|(_, path)| path)
        .collect())
}
