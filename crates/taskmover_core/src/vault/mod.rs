//! Vault access: daily note paths and note storage.
//!
//! # Responsibility
//! - Resolve vault-relative daily note paths from dates and settings.
//! - Define the storage contract the move service runs against.
//! - Provide a filesystem-backed vault implementation.
//!
//! # Invariants
//! - All paths crossing this boundary are vault-relative and `/`-separated.

pub mod path;
pub mod store;

pub use path::{daily_note_file_name, daily_note_path, normalize_vault_path};
pub use store::{suggest_template_files, FsNoteStore, NoteStore, StoreError, StoreResult};
