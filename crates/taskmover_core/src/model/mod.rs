//! Domain model for carried-over tasks.
//!
//! # Responsibility
//! - Define the ordered heading -> task-lines grouping shared by extraction
//!   and template application.
//! - Own the literal markers both sides must agree on.
//!
//! # Invariants
//! - Heading order follows first appearance in the source note.
//! - The empty heading is reserved for lines before any heading.

pub mod task_mapping;
