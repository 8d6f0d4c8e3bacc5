//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate vault reads/writes around the pure processor.
//! - Keep CLI/host layers decoupled from storage details.

pub mod move_service;
pub mod template;
