//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate cache and store calls into use-case level APIs.
//! - Validate caller-supplied data before it reaches persistence.

pub mod directory;
