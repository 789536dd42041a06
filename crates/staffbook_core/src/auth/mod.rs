//! Authentication and role-based access checks.
//!
//! # Responsibility
//! - Hold the single authenticated session for the process.
//! - Answer role-derived capability questions for collaborators.
//!
//! # Invariants
//! - Credential checks re-read the durable store on every attempt.
//! - Failed attempts are reported as a plain `false`, with detail kept in
//!   the audit log only.

pub mod access;
