//! In-memory mirror of employee records.
//!
//! # Responsibility
//! - Keep a write-through mirror of the `employees` table for fast listing.
//! - Offer an in-memory-only mode for isolated tests.
//!
//! # Invariants
//! - The mirror is mutated only through `RecordCache` methods.
//! - The durable store wins over the mirror on keyed reads.

pub mod record_cache;
