//! Domain model for employee records and login accounts.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one shape per entity shared by the cache mirror and the store.
//!
//! # Invariants
//! - Employees are identified by a positive numeric `EmployeeId`.
//! - Accounts are identified by a unique username.

pub mod account;
pub mod employee;
pub mod payment;
