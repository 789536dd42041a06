//! Core domain logic for staffbook, an employee record store with a derived
//! login-account and authentication layer.
//! This crate is the single source of truth for business invariants.

pub mod auth;
pub mod cache;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use auth::access::AccessController;
pub use cache::record_cache::RecordCache;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::account::{Account, Role};
pub use model::employee::{Employee, EmployeeId, EmployeeValidationError};
pub use model::payment::PaymentMethod;
pub use repo::account_repo::{AccountStore, SqliteAccountStore};
pub use repo::employee_repo::{EmployeeStore, SqliteEmployeeStore};
pub use repo::{RepoError, RepoResult};
pub use service::directory::EmployeeDirectory;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
