//! Login account domain model.
//!
//! # Responsibility
//! - Define the credential/role record backing authentication.
//! - Derive the auto-provisioned account for a new employee.
//!
//! # Invariants
//! - `username` is unique across all accounts.
//! - `employee_id` is set only for `Role::Employee` accounts.
//! - Password comparison is exact string equality; no hashing is applied.

use crate::model::employee::{Employee, EmployeeId};
use serde::{Deserialize, Serialize};

/// Access level attached to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full CRUD, reports and account listing.
    Admin,
    /// Employee CRUD and pay-run, no reports.
    Manager,
    /// Read-only, restricted to the linked record.
    Employee,
}

impl Role {
    /// Stable tag stored in the `accounts.role` column.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::Employee => "EMPLOYEE",
        }
    }

    /// Parses a persisted role tag.
    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Self::Admin),
            "MANAGER" => Some(Self::Manager),
            "EMPLOYEE" => Some(Self::Employee),
            _ => None,
        }
    }
}

/// Credential record, optionally linked to an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub role: Role,
    /// Back-reference to `employees.id`; `None` for Admin/Manager accounts.
    pub employee_id: Option<EmployeeId>,
}

impl Account {
    /// Creates an unlinked account.
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
            employee_id: None,
        }
    }

    /// Synthesizes the account auto-provisioned for a new employee.
    ///
    /// # Contract
    /// - username: lowercase name, spaces replaced by underscores.
    /// - password: employee id followed by the first 3 characters of the
    ///   name (fewer if the name is shorter), case preserved.
    pub fn derived_for(employee: &Employee) -> Self {
        let username = employee.name.to_lowercase().replace(' ', "_");
        let prefix: String = employee.name.chars().take(3).collect();
        Self {
            username,
            password: format!("{}{prefix}", employee.id),
            role: Role::Employee,
            employee_id: Some(employee.id),
        }
    }

    /// Compares a candidate password against the stored one.
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// True for managers and admins alike.
    pub fn is_manager_or_admin(&self) -> bool {
        matches!(self.role, Role::Manager | Role::Admin)
    }
}
