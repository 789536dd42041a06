//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record shared by cache and store.
//! - Provide pay-stub rendering and field validation for boundary callers.
//!
//! # Invariants
//! - `id` uniquely identifies at most one record in cache and store.
//! - `id` is immutable after creation.
//! - Validation is enforced at the service boundary, not inside persistence.

use crate::model::payment::PaymentMethod;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable numeric identifier for an employee record.
pub type EmployeeId = i64;

/// Canonical employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Positive, unique, immutable after creation.
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    /// Non-negative. Stored as REAL in the `employees` table.
    pub salary: f64,
    pub payment_method: PaymentMethod,
}

/// Field-level constraint violations reported before persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeValidationError {
    NonPositiveId,
    EmptyName,
    EmptyDepartment,
    NegativeSalary,
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId => write!(f, "employee id must be positive"),
            Self::EmptyName => write!(f, "employee name cannot be empty"),
            Self::EmptyDepartment => write!(f, "employee department cannot be empty"),
            Self::NegativeSalary => write!(f, "employee salary cannot be negative"),
        }
    }
}

impl Error for EmployeeValidationError {}

impl Employee {
    /// Creates an employee with the default direct-deposit method.
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self::with_payment_method(id, name, department, salary, PaymentMethod::default())
    }

    /// Creates an employee with an explicit disbursement method.
    pub fn with_payment_method(
        id: EmployeeId,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            salary,
            payment_method,
        }
    }

    /// Checks boundary constraints on caller-supplied fields.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if self.id <= 0 {
            return Err(EmployeeValidationError::NonPositiveId);
        }
        if self.name.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyName);
        }
        if self.department.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyDepartment);
        }
        if self.salary < 0.0 {
            return Err(EmployeeValidationError::NegativeSalary);
        }
        Ok(())
    }

    /// Renders this employee's pay-stub line.
    pub fn pay_stub(&self) -> String {
        format!(
            "Paystub: ID: {}, Name: {}, {}",
            self.id,
            self.name,
            self.payment_method.pay(self.salary)
        )
    }
}
