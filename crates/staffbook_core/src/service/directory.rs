//! Employee directory use-case service.
//!
//! # Responsibility
//! - Provide the collaborator-facing CRUD and pay-run surface.
//! - Reject invalid caller input before it reaches cache or store.
//!
//! # Invariants
//! - Validation failures and storage failures alike surface as `false`;
//!   nothing propagates across this boundary.
//! - Pay-run output contains one pay-stub line per mirrored employee, in
//!   listing order.

use crate::cache::record_cache::RecordCache;
use crate::model::employee::{Employee, EmployeeId};
use crate::model::payment::PaymentMethod;
use crate::repo::employee_repo::EmployeeStore;
use log::warn;

/// Collaborator-facing entry point for employee record management.
pub struct EmployeeDirectory<S: EmployeeStore> {
    cache: RecordCache<S>,
}

impl<S: EmployeeStore> EmployeeDirectory<S> {
    /// Creates a directory backed by the given store.
    pub fn new(store: S) -> Self {
        Self {
            cache: RecordCache::new(store),
        }
    }

    /// Creates a directory over an already-configured cache.
    ///
    /// Used by tests that need the in-memory-only switch pre-set.
    pub fn with_cache(cache: RecordCache<S>) -> Self {
        Self { cache }
    }

    /// Adds a new employee record.
    ///
    /// `method` defaults to direct deposit when not given. Returns `false`
    /// on invalid input or a storage failure.
    pub fn add_employee(
        &mut self,
        id: EmployeeId,
        name: &str,
        department: &str,
        salary: f64,
        method: Option<PaymentMethod>,
    ) -> bool {
        let employee = Employee::with_payment_method(
            id,
            name,
            department,
            salary,
            method.unwrap_or_default(),
        );

        if let Err(err) = employee.validate() {
            warn!("event=employee_add module=directory status=rejected id={id} reason={err}");
            return false;
        }

        self.cache.add(employee)
    }

    /// Replaces an existing employee record's fields.
    ///
    /// Keeps the record's current disbursement method when `method` is not
    /// given. Returns `false` when the id is unknown or the input is
    /// invalid.
    pub fn update_employee(
        &mut self,
        id: EmployeeId,
        name: &str,
        department: &str,
        salary: f64,
        method: Option<PaymentMethod>,
    ) -> bool {
        let Some(existing) = self.cache.get_by_id(id) else {
            return false;
        };

        let employee = Employee::with_payment_method(
            id,
            name,
            department,
            salary,
            method.unwrap_or(existing.payment_method),
        );

        if let Err(err) = employee.validate() {
            warn!("event=employee_update module=directory status=rejected id={id} reason={err}");
            return false;
        }

        self.cache.update(employee);
        true
    }

    /// Removes an employee record and its linked account.
    pub fn remove_employee(&mut self, id: EmployeeId) -> bool {
        self.cache.remove(id)
    }

    /// Switches the disbursement method of one employee.
    pub fn change_payment_method(&mut self, id: EmployeeId, method: PaymentMethod) -> bool {
        self.cache.update_payment_method(id, method)
    }

    /// Returns all employee records in listing order.
    pub fn get_all_employees(&self) -> &[Employee] {
        self.cache.get_all()
    }

    /// Looks up one employee record by id.
    pub fn get_employee_by_id(&self, id: EmployeeId) -> Option<Employee> {
        self.cache.get_by_id(id)
    }

    /// Renders pay stubs for every employee, one line each.
    pub fn pay_all(&self) -> String {
        let mut stubs = String::new();
        for employee in self.cache.get_all() {
            stubs.push_str(&employee.pay_stub());
            stubs.push('\n');
        }
        stubs
    }

    /// Reloads the cache mirror from the store.
    pub fn refresh(&mut self) {
        self.cache.refresh();
    }
}
