//! Write-through employee record cache.
//!
//! # Responsibility
//! - Mirror employee records in memory, in insertion order.
//! - Forward every mutation to the durable store unless in-memory-only mode
//!   is active.
//!
//! # Invariants
//! - After a successful mutating call, mirror and store (when active) agree
//!   on the touched record.
//! - Keyed reads prefer the store and fall back to the mirror on a miss, so
//!   external writes surface without an explicit refresh.

use crate::model::employee::{Employee, EmployeeId};
use crate::model::payment::PaymentMethod;
use crate::repo::employee_repo::EmployeeStore;
use crate::repo::RepoError;
use log::{error, info, warn};

/// In-memory mirror with write-through persistence.
pub struct RecordCache<S: EmployeeStore> {
    store: S,
    mirror: Vec<Employee>,
    in_memory_only: bool,
}

impl<S: EmployeeStore> RecordCache<S> {
    /// Creates a cache and loads the initial mirror from the store.
    pub fn new(store: S) -> Self {
        let mut cache = Self {
            store,
            mirror: Vec::new(),
            in_memory_only: false,
        };
        cache.refresh();
        cache
    }

    /// Suspends or resumes store forwarding.
    ///
    /// Intended for tests that need the mirror in isolation. Records added
    /// while suspended are not persisted retroactively when forwarding
    /// resumes.
    pub fn set_in_memory_only(&mut self, in_memory_only: bool) {
        self.in_memory_only = in_memory_only;
    }

    /// Adds an employee to the mirror and, when persisting, the store.
    ///
    /// Returns `false` when the store rejects the insert; the mirror entry
    /// is kept either way, matching write-through-first semantics.
    pub fn add(&mut self, employee: Employee) -> bool {
        let id = employee.id;
        self.mirror.push(employee.clone());

        if self.in_memory_only {
            return true;
        }

        match self.store.add_employee(&employee) {
            Ok(()) => {
                info!("event=employee_add module=cache status=ok id={id}");
                true
            }
            Err(err) => {
                error!("event=employee_add module=cache status=error id={id} error={err}");
                false
            }
        }
    }

    /// Removes every mirror entry matching `id` and the stored row.
    ///
    /// Returns `false` when no stored row matched.
    pub fn remove(&mut self, id: EmployeeId) -> bool {
        self.mirror.retain(|employee| employee.id != id);

        if self.in_memory_only {
            return true;
        }

        match self.store.remove_employee(id) {
            Ok(()) => {
                info!("event=employee_remove module=cache status=ok id={id}");
                true
            }
            Err(RepoError::EmployeeNotFound(_)) => {
                warn!("event=employee_remove module=cache status=not_found id={id}");
                false
            }
            Err(err) => {
                error!("event=employee_remove module=cache status=error id={id} error={err}");
                false
            }
        }
    }

    /// Replaces the record matching `employee.id` in place.
    ///
    /// Silently does nothing when the id is absent; there is nothing to
    /// update and that is not an error for callers.
    pub fn update(&mut self, employee: Employee) {
        let id = employee.id;
        if let Some(slot) = self.mirror.iter_mut().find(|entry| entry.id == id) {
            *slot = employee.clone();
        }

        if self.in_memory_only {
            return;
        }

        match self.store.update_employee(&employee) {
            Ok(()) => info!("event=employee_update module=cache status=ok id={id}"),
            Err(RepoError::EmployeeNotFound(_)) => {
                warn!("event=employee_update module=cache status=not_found id={id}");
            }
            Err(err) => {
                error!("event=employee_update module=cache status=error id={id} error={err}");
            }
        }
    }

    /// Switches the disbursement method of the matching record.
    ///
    /// Returns `true` when a mirror entry matched, like the listing the
    /// caller is acting on. Store failures are logged, not surfaced.
    pub fn update_payment_method(&mut self, id: EmployeeId, method: PaymentMethod) -> bool {
        let mut updated = false;
        if let Some(slot) = self.mirror.iter_mut().find(|entry| entry.id == id) {
            slot.payment_method = method;
            updated = true;
        }

        if updated && !self.in_memory_only {
            if let Err(err) = self.store.update_payment_method(id, method) {
                error!("event=payment_method_update module=cache status=error id={id} error={err}");
            }
        }

        updated
    }

    /// Returns the mirrored records in insertion order.
    pub fn get_all(&self) -> &[Employee] {
        &self.mirror
    }

    /// Looks up one record by id.
    ///
    /// The durable store is authoritative when persisting; the mirror only
    /// answers when the store misses or fails.
    pub fn get_by_id(&self, id: EmployeeId) -> Option<Employee> {
        if !self.in_memory_only {
            match self.store.get_employee_by_id(id) {
                Ok(Some(employee)) => return Some(employee),
                Ok(None) => {}
                Err(err) => {
                    error!("event=employee_get module=cache status=error id={id} error={err}");
                }
            }
        }

        self.mirror.iter().find(|entry| entry.id == id).cloned()
    }

    /// Reloads the mirror from the store.
    ///
    /// No-op in in-memory-only mode. On a store failure the previous mirror
    /// is kept and the failure is logged.
    pub fn refresh(&mut self) {
        if self.in_memory_only {
            return;
        }

        match self.store.get_all_employees() {
            Ok(employees) => {
                info!(
                    "event=cache_refresh module=cache status=ok count={}",
                    employees.len()
                );
                self.mirror = employees;
            }
            Err(err) => {
                error!("event=cache_refresh module=cache status=error error={err}");
            }
        }
    }
}
