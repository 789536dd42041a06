//! Employee repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `employees` table.
//! - Provision the derived login account as a side effect of employee
//!   creation.
//! - Keep referential integrity on removal by deleting linked accounts first.
//!
//! # Invariants
//! - `update_employee` replaces the whole row, never merges fields.
//! - Account provisioning failure never rolls back the employee insert; the
//!   inconsistency window is logged and tolerated.

use crate::model::account::Account;
use crate::model::employee::{Employee, EmployeeId};
use crate::model::payment::PaymentMethod;
use crate::repo::{RepoError, RepoResult};
use log::{error, info};
use rusqlite::{params, Connection, Row};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    id,
    name,
    department,
    salary,
    payment_method
FROM employees";

/// Repository interface for employee CRUD operations.
pub trait EmployeeStore {
    /// Inserts an employee and provisions its derived login account.
    fn add_employee(&self, employee: &Employee) -> RepoResult<()>;
    /// Replaces the stored row matching `employee.id`.
    fn update_employee(&self, employee: &Employee) -> RepoResult<()>;
    /// Updates only the disbursement method of the matching row.
    fn update_payment_method(&self, id: EmployeeId, method: PaymentMethod) -> RepoResult<()>;
    /// Deletes referencing accounts, then the employee row.
    fn remove_employee(&self, id: EmployeeId) -> RepoResult<()>;
    /// Returns all employees in id order.
    fn get_all_employees(&self) -> RepoResult<Vec<Employee>>;
    fn get_employee_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Inserts the auto-provisioned account for a freshly created employee.
    ///
    /// The employee row already exists at this point. A failure here leaves
    /// the employee without a login, which callers accept; the event is
    /// logged for follow-up instead of rolling back the insert.
    fn provision_account(&self, employee: &Employee) {
        let account = Account::derived_for(employee);
        let result = self.conn.execute(
            "INSERT INTO accounts (username, password, role, employee_id)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                account.username,
                account.password,
                account.role.as_db_str(),
                account.employee_id,
            ],
        );

        match result {
            Ok(_) => info!(
                "event=account_provision module=store status=ok employee_id={} username={}",
                employee.id, account.username
            ),
            Err(err) => error!(
                "event=account_provision module=store status=error employee_id={} username={} error={}",
                employee.id, account.username, err
            ),
        }
    }
}

impl EmployeeStore for SqliteEmployeeStore<'_> {
    fn add_employee(&self, employee: &Employee) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO employees (id, name, department, salary, payment_method)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                employee.id,
                employee.name.as_str(),
                employee.department.as_str(),
                employee.salary,
                employee.payment_method.as_db_str(),
            ],
        )?;

        self.provision_account(employee);
        Ok(())
    }

    fn update_employee(&self, employee: &Employee) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE employees
             SET name = ?1, department = ?2, salary = ?3, payment_method = ?4
             WHERE id = ?5;",
            params![
                employee.name.as_str(),
                employee.department.as_str(),
                employee.salary,
                employee.payment_method.as_db_str(),
                employee.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::EmployeeNotFound(employee.id));
        }

        Ok(())
    }

    fn update_payment_method(&self, id: EmployeeId, method: PaymentMethod) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE employees SET payment_method = ?1 WHERE id = ?2;",
            params![method.as_db_str(), id],
        )?;

        if changed == 0 {
            return Err(RepoError::EmployeeNotFound(id));
        }

        Ok(())
    }

    fn remove_employee(&self, id: EmployeeId) -> RepoResult<()> {
        // Accounts reference employees.id; they must go first.
        self.conn
            .execute("DELETE FROM accounts WHERE employee_id = ?1;", [id])?;

        let changed = self
            .conn
            .execute("DELETE FROM employees WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::EmployeeNotFound(id));
        }

        Ok(())
    }

    fn get_all_employees(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();
        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }

    fn get_employee_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let method_text: String = row.get("payment_method")?;

    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        department: row.get("department")?,
        salary: row.get("salary")?,
        payment_method: PaymentMethod::from_db_str(&method_text),
    })
}
