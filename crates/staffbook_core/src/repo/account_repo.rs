//! Account repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide keyed access to the `accounts` table by username and by linked
//!   employee id.
//! - Keep credential updates confined to the password column.
//!
//! # Invariants
//! - `username` is the primary key; inserting a duplicate is a transport
//!   error surfaced to the caller.
//! - Unknown persisted role tags are reported as `InvalidData`, never
//!   silently coerced.

use crate::model::account::{Account, Role};
use crate::model::employee::EmployeeId;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const ACCOUNT_SELECT_SQL: &str = "SELECT
    username,
    password,
    role,
    employee_id
FROM accounts";

/// Repository interface for account lookup and credential maintenance.
pub trait AccountStore {
    fn add_account(&self, account: &Account) -> RepoResult<()>;
    fn get_by_username(&self, username: &str) -> RepoResult<Option<Account>>;
    fn get_by_employee_id(&self, employee_id: EmployeeId) -> RepoResult<Option<Account>>;
    /// Replaces the stored password for `username`.
    fn update_password(&self, username: &str, new_password: &str) -> RepoResult<()>;
    fn get_all_accounts(&self) -> RepoResult<Vec<Account>>;
}

/// SQLite-backed account repository.
pub struct SqliteAccountStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAccountStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AccountStore for SqliteAccountStore<'_> {
    fn add_account(&self, account: &Account) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO accounts (username, password, role, employee_id)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                account.username.as_str(),
                account.password.as_str(),
                account.role.as_db_str(),
                account.employee_id,
            ],
        )?;

        Ok(())
    }

    fn get_by_username(&self, username: &str) -> RepoResult<Option<Account>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ACCOUNT_SELECT_SQL} WHERE username = ?1;"))?;

        let mut rows = stmt.query([username])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_account_row(row)?));
        }

        Ok(None)
    }

    fn get_by_employee_id(&self, employee_id: EmployeeId) -> RepoResult<Option<Account>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ACCOUNT_SELECT_SQL} WHERE employee_id = ?1;"))?;

        let mut rows = stmt.query([employee_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_account_row(row)?));
        }

        Ok(None)
    }

    fn update_password(&self, username: &str, new_password: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE accounts SET password = ?1 WHERE username = ?2;",
            params![new_password, username],
        )?;

        if changed == 0 {
            return Err(RepoError::AccountNotFound(username.to_string()));
        }

        Ok(())
    }

    fn get_all_accounts(&self) -> RepoResult<Vec<Account>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ACCOUNT_SELECT_SQL} ORDER BY username ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut accounts = Vec::new();
        while let Some(row) = rows.next()? {
            accounts.push(parse_account_row(row)?);
        }

        Ok(accounts)
    }
}

fn parse_account_row(row: &Row<'_>) -> RepoResult<Account> {
    let role_text: String = row.get("role")?;
    let role = Role::from_db_str(&role_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid role value `{role_text}` in accounts.role"))
    })?;

    Ok(Account {
        username: row.get("username")?,
        password: row.get("password")?,
        role,
        employee_id: row.get("employee_id")?,
    })
}
