//! Session state machine and credential validation.
//!
//! # Responsibility
//! - Transition between anonymous and authenticated states.
//! - Validate credentials against the account store by exact match.
//! - Expose the "own record" visibility rule for employee-role sessions.
//!
//! # Invariants
//! - At most one account is authenticated at a time.
//! - Authentication and password changes always re-read the store, so role
//!   or password changes made elsewhere take effect immediately.
//! - Admin/Manager sessions are never scoped to "their own" record.

use crate::model::account::Account;
use crate::model::employee::EmployeeId;
use crate::repo::account_repo::AccountStore;
use log::{error, info, warn};

/// Holds the current session and answers capability checks.
pub struct AccessController<S: AccountStore> {
    store: S,
    current: Option<Account>,
}

impl<S: AccountStore> AccessController<S> {
    /// Creates a controller in the anonymous state.
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Attempts to authenticate and establish a session.
    ///
    /// Reads the authoritative account from the store on every call. The
    /// caller only learns success or failure; the audit log records which
    /// username failed.
    pub fn authenticate(&mut self, username: &str, password: &str) -> bool {
        let account = match self.store.get_by_username(username) {
            Ok(account) => account,
            Err(err) => {
                error!("event=auth module=auth status=error username={username} error={err}");
                return false;
            }
        };

        if let Some(account) = account {
            if account.verify_password(password) {
                info!(
                    "event=auth module=auth status=ok username={username} role={}",
                    account.role.as_db_str()
                );
                self.current = Some(account);
                return true;
            }
        }

        warn!("event=auth module=auth status=denied username={username}");
        false
    }

    /// Clears the session. Idempotent.
    pub fn logout(&mut self) {
        if let Some(account) = self.current.take() {
            info!(
                "event=logout module=auth status=ok username={}",
                account.username
            );
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the account backing the current session, if any.
    pub fn current_account(&self) -> Option<&Account> {
        self.current.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|account| account.is_admin())
    }

    pub fn is_manager_or_admin(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|account| account.is_manager_or_admin())
    }

    /// True only for an employee-role session linked to exactly this record.
    pub fn is_viewing_own_record(&self, employee_id: EmployeeId) -> bool {
        let Some(account) = self.current.as_ref() else {
            return false;
        };
        if account.is_manager_or_admin() {
            return false;
        }
        account.employee_id == Some(employee_id)
    }

    /// Replaces a password after verifying the old one against the store.
    ///
    /// Updates the cached session account when it belongs to the same user,
    /// so a live session keeps matching the store.
    pub fn change_password(&mut self, username: &str, old: &str, new: &str) -> bool {
        let account = match self.store.get_by_username(username) {
            Ok(Some(account)) => account,
            Ok(None) => {
                warn!("event=password_change module=auth status=denied username={username}");
                return false;
            }
            Err(err) => {
                error!(
                    "event=password_change module=auth status=error username={username} error={err}"
                );
                return false;
            }
        };

        if !account.verify_password(old) {
            warn!("event=password_change module=auth status=denied username={username}");
            return false;
        }

        if let Err(err) = self.store.update_password(username, new) {
            error!(
                "event=password_change module=auth status=error username={username} error={err}"
            );
            return false;
        }

        if let Some(current) = self.current.as_mut() {
            if current.username == username {
                current.password = new.to_string();
            }
        }

        info!("event=password_change module=auth status=ok username={username}");
        true
    }

    /// Fresh store lookup by username.
    pub fn account_by_username(&self, username: &str) -> Option<Account> {
        match self.store.get_by_username(username) {
            Ok(account) => account,
            Err(err) => {
                error!("event=account_get module=auth status=error username={username} error={err}");
                None
            }
        }
    }

    /// Fresh store lookup by linked employee id.
    pub fn account_by_employee_id(&self, employee_id: EmployeeId) -> Option<Account> {
        match self.store.get_by_employee_id(employee_id) {
            Ok(account) => account,
            Err(err) => {
                error!(
                    "event=account_get module=auth status=error employee_id={employee_id} error={err}"
                );
                None
            }
        }
    }
}
