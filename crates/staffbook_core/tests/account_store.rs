use staffbook_core::db::open_db_in_memory;
use staffbook_core::{
    Account, AccountStore, Employee, EmployeeStore, RepoError, Role, SqliteAccountStore,
    SqliteEmployeeStore,
};

#[test]
fn get_all_accounts_lists_seeded_and_derived_accounts_by_username() {
    let conn = open_db_in_memory().unwrap();
    let employees = SqliteEmployeeStore::new(&conn);
    employees
        .add_employee(&Employee::new(101, "John Smith", "Engineering", 50000.0))
        .unwrap();

    let accounts = SqliteAccountStore::new(&conn);
    let all = accounts.get_all_accounts().unwrap();

    let usernames: Vec<&str> = all.iter().map(|account| account.username.as_str()).collect();
    assert_eq!(usernames, vec!["admin", "john_smith", "manager"]);

    let derived = &all[1];
    assert_eq!(derived.role, Role::Employee);
    assert_eq!(derived.employee_id, Some(101));
}

#[test]
fn get_all_accounts_includes_manually_added_accounts() {
    let conn = open_db_in_memory().unwrap();
    let accounts = SqliteAccountStore::new(&conn);

    accounts
        .add_account(&Account::new("auditor", "aud1t", Role::Manager))
        .unwrap();

    let all = accounts.get_all_accounts().unwrap();
    assert_eq!(all.len(), 3);
    assert!(all
        .iter()
        .any(|account| account.username == "auditor" && account.role == Role::Manager));
}

#[test]
fn corrupted_role_value_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO accounts (username, password, role, employee_id)
         VALUES ('broken', 'pw', 'SUPERVISOR', NULL);",
        [],
    )
    .unwrap();

    let accounts = SqliteAccountStore::new(&conn);

    let err = accounts.get_by_username("broken").unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(ref message) if message.contains("SUPERVISOR")));

    let err = accounts.get_all_accounts().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
