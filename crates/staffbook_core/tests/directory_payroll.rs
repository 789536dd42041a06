use staffbook_core::db::open_db_in_memory;
use staffbook_core::{
    AccountStore, EmployeeDirectory, EmployeeStore, PaymentMethod, RecordCache,
    SqliteAccountStore, SqliteEmployeeStore,
};

#[test]
fn add_then_get_returns_the_input_with_default_method() {
    let conn = open_db_in_memory().unwrap();
    let mut directory = EmployeeDirectory::new(SqliteEmployeeStore::new(&conn));

    assert!(directory.add_employee(101, "John Smith", "Engineering", 50000.0, None));

    let loaded = directory.get_employee_by_id(101).unwrap();
    assert_eq!(loaded.name, "John Smith");
    assert_eq!(loaded.department, "Engineering");
    assert_eq!(loaded.salary, 50000.0);
    assert_eq!(loaded.payment_method, PaymentMethod::DirectDeposit);
}

#[test]
fn add_accepts_an_explicit_check_method() {
    let conn = open_db_in_memory().unwrap();
    let mut directory = EmployeeDirectory::new(SqliteEmployeeStore::new(&conn));

    assert!(directory.add_employee(1, "Alice", "Sales", 40000.0, Some(PaymentMethod::Check)));
    assert_eq!(
        directory.get_employee_by_id(1).unwrap().payment_method,
        PaymentMethod::Check
    );
}

#[test]
fn add_rejects_invalid_input_before_persistence() {
    let conn = open_db_in_memory().unwrap();
    let mut directory = EmployeeDirectory::new(SqliteEmployeeStore::new(&conn));

    assert!(!directory.add_employee(0, "Alice", "Sales", 40000.0, None));
    assert!(!directory.add_employee(-3, "Alice", "Sales", 40000.0, None));
    assert!(!directory.add_employee(1, "", "Sales", 40000.0, None));
    assert!(!directory.add_employee(1, "Alice", "  ", 40000.0, None));
    assert!(!directory.add_employee(1, "Alice", "Sales", -1.0, None));

    assert!(directory.get_all_employees().is_empty());
    let store = SqliteEmployeeStore::new(&conn);
    assert!(store.get_all_employees().unwrap().is_empty());
}

#[test]
fn directory_over_an_isolated_cache_never_touches_the_store() {
    let conn = open_db_in_memory().unwrap();
    let mut cache = RecordCache::new(SqliteEmployeeStore::new(&conn));
    cache.set_in_memory_only(true);
    let mut directory = EmployeeDirectory::with_cache(cache);

    assert!(directory.add_employee(1, "Alice", "Engineering", 50000.0, None));
    assert!(directory.pay_all().contains("Paystub: ID: 1"));

    let store = SqliteEmployeeStore::new(&conn);
    assert!(store.get_all_employees().unwrap().is_empty());
}

#[test]
fn update_preserves_the_method_when_not_given() {
    let conn = open_db_in_memory().unwrap();
    let mut directory = EmployeeDirectory::new(SqliteEmployeeStore::new(&conn));
    directory.add_employee(1, "Alice", "Sales", 40000.0, Some(PaymentMethod::Check));

    assert!(directory.update_employee(1, "Alice Woods", "Marketing", 45000.0, None));

    let loaded = directory.get_employee_by_id(1).unwrap();
    assert_eq!(loaded.name, "Alice Woods");
    assert_eq!(loaded.department, "Marketing");
    assert_eq!(loaded.payment_method, PaymentMethod::Check);
}

#[test]
fn update_unknown_id_reports_false() {
    let conn = open_db_in_memory().unwrap();
    let mut directory = EmployeeDirectory::new(SqliteEmployeeStore::new(&conn));

    assert!(!directory.update_employee(404, "Nobody", "Nowhere", 1.0, None));
}

#[test]
fn update_rejects_invalid_input() {
    let conn = open_db_in_memory().unwrap();
    let mut directory = EmployeeDirectory::new(SqliteEmployeeStore::new(&conn));
    directory.add_employee(1, "Alice", "Sales", 40000.0, None);

    assert!(!directory.update_employee(1, "", "Sales", 40000.0, None));
    assert_eq!(directory.get_employee_by_id(1).unwrap().name, "Alice");
}

#[test]
fn remove_destroys_record_and_linked_account() {
    let conn = open_db_in_memory().unwrap();
    let mut directory = EmployeeDirectory::new(SqliteEmployeeStore::new(&conn));
    directory.add_employee(11, "Lin Chen", "Finance", 65000.0, None);

    assert!(directory.remove_employee(11));

    assert!(directory.get_employee_by_id(11).is_none());
    let accounts = SqliteAccountStore::new(&conn);
    assert!(accounts.get_by_employee_id(11).unwrap().is_none());
}

#[test]
fn change_payment_method_round_trip_restores_the_pay_stub() {
    let conn = open_db_in_memory().unwrap();
    let mut directory = EmployeeDirectory::new(SqliteEmployeeStore::new(&conn));
    directory.add_employee(9, "Grace Hopper", "Engineering", 90000.0, None);

    let original_stub = directory.get_employee_by_id(9).unwrap().pay_stub();

    assert!(directory.change_payment_method(9, PaymentMethod::Check));
    assert!(directory
        .get_employee_by_id(9)
        .unwrap()
        .pay_stub()
        .contains("via Check."));

    assert!(directory.change_payment_method(9, PaymentMethod::DirectDeposit));
    assert_eq!(directory.get_employee_by_id(9).unwrap().pay_stub(), original_stub);
}

#[test]
fn pay_all_lists_a_stub_per_employee_with_both_methods() {
    let conn = open_db_in_memory().unwrap();
    let mut directory = EmployeeDirectory::new(SqliteEmployeeStore::new(&conn));
    directory.add_employee(1, "Alice", "Engineering", 50000.0, None);
    directory.add_employee(2, "Bob", "Support", 35000.0, Some(PaymentMethod::Check));

    let output = directory.pay_all();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "Paystub: ID: 1, Name: Alice, Paid 50000.0 via Direct Deposit."
    );
    assert_eq!(lines[1], "Paystub: ID: 2, Name: Bob, Paid 35000.0 via Check.");
    assert!(output.contains("Direct Deposit"));
    assert!(output.contains("Check"));
}

#[test]
fn refresh_twice_yields_identical_listings() {
    let conn = open_db_in_memory().unwrap();
    let mut directory = EmployeeDirectory::new(SqliteEmployeeStore::new(&conn));
    directory.add_employee(2, "Bob", "Support", 35000.0, None);
    directory.add_employee(1, "Alice", "Engineering", 50000.0, None);

    directory.refresh();
    let first = directory.get_all_employees().to_vec();
    directory.refresh();
    let second = directory.get_all_employees().to_vec();

    assert_eq!(first, second);
}
