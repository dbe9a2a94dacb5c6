//! Tests for Account and AccountName
//!
//! These tests verify:
//! - Name capacity is enforced by rejection
//! - Deposit is unguarded, withdraw is guarded
//! - Display format

use bankstore::record::{Account, AccountName, NAME_CAPACITY};
use bankstore::BankError;

// =============================================================================
// AccountName Tests
// =============================================================================

#[test]
fn test_name_at_capacity_accepted() {
    let name = AccountName::new("a".repeat(NAME_CAPACITY)).unwrap();
    assert_eq!(name.as_bytes().len(), NAME_CAPACITY);
}

#[test]
fn test_name_over_capacity_rejected() {
    let result = AccountName::new("a".repeat(NAME_CAPACITY + 1));
    match result {
        Err(BankError::NameTooLong { len, max }) => {
            assert_eq!(len, 50);
            assert_eq!(max, 49);
        }
        other => panic!("Expected NameTooLong, got {:?}", other),
    }
}

#[test]
fn test_name_capacity_counts_bytes_not_chars() {
    // 25 two-byte characters = 50 bytes
    let result = AccountName::new("é".repeat(25));
    assert!(matches!(result, Err(BankError::NameTooLong { len: 50, .. })));
}

#[test]
fn test_name_with_nul_rejected() {
    let result = AccountName::new("Al\0ice");
    assert!(matches!(result, Err(BankError::InvalidName(_))));
}

#[test]
fn test_name_try_from_str() {
    let name = AccountName::try_from("Bob").unwrap();
    assert_eq!(name.to_string(), "Bob");
}

#[test]
fn test_account_new_propagates_name_error() {
    let result = Account::new(1, &"z".repeat(60), 0.0);
    assert!(matches!(result, Err(BankError::NameTooLong { .. })));
}

// =============================================================================
// Balance Tests
// =============================================================================

#[test]
fn test_deposit_adds() {
    let mut account = Account::new(1, "A", 10.0).unwrap();
    account.deposit(5.5);
    assert_eq!(account.balance, 15.5);
}

#[test]
fn test_deposit_is_unguarded() {
    let mut account = Account::new(1, "A", 10.0).unwrap();
    account.deposit(-25.0);
    assert_eq!(account.balance, -15.0);
}

#[test]
fn test_withdraw_within_balance() {
    let mut account = Account::new(1, "A", 100.0).unwrap();
    account.withdraw(30.0).unwrap();
    assert_eq!(account.balance, 70.0);
}

#[test]
fn test_withdraw_entire_balance() {
    let mut account = Account::new(1, "A", 100.0).unwrap();
    account.withdraw(100.0).unwrap();
    assert_eq!(account.balance, 0.0);
}

#[test]
fn test_withdraw_over_balance_rejected() {
    let mut account = Account::new(1, "A", 100.0).unwrap();
    let result = account.withdraw(100.01);

    match result {
        Err(BankError::InsufficientBalance { requested, available }) => {
            assert_eq!(requested, 100.01);
            assert_eq!(available, 100.0);
        }
        other => panic!("Expected InsufficientBalance, got {:?}", other),
    }
    assert_eq!(account.balance, 100.0);
}

// =============================================================================
// Display Tests
// =============================================================================

#[test]
fn test_display_format() {
    let account = Account::new(7, "Alice", 100.0).unwrap();
    assert_eq!(
        account.to_string(),
        "Account No.: 7\nName: Alice\nBalance: 100"
    );
}

#[test]
fn test_display_fractional_balance() {
    let account = Account::new(8, "Bob", 70.5).unwrap();
    assert!(account.to_string().ends_with("Balance: 70.5"));
}

#[test]
fn test_display_rounds_to_six_significant_digits() {
    let mut account = Account::new(1, "A", 0.1).unwrap();
    account.deposit(0.2);
    assert!(account.to_string().ends_with("Balance: 0.3"));

    let account = Account::new(2, "B", 123456.7).unwrap();
    assert!(account.to_string().ends_with("Balance: 123457"));
}

#[test]
fn test_display_large_and_small_balances_use_exponent() {
    let cases = [
        (1e21, "1e+21"),
        (1234567.0, "1.23457e+06"),
        (-2.5e-5, "-2.5e-05"),
        (0.0001, "0.0001"),
        (-70.25, "-70.25"),
        (0.0, "0"),
    ];

    for (balance, expected) in cases {
        let account = Account::new(1, "A", balance).unwrap();
        assert_eq!(
            account.to_string(),
            format!("Account No.: 1\nName: A\nBalance: {}", expected)
        );
    }
}
