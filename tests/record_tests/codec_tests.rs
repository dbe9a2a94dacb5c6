//! Codec Tests
//!
//! These tests verify:
//! - Encoded records are always RECORD_SIZE bytes
//! - Field placement and byte order
//! - Round-trips for accounts within field bounds
//! - Short blocks are rejected as corrupt
//! - Decoding of foreign name buffers

use bankstore::record::{
    decode_account, encode_account, Account, NAME_CAPACITY, NAME_FIELD_SIZE, RECORD_SIZE,
};
use bankstore::BankError;

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_record_size_constant() {
    assert_eq!(RECORD_SIZE, 62);
    assert_eq!(NAME_CAPACITY, 49);
}

#[test]
fn test_encode_fixed_width() {
    let short = Account::new(1, "", 0.0).unwrap();
    let long = Account::new(2, &"x".repeat(NAME_CAPACITY), 1e12).unwrap();

    assert_eq!(encode_account(&short).len(), RECORD_SIZE);
    assert_eq!(encode_account(&long).len(), RECORD_SIZE);
}

#[test]
fn test_encode_field_layout() {
    let account = Account::new(7, "Alice", 100.0).unwrap();
    let bytes = encode_account(&account);

    assert_eq!(&bytes[0..4], &7i32.to_le_bytes());
    assert_eq!(&bytes[4..9], b"Alice");
    assert!(bytes[9..4 + NAME_FIELD_SIZE].iter().all(|&b| b == 0));
    assert_eq!(&bytes[54..62], &100.0f64.to_le_bytes());
}

#[test]
fn test_encode_full_name_keeps_terminator() {
    let account = Account::new(3, &"n".repeat(NAME_CAPACITY), 5.0).unwrap();
    let bytes = encode_account(&account);

    // Last byte of the name field is always NUL
    assert_eq!(bytes[4 + NAME_CAPACITY], 0);
}

// =============================================================================
// Round-trip Tests
// =============================================================================

#[test]
fn test_roundtrip_accounts_within_bounds() {
    let accounts = vec![
        Account::new(7, "Alice", 100.0).unwrap(),
        Account::new(-1, "Negative Number", -42.25).unwrap(),
        Account::new(i32::MAX, "Max", f64::MAX).unwrap(),
        Account::new(0, "", 0.0).unwrap(),
        Account::new(12, "Zoë Ångström", 0.1).unwrap(),
        Account::new(99, &"y".repeat(NAME_CAPACITY), 3.5).unwrap(),
    ];

    for account in accounts {
        let decoded = decode_account(&encode_account(&account)).unwrap();
        assert_eq!(decoded, account);
    }
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_short_block_is_corrupt() {
    let account = Account::new(7, "Alice", 100.0).unwrap();
    let bytes = encode_account(&account);

    let result = decode_account(&bytes[..10]);
    match result {
        Err(BankError::CorruptRecord { expected, actual }) => {
            assert_eq!(expected, RECORD_SIZE);
            assert_eq!(actual, 10);
        }
        other => panic!("Expected CorruptRecord, got {:?}", other),
    }
}

#[test]
fn test_decode_empty_block_is_corrupt() {
    assert!(matches!(
        decode_account(&[]),
        Err(BankError::CorruptRecord { actual: 0, .. })
    ));
}

#[test]
fn test_decode_one_byte_short_is_corrupt() {
    let bytes = vec![0u8; RECORD_SIZE - 1];
    assert!(matches!(
        decode_account(&bytes),
        Err(BankError::CorruptRecord { .. })
    ));
}

#[test]
fn test_decode_ignores_trailing_bytes() {
    let account = Account::new(8, "Bob", 50.0).unwrap();
    let mut bytes = encode_account(&account).to_vec();
    bytes.extend_from_slice(&[0xAB; 17]);

    assert_eq!(decode_account(&bytes).unwrap(), account);
}

#[test]
fn test_decode_unterminated_name_uses_capacity() {
    let mut block = vec![0u8; RECORD_SIZE];
    block[0..4].copy_from_slice(&5i32.to_le_bytes());
    for b in &mut block[4..4 + NAME_FIELD_SIZE] {
        *b = b'x';
    }
    block[54..62].copy_from_slice(&1.5f64.to_le_bytes());

    let account = decode_account(&block).unwrap();
    assert_eq!(account.name.as_str(), "x".repeat(NAME_CAPACITY));
    assert_eq!(account.balance, 1.5);
}

#[test]
fn test_decode_invalid_utf8_stays_encodable() {
    let mut block = vec![0u8; RECORD_SIZE];
    for b in &mut block[4..4 + NAME_CAPACITY] {
        *b = 0xFF;
    }

    let account = decode_account(&block).unwrap();
    assert!(account.name.as_bytes().len() <= NAME_CAPACITY);
    assert!(account.name.as_str().starts_with('\u{FFFD}'));

    // Re-encoding must still produce a full-width record
    assert_eq!(encode_account(&account).len(), RECORD_SIZE);
}
