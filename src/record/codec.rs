//! Record codec
//!
//! Field-by-field encoding so the on-disk format never depends on
//! in-memory layout, alignment or padding.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{BankError, Result};

use super::account::{Account, AccountName};
use super::{NAME_CAPACITY, NAME_FIELD_SIZE, RECORD_SIZE};

/// Encode an account into exactly `RECORD_SIZE` bytes
///
/// Format: account_number (4) + name (50, NUL padded) + balance (8)
pub fn encode_account(account: &Account) -> Bytes {
    let name = account.name.as_bytes();

    let mut buf = BytesMut::with_capacity(RECORD_SIZE);
    buf.put_i32_le(account.account_number);
    buf.put_slice(name);
    // Terminator plus padding out to the fixed field width
    buf.put_bytes(0, NAME_FIELD_SIZE - name.len());
    buf.put_f64_le(account.balance);

    debug_assert_eq!(buf.len(), RECORD_SIZE);
    buf.freeze()
}

/// Decode an account from a record block
///
/// Only the first `RECORD_SIZE` bytes are read; a shorter block is a
/// `CorruptRecord` (typically a torn trailing write).
pub fn decode_account(bytes: &[u8]) -> Result<Account> {
    if bytes.len() < RECORD_SIZE {
        return Err(BankError::CorruptRecord {
            expected: RECORD_SIZE,
            actual: bytes.len(),
        });
    }

    let mut buf = &bytes[..RECORD_SIZE];

    let account_number = buf.get_i32_le();

    let field = &buf[..NAME_FIELD_SIZE];
    let usable = &field[..NAME_CAPACITY];
    let end = usable.iter().position(|&b| b == 0).unwrap_or(NAME_CAPACITY);
    let mut name = String::from_utf8_lossy(&usable[..end]).into_owned();
    // Replacement characters can widen foreign bytes past capacity
    while name.len() > NAME_CAPACITY {
        name.pop();
    }
    buf.advance(NAME_FIELD_SIZE);

    let balance = buf.get_f64_le();

    Ok(Account {
        account_number,
        name: AccountName::from_stored(name),
        balance,
    })
}
