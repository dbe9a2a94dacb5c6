//! Store Module
//!
//! Flat-file persistence of fixed-width account records.
//!
//! ## Responsibilities
//! - Append records at the end of the file (created on first append)
//! - Lazy sequential scans from offset 0
//! - Lookup by account number (every match, in file order)
//! - In-place balance updates at the matching record's offset
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Record 0   (RECORD_SIZE bytes)          │
//! ├─────────────────────────────────────────┤
//! │ Record 1   (RECORD_SIZE bytes)          │
//! ├─────────────────────────────────────────┤
//! │ ...                                     │
//! └─────────────────────────────────────────┘
//! ```
//! Record `i` starts at byte `i * RECORD_SIZE`. Appends grow the file by one
//! record; updates never change its length.

mod iterator;
mod flat_file;

pub use iterator::RecordIter;
pub use flat_file::RecordStore;

use crate::record::Account;

/// Direction of a balance adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaKind {
    /// `balance + amount`, unguarded
    Deposit,

    /// `balance - amount`, only when `amount <= balance`
    Withdraw,
}

/// Outcome of a successful in-place update
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaReceipt {
    /// Byte offset of the rewritten record
    pub offset: u64,

    /// Balance before the update
    pub previous_balance: f64,

    /// The record as written back
    pub account: Account,
}
