//! Record Module
//!
//! Fixed-width binary layout of an account record.
//!
//! ## Responsibilities
//! - Define the Account entity and its bounded name type
//! - Encode an Account into exactly `RECORD_SIZE` bytes
//! - Decode a block back, rejecting short blocks
//!
//! ## Record Format
//! ```text
//! ┌──────────────────┬──────────────────────────┬──────────────────┐
//! │ AccountNo (4)    │ Name (50)                │ Balance (8)      │
//! │ i32 LE           │ UTF-8, NUL-terminated,   │ f64 LE           │
//! │                  │ zero padded              │                  │
//! └──────────────────┴──────────────────────────┴──────────────────┘
//! ```
//!
//! No header, footer or checksum. Changing any width here invalidates
//! every file written before the change.

mod account;
mod codec;

pub use account::{Account, AccountName};
pub use codec::{decode_account, encode_account};

// =============================================================================
// Layout Constants (used by codec and store)
// =============================================================================

/// Width of the account number field
pub const ACCOUNT_NUMBER_SIZE: usize = 4;

/// Width of the name field, terminator included
pub const NAME_FIELD_SIZE: usize = 50;

/// Usable name bytes (one byte is reserved for the NUL terminator)
pub const NAME_CAPACITY: usize = NAME_FIELD_SIZE - 1;

/// Width of the balance field
pub const BALANCE_SIZE: usize = 8;

/// Total width of one record: 4 + 50 + 8 = 62 bytes
pub const RECORD_SIZE: usize = ACCOUNT_NUMBER_SIZE + NAME_FIELD_SIZE + BALANCE_SIZE;
