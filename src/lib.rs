//! # bankstore
//!
//! A single-user bank account ledger with:
//! - Fixed-width binary records in one flat file
//! - Append-only account creation
//! - Linear scan lookup (every duplicate is reported)
//! - In-place balance updates at the record's byte offset
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Session Controller                        │
//! │               (menu loop, prompts, messages)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Record Store                            │
//! │        append / scan_all / find_by_number / apply_delta      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │Record Codec │          │  Flat File  │
//!   │ (62 bytes)  │          │(accounts.dat│
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BankError, Result};
pub use config::Config;
pub use record::{Account, AccountName};
pub use store::{DeltaKind, DeltaReceipt, RecordStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of bankstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
