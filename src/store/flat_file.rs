//! Record Store
//!
//! Owns the store location and runs every file operation.
//!
//! ## Resource Model
//! - No handle is held between calls
//! - Each operation opens the file in the mode it needs and drops it on
//!   return, including early returns
//! - Single user, single process: no locking

use std::fs::{self, File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::Path;

use crate::config::{Config, DuplicatePolicy, SyncStrategy};
use crate::error::{BankError, Result};
use crate::record::{decode_account, encode_account, Account, RECORD_SIZE};

use super::iterator::{read_block, RecordIter};
use super::{DeltaKind, DeltaReceipt};

/// Flat file of fixed-width account records
#[derive(Debug, Clone)]
pub struct RecordStore {
    config: Config,
}

impl RecordStore {
    /// Create a store over the configured file
    ///
    /// Does not touch the filesystem; the file is created by the first
    /// `append`.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create a store at a path (convenience method)
    ///
    /// Uses default config with the specified store path
    pub fn with_path(path: &Path) -> Self {
        Self::new(Config::builder().store_path(path).build())
    }

    /// Append a record at the end of the file
    ///
    /// Returns the byte offset where the record starts. A partial trailing
    /// record is discarded first, so the new record is always the
    /// logically-last one. Repeated account
    /// numbers are accepted unless the config says `DuplicatePolicy::Reject`.
    pub fn append(&self, account: &Account) -> Result<u64> {
        if self.config.duplicate_policy == DuplicatePolicy::Reject
            && self.contains(account.account_number)?
        {
            return Err(BankError::DuplicateAccountNumber(account.account_number));
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path())
            .map_err(|source| self.unavailable(source))?;

        let len = file.metadata()?.len();
        let offset = len - len % RECORD_SIZE as u64;
        if offset != len {
            // Drop the torn tail so the new record lands on a record boundary
            tracing::warn!(
                path = %self.path().display(),
                len,
                truncated_to = offset,
                "discarding partial trailing record before append"
            );
            file.set_len(offset)?;
        }

        file.write_all(&encode_account(account))?;
        self.sync(&file)?;

        tracing::debug!(
            account_number = account.account_number,
            offset,
            "appended record"
        );
        Ok(offset)
    }

    /// Scan every record from the start of the file
    ///
    /// A missing file yields an empty scan with `store_missing() == true`.
    pub fn scan_all(&self) -> Result<RecordIter> {
        RecordIter::open(self.path())
    }

    /// Find every record with the given account number, in file order
    ///
    /// An empty result is the not-found outcome.
    pub fn find_by_number(&self, account_number: i32) -> Result<Vec<Account>> {
        let mut matches = Vec::new();
        for account in self.scan_all()? {
            let account = account?;
            if account.account_number == account_number {
                matches.push(account);
            }
        }
        Ok(matches)
    }

    /// Adjust the balance of the first record matching `account_number`
    ///
    /// Steps:
    /// 1. Open read/write (never creates the file)
    /// 2. Read records until the first match
    /// 3. Compute the new balance (withdraw is guarded)
    /// 4. Seek back one record and overwrite it in place
    ///
    /// Later records with the same number are left untouched.
    pub fn apply_delta(
        &self,
        account_number: i32,
        amount: f64,
        kind: DeltaKind,
    ) -> Result<DeltaReceipt> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(self.path())
            .map_err(|source| self.unavailable(source))?;

        let mut block = [0u8; RECORD_SIZE];
        let mut offset = 0u64;

        loop {
            let filled = read_block(&mut file, &mut block)?;
            if filled < RECORD_SIZE {
                if filled > 0 {
                    tracing::debug!(offset, bytes = filled, "ignoring partial trailing record");
                }
                break;
            }

            let mut account = decode_account(&block)?;
            if account.account_number != account_number {
                offset += RECORD_SIZE as u64;
                continue;
            }

            let previous_balance = account.balance;
            match kind {
                DeltaKind::Deposit => account.deposit(amount),
                DeltaKind::Withdraw => account.withdraw(amount)?,
            }

            file.seek(SeekFrom::Current(-(RECORD_SIZE as i64)))?;
            file.write_all(&encode_account(&account))?;
            self.sync(&file)?;

            tracing::debug!(
                account_number,
                offset,
                ?kind,
                previous_balance,
                balance = account.balance,
                "updated record in place"
            );
            return Ok(DeltaReceipt {
                offset,
                previous_balance,
                account,
            });
        }

        Err(BankError::NotFound(account_number))
    }

    /// Number of complete records in the file (0 if it does not exist)
    pub fn record_count(&self) -> Result<u64> {
        match fs::metadata(self.path()) {
            Ok(meta) => Ok(meta.len() / RECORD_SIZE as u64),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    /// Whether the store file exists yet
    pub fn exists(&self) -> bool {
        self.path().is_file()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the store file path
    pub fn path(&self) -> &Path {
        &self.config.store_path
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn contains(&self, account_number: i32) -> Result<bool> {
        for account in self.scan_all()? {
            if account?.account_number == account_number {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn sync(&self, file: &File) -> Result<()> {
        if self.config.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_data()?;
        }
        Ok(())
    }

    fn unavailable(&self, source: io::Error) -> BankError {
        BankError::StoreUnavailable {
            path: self.path().to_path_buf(),
            source,
        }
    }
}
