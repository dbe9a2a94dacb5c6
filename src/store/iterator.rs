//! Record Iterator
//!
//! Sequential iteration over all records in the store file.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::iter::FusedIterator;
use std::path::Path;

use crate::error::{BankError, Result};
use crate::record::{decode_account, Account, RECORD_SIZE};

/// Iterator over stored accounts in append order
///
/// Yields nothing when the store file does not exist. A short trailing
/// block ends iteration without an error.
pub struct RecordIter {
    /// `None` when the store file is absent
    reader: Option<BufReader<File>>,
    /// Offset of the next record to read
    offset: u64,
    /// Set once end of data or an error has been reached
    done: bool,
}

impl RecordIter {
    /// Open the store file for a scan from offset 0
    pub(super) fn open(path: &Path) -> Result<Self> {
        match File::open(path) {
            Ok(file) => Ok(Self {
                reader: Some(BufReader::new(file)),
                offset: 0,
                done: false,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self {
                reader: None,
                offset: 0,
                done: true,
            }),
            Err(source) => Err(BankError::StoreUnavailable {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// True if the store file did not exist when the scan started
    pub fn store_missing(&self) -> bool {
        self.reader.is_none()
    }

    /// Byte offset of the next record
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl Iterator for RecordIter {
    type Item = Result<Account>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let reader = self.reader.as_mut()?;

        let mut block = [0u8; RECORD_SIZE];
        let filled = match read_block(reader, &mut block) {
            Ok(n) => n,
            Err(e) => {
                self.done = true;
                return Some(Err(BankError::Io(e)));
            }
        };

        if filled == 0 {
            self.done = true;
            return None;
        }

        match decode_account(&block[..filled]) {
            Ok(account) => {
                self.offset += RECORD_SIZE as u64;
                Some(Ok(account))
            }
            Err(BankError::CorruptRecord { actual, .. }) => {
                tracing::debug!(
                    offset = self.offset,
                    bytes = actual,
                    "ignoring partial trailing record"
                );
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for RecordIter {}

/// Fill `block` from `reader`, stopping early only at end of file
///
/// Returns the number of bytes read; less than `RECORD_SIZE` means the
/// file ended mid-record (or exactly at a boundary when 0).
pub(super) fn read_block<R: Read>(reader: &mut R, block: &mut [u8; RECORD_SIZE]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < RECORD_SIZE {
        match reader.read(&mut block[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
