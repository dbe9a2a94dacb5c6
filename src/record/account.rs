//! Account definitions
//!
//! The account entity and its fixed-capacity name.

use std::fmt;

use crate::error::{BankError, Result};

use super::NAME_CAPACITY;

/// Account holder name, at most `NAME_CAPACITY` UTF-8 bytes
///
/// Over-long names are rejected rather than truncated, so anything that
/// gets stored reads back byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountName(String);

impl AccountName {
    /// Validate and wrap a name
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.len() > NAME_CAPACITY {
            return Err(BankError::NameTooLong {
                len: name.len(),
                max: NAME_CAPACITY,
            });
        }

        // A NUL would end the stored field early
        if name.contains('\0') {
            return Err(BankError::InvalidName(
                "name must not contain NUL bytes".to_string(),
            ));
        }

        Ok(Self(name))
    }

    /// Wrap bytes already known to fit (decoder path)
    pub(super) fn from_stored(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for AccountName {
    type Error = BankError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

/// A single bank account record
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Intended-unique identifier (not enforced by default)
    pub account_number: i32,

    /// Account holder name
    pub name: AccountName,

    /// Current balance
    pub balance: f64,
}

impl Account {
    /// Create an account, validating the name
    pub fn new(account_number: i32, name: &str, balance: f64) -> Result<Self> {
        Ok(Self {
            account_number,
            name: AccountName::new(name)?,
            balance,
        })
    }

    /// Add `amount` to the balance. No bounds are checked.
    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Subtract `amount` if it does not exceed the balance
    pub fn withdraw(&mut self, amount: f64) -> Result<()> {
        if amount <= self.balance {
            self.balance -= amount;
            Ok(())
        } else {
            Err(BankError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            })
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account No.: {}", self.account_number)?;
        writeln!(f, "Name: {}", self.name)?;
        write!(f, "Balance: {}", format_balance(self.balance))
    }
}

/// Significant digits shown for a balance
const BALANCE_DIGITS: i32 = 6;

/// Render a balance with `BALANCE_DIGITS` significant digits
///
/// Trailing zeros are dropped; magnitudes outside `[1e-4, 1e6)` switch to
/// exponent form (`1e+21`, `2.5e-05`).
fn format_balance(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the shown digits can carry into the next power of ten
    let sci = format!("{:.*e}", (BALANCE_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..BALANCE_DIGITS).contains(&exponent) {
        let decimals = (BALANCE_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
