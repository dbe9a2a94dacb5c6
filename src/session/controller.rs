//! Session Controller
//!
//! Runs the menu loop against a record store.

use std::io::{self, BufRead, Write};

use crate::error::{BankError, Result};
use crate::record::{Account, AccountName};
use crate::store::{DeltaKind, RecordStore};

use super::command::{MenuChoice, MENU};
use super::prompt::Prompter;

const SEPARATOR: &str = "--------------------------------";

/// Interactive session over a record store
///
/// Every store error is reported to the user and the loop continues. The
/// loop ends on Exit, on end of input, or when the terminal itself fails.
pub struct Session<R, W> {
    store: RecordStore,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run the menu loop until Exit or end of input
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(path = %self.store.path().display(), "session started");

        loop {
            self.prompter.output().write_all(MENU.as_bytes())?;

            let number = match self.prompter.read_i32("Enter your choice: ") {
                Ok(n) => n,
                Err(e) if is_end_of_input(&e) => break,
                Err(BankError::InvalidInput(_)) => {
                    writeln!(self.prompter.output(), "Invalid input.")?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let Some(choice) = MenuChoice::from_number(number) else {
                writeln!(self.prompter.output(), "Invalid choice.")?;
                continue;
            };

            if choice == MenuChoice::Exit {
                writeln!(self.prompter.output(), "Exiting program...")?;
                break;
            }

            match self.execute(choice) {
                Ok(()) => {}
                Err(e) if is_end_of_input(&e) => break,
                Err(e) => self.report(&e)?,
            }
        }

        tracing::info!("session ended");
        Ok(())
    }

    /// Execute a single menu choice
    pub fn execute(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::CreateAccount => self.create_account(),
            MenuChoice::ViewAll => self.view_all(),
            MenuChoice::ViewOne => {
                let number = self.prompter.read_i32("Enter Account Number: ")?;
                self.view_one(number)
            }
            MenuChoice::Deposit => {
                let number = self.prompter.read_i32("Enter Account Number: ")?;
                self.adjust(number, DeltaKind::Deposit)
            }
            MenuChoice::Withdraw => {
                let number = self.prompter.read_i32("Enter Account Number: ")?;
                self.adjust(number, DeltaKind::Withdraw)
            }
            MenuChoice::Exit => Ok(()),
        }
    }

    /// Get the underlying store
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn into_inner(self) -> (RecordStore, R, W) {
        let (input, output) = self.prompter.into_inner();
        (self.store, input, output)
    }

    // =========================================================================
    // Menu Actions
    // =========================================================================

    fn create_account(&mut self) -> Result<()> {
        let account_number = self.prompter.read_i32("Enter Account Number: ")?;
        let name = self.prompter.read_text("Enter Account Holder Name: ")?;
        let name = AccountName::new(name)?;
        let balance = self.prompter.read_amount("Enter Initial Balance: ")?;

        self.store.append(&Account {
            account_number,
            name,
            balance,
        })?;

        writeln!(self.prompter.output(), "Account created successfully!")?;
        Ok(())
    }

    fn view_all(&mut self) -> Result<()> {
        let records = self.store.scan_all()?;
        if records.store_missing() {
            writeln!(self.prompter.output(), "No accounts found.")?;
            return Ok(());
        }

        writeln!(self.prompter.output(), "\n--- All Accounts ---")?;
        for account in records {
            let account = account?;
            self.show(&account)?;
            writeln!(self.prompter.output(), "{}", SEPARATOR)?;
        }
        Ok(())
    }

    fn view_one(&mut self, account_number: i32) -> Result<()> {
        let matches = self.store.find_by_number(account_number)?;
        if matches.is_empty() {
            return Err(BankError::NotFound(account_number));
        }
        for account in &matches {
            self.show(account)?;
        }
        Ok(())
    }

    /// Show the current record, ask for an amount, then update in place
    fn adjust(&mut self, account_number: i32, kind: DeltaKind) -> Result<()> {
        let current = self
            .store
            .find_by_number(account_number)?
            .into_iter()
            .next()
            .ok_or(BankError::NotFound(account_number))?;
        self.show(&current)?;

        let prompt = match kind {
            DeltaKind::Deposit => "Enter amount to deposit: ",
            DeltaKind::Withdraw => "Enter amount to withdraw: ",
        };
        let amount = self.prompter.read_amount(prompt)?;

        self.store.apply_delta(account_number, amount, kind)?;
        writeln!(self.prompter.output(), "Account updated.")?;
        Ok(())
    }

    // =========================================================================
    // Output Helpers
    // =========================================================================

    fn show(&mut self, account: &Account) -> io::Result<()> {
        writeln!(self.prompter.output(), "\n{}", account)
    }

    /// Print a user-facing message for a failed action
    fn report(&mut self, error: &BankError) -> Result<()> {
        tracing::debug!(%error, "menu action failed");
        let out = self.prompter.output();
        match error {
            BankError::NotFound(_) => writeln!(out, "Account not found.")?,
            BankError::InsufficientBalance { .. } => writeln!(out, "Insufficient balance!")?,
            BankError::InvalidInput(_) => writeln!(out, "Invalid input.")?,
            other => writeln!(out, "Error: {}", other)?,
        }
        Ok(())
    }
}

fn is_end_of_input(error: &BankError) -> bool {
    matches!(error, BankError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}
