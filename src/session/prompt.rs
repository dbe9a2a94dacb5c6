//! Terminal prompting
//!
//! Line-oriented reads of integers, amounts and text.

use std::io::{self, BufRead, Write};

use crate::error::{BankError, Result};

/// Writes a prompt, then reads and parses one line of input
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read a whole line as typed, minus the line terminator
    ///
    /// End of input is reported as `Io(UnexpectedEof)`.
    pub fn read_text(&mut self, prompt: &str) -> Result<String> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BankError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        let typed = line.strip_suffix('\n').unwrap_or(&line);
        let typed = typed.strip_suffix('\r').unwrap_or(typed);
        Ok(typed.to_string())
    }

    /// Read a signed 32-bit integer
    pub fn read_i32(&mut self, prompt: &str) -> Result<i32> {
        let text = self.read_text(prompt)?;
        let line = text.trim();
        line.parse()
            .map_err(|_| BankError::InvalidInput(format!("not a whole number: {:?}", line)))
    }

    /// Read a finite amount
    pub fn read_amount(&mut self, prompt: &str) -> Result<f64> {
        let text = self.read_text(prompt)?;
        let line = text.trim();
        match line.parse::<f64>() {
            Ok(amount) if amount.is_finite() => Ok(amount),
            _ => Err(BankError::InvalidInput(format!("not an amount: {:?}", line))),
        }
    }

    /// Access the output stream
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
