//! Line-oriented prompting over any reader/writer pair.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::trace;

use crate::error::{Error, Result};

/// Prompt-and-read helper used by the menus.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wrap an input and output stream.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning the output stream.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line of output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Print `prompt` and read one line with its terminator stripped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] at end of input, or an I/O error.
    pub fn line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(Error::InputClosed);
        }
        let len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(len);
        trace!(input = %buf, "read line");
        Ok(buf)
    }

    /// Read a menu choice. `None` when the line is not a number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] at end of input, or an I/O error.
    pub fn choice(&mut self) -> Result<Option<u32>> {
        let line = self.line("Enter your choice: ")?;
        Ok(line.trim().parse().ok())
    }

    /// Read a real number, asking again until one parses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] at end of input, or an I/O error.
    pub fn number(&mut self, prompt: &str) -> Result<f64> {
        self.parsed(prompt, "Invalid number. Please try again.")
    }

    /// Read a whole number, asking again until one parses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] at end of input, or an I/O error.
    pub fn integer<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        self.parsed(prompt, "Invalid number. Please try again.")
    }

    /// Read a yes/no answer given as `1`/`0`, `y`/`n` or `yes`/`no`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] at end of input, or an I/O error.
    pub fn flag(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let line = self.line(prompt)?;
            match line.trim().to_ascii_lowercase().as_str() {
                "1" | "y" | "yes" => return Ok(true),
                "0" | "n" | "no" => return Ok(false),
                _ => self.say("Please enter 1 for Yes or 0 for No.")?,
            }
        }
    }

    fn parsed<T: FromStr>(&mut self, prompt: &str, retry: &str) -> Result<T> {
        loop {
            let line = self.line(prompt)?;
            match line.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say(retry)?,
            }
        }
    }
}
