//! `CommandWriter`: the production implementation of the `Writer` port.
//!
//! Generic over the sink so tests can capture exactly what a command would
//! print. Handled errors render as:
//!
//! ```text
//! Error:
//! 	<error>
//! 	<hint>
//! ```

use std::cell::RefCell;
use std::io::Write;

use anyhow::{Context, Result};
use owo_colors::OwoColorize as _;

use crate::application::ports::Writer;
use crate::output::Styles;

/// Writes command output to `W`.
///
/// - `begin_output()` prints `"{message} ... "` (suppressed when `quiet`)
/// - `end_output()` completes that line with `"done."` (suppressed when `quiet`)
/// - `fail_output()` completes it with `"failed."` (suppressed when `quiet`)
/// - `error()` and `line()` are never suppressed
pub struct CommandWriter<W: Write> {
    out: RefCell<W>,
    styles: Styles,
    quiet: bool,
}

impl<W: Write> CommandWriter<W> {
    #[must_use]
    pub fn new(out: W, styles: Styles, quiet: bool) -> Self {
        Self {
            out: RefCell::new(out),
            styles,
            quiet,
        }
    }

    fn emit(&self, text: &str) -> Result<()> {
        let mut out = self.out.borrow_mut();
        out.write_all(text.as_bytes())
            .context("cannot write command output")?;
        out.flush().context("cannot flush command output")
    }
}

impl CommandWriter<Vec<u8>> {
    /// Uncolored writer capturing into memory.
    #[must_use]
    pub fn buffered() -> Self {
        Self::new(Vec::new(), Styles::default(), false)
    }

    /// Everything written so far.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.out.borrow()).into_owned()
    }
}

impl<W: Write> Writer for CommandWriter<W> {
    fn begin_output(&self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.emit(&format!("{message} ... "))
    }

    fn end_output(&self) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.emit(&format!("{}\n", "done.".style(self.styles.success)))
    }

    fn fail_output(&self) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.emit(&format!("{}\n", "failed.".style(self.styles.error)))
    }

    fn error(&self, error: &str, hint: &str) -> Result<()> {
        self.emit(&format!(
            "{}\n\t{error}\n\t{hint}\n",
            "Error:".style(self.styles.error)
        ))
    }

    fn line(&self, text: &str) -> Result<()> {
        self.emit(&format!("{text}\n"))
    }
}
