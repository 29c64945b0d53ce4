//! Operator confirmation before the documentation tree is written.
//!
//! The question is asked once. When no answer can be read (stdin closed or
//! not attached), the auto-confirm toggle decides instead.

use std::io::{self, BufRead, Write};

use dialoguer::Input;
use log::debug;

use crate::constants::{AUTO_CONFIRM_ENV, AUTO_CONFIRM_VALUE};
use crate::error::{Error, Result};

pub const CONFIRM_PROMPT: &str = "Proceed with creating this structure? (y/N)";

/// Source of operator answers.
pub trait Prompter {
    /// Asks `message` and returns the raw answer.
    ///
    /// # Returns
    /// * `Ok(None)` when no input can be read at all
    fn ask(&mut self, message: &str) -> Result<Option<String>>;
}

/// Interactive prompter for terminals.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, message: &str) -> Result<Option<String>> {
        let answer = Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text();
        match answer {
            Ok(answer) => Ok(Some(answer)),
            Err(dialoguer::Error::IO(e))
                if matches!(
                    e.kind(),
                    io::ErrorKind::UnexpectedEof | io::ErrorKind::NotConnected
                ) =>
            {
                debug!("No terminal input available: {}", e);
                Ok(None)
            }
            Err(e) => Err(Error::PromptError(e.to_string())),
        }
    }
}

/// Line-based prompter over any reader, used for piped stdin.
#[derive(Debug)]
pub struct ReaderPrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ReaderPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompter for ReaderPrompter<R, W> {
    fn ask(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.writer, "\n{message}: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Outcome of the confirmation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    /// The operator answered anything but yes.
    Declined,
    /// No answer could be read and auto-confirm is not enabled.
    NonInteractiveDenied,
}

impl Confirmation {
    pub fn proceed(self) -> bool {
        self == Confirmation::Confirmed
    }
}

/// Inputs of the confirmation step that come from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmOptions {
    /// Raw value of the auto-confirm toggle, if set.
    pub auto_confirm: Option<String>,
}

impl ConfirmOptions {
    pub fn new(auto_confirm: Option<String>) -> Self {
        Self { auto_confirm }
    }

    /// Reads the toggle from the process environment.
    pub fn from_env() -> Self {
        Self::new(std::env::var(AUTO_CONFIRM_ENV).ok())
    }

    /// The toggle must equal the accepted value exactly, case included.
    pub fn auto_confirms(&self) -> bool {
        self.auto_confirm.as_deref() == Some(AUTO_CONFIRM_VALUE)
    }
}

/// Short and long affirmative answers, case-insensitive.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Asks the operator and resolves the answer into a [`Confirmation`].
pub fn confirm(
    prompter: &mut dyn Prompter,
    options: &ConfirmOptions,
    out: &mut dyn Write,
) -> Result<Confirmation> {
    match prompter.ask(CONFIRM_PROMPT)? {
        Some(answer) if is_affirmative(&answer) => Ok(Confirmation::Confirmed),
        Some(answer) => {
            debug!("Declined with answer '{}'", answer);
            Ok(Confirmation::Declined)
        }
        None if options.auto_confirms() => {
            writeln!(
                out,
                "Auto-confirmed via {AUTO_CONFIRM_ENV}={AUTO_CONFIRM_VALUE}"
            )?;
            Ok(Confirmation::Confirmed)
        }
        None => {
            writeln!(
                out,
                "Running non-interactively. \
                 Set {AUTO_CONFIRM_ENV}={AUTO_CONFIRM_VALUE} to auto-confirm."
            )?;
            Ok(Confirmation::NonInteractiveDenied)
        }
    }
}
