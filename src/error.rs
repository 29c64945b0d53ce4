//! Error handling for doc-init.
//! Defines the error taxonomy and the result alias used throughout the crate.

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use crate::preview::DisplayOptions;

/// Every diagnostic collected while validating a configuration document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<S: Into<String>>(&mut self, error: S) {
        self.errors.push(error.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns true when any collected diagnostic contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.errors.iter().any(|e| e.contains(needle))
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} problem(s) found", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

/// Custom error types for doc-init operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The YAML configuration does not exist.
    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The YAML configuration could not be parsed into the expected shape.
    #[error("Invalid YAML in {}: {message}", path.display())]
    MalformedConfig { path: PathBuf, message: String },

    /// The configuration parsed but violates structural invariants.
    #[error("Configuration validation failed: {0}")]
    Validation(ValidationReport),

    /// A directory or file of the documentation tree could not be created.
    #[error("Filesystem error at {}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Terminal or stdin I/O failures.
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Errors raised by the interactive prompt.
    #[error("Prompt error: {0}")]
    PromptError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    /// Wraps an I/O failure together with the path being materialised.
    pub fn filesystem<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Validation failures list every collected diagnostic. Other errors print
/// their chain of sources, innermost last. The process exits with status 1.
pub fn default_error_handler(err: Error, display: &DisplayOptions) -> ! {
    match &err {
        Error::Validation(report) => {
            for error in report.errors() {
                eprintln!("{}", display.error(&format!("❌ {error}")));
            }
            eprintln!("{}", display.error("❌ Configuration validation failed"));
        }
        _ => {
            eprintln!("{}", display.error(&format!("❌ {err}")));
            let mut source = StdError::source(&err);
            while let Some(cause) = source {
                if display.color {
                    eprintln!("   {} {}", "caused by:".dimmed(), cause);
                } else {
                    eprintln!("   caused by: {cause}");
                }
                source = cause.source();
            }
        }
    }
    std::process::exit(1);
}
