//! Error types for hexview.
//!
//! This module defines the application-level error taxonomy using `thiserror`. Errors compose
//! cleanly via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all fatal failures
//!   - [`InputError`] - Opening or reading the data source (file not found, IO)
//!   - [`ConfigError`](crate::config::ConfigError) - Unreadable or malformed config file
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # What is *not* an error here
//!
//! The addressing core never returns these types. Queries for bytes that are valid but not
//! currently visible, pointer coordinates outside every column, or ranges that lie entirely
//! off-window answer `None`. Violations of a caller contract (an index past the end of the
//! data, a two-byte range on a single-byte marker) are programming errors and panic.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
///
/// Domain-specific errors automatically convert to `AppError` via `From`, so
/// application code can propagate them with the `?` operator.
///
/// # Examples
///
/// ```no_run
/// use hexview::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _input = open_source()?;
///     Ok(())
/// }
/// # fn open_source() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to open or read the data source.
    ///
    /// **Recovery**: Display error to user and exit with non-zero status.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// The configuration file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Terminal or TUI rendering error.
    ///
    /// Failures in the crossterm/ratatui layer (resize failures, broken pipes). Without a
    /// working terminal the viewer cannot function, so this is fatal.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when opening a data source.
///
/// Read failures *after* a source has been opened are not represented here: the
/// [`DataSource`](crate::source::DataSource) contract reports them as short reads so a
/// paint pass degrades to "unknown bytes" instead of aborting.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use hexview::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.bin")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.bin"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// The path exists but is not a regular file (directory, socket, ...).
    #[error("Not a regular file: {path}")]
    NotAFile {
        /// The offending path.
        path: PathBuf,
    },

    /// Generic I/O error while opening the source or querying its metadata.
    ///
    /// The `#[from]` attribute allows clean propagation:
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use hexview::model::error::InputError;
    ///
    /// fn open(path: &str) -> Result<File, InputError> {
    ///     Ok(File::open(path)?)
    /// }
    /// ```
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
