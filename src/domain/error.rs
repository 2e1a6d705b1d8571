//! Error types for ticklist.
//!
//! This module defines the centralized error type [`TicklistError`] and a type
//! alias [`Result`] used throughout the crate. All errors are implemented with
//! the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for ticklist operations.
///
/// Consolidates the failure conditions that can occur while running the
/// application: configuration problems, theme loading, command parsing, and
/// plain I/O. I/O errors convert automatically via `#[from]`.
///
/// # Examples
///
/// ```
/// use ticklist::TicklistError;
///
/// fn reject_theme() -> Result<(), TicklistError> {
///     Err(TicklistError::Theme("unknown theme 'solarized'".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum TicklistError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, typically while
    /// reading the config file or writing trace output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or malformed.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML content does not
    /// match the expected color schema.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A REPL command could not be parsed or resolved.
    ///
    /// Covers unknown command names, malformed item references, and item
    /// references that fall outside the currently visible list.
    #[error("{0}")]
    Command(String),
}

/// A specialized `Result` type for ticklist operations.
///
/// Type alias for `std::result::Result<T, TicklistError>` to simplify
/// signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, TicklistError>;
