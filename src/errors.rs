/*!
 * Error types for the event-availability library.
 *
 * This module contains custom error types for the different parts of the
 * library, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors caused by inconsistent site or language configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The requested language is not configured for the site
    #[error("Target language could not be found: {language_id}")]
    TargetLanguageNotFound {
        /// Requested language id
        language_id: i64,
    },

    /// No site with the given identifier is configured
    #[error("Unknown site: {0}")]
    UnknownSite(String),

    /// Two sites share the same identifier
    #[error("Duplicate site identifier: {0}")]
    DuplicateSite(String),

    /// A site configures the same language id twice
    #[error("Site '{site}' configures language {language_id} more than once")]
    DuplicateLanguage {
        /// Site identifier
        site: String,
        /// Repeated language id
        language_id: i64,
    },

    /// A configured ISO language code is not recognised
    #[error("Site '{site}' uses an invalid language code: {code}")]
    InvalidLanguageCode {
        /// Site identifier
        site: String,
        /// Offending code
        code: String,
    },

    /// A spam check entry has no name
    #[error("Spam check entry {index} has an empty name")]
    EmptySpamCheckName {
        /// Position of the entry in the configuration
        index: usize,
    },
}

/// Errors raised by a localization store lookup
#[derive(Error, Debug)]
pub enum StorageError {
    /// The SQLite query failed
    #[error("Database query failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The connection lock could not be acquired
    #[error("Failed to acquire database lock: {0}")]
    Lock(String),

    /// Any other storage failure
    #[error("Storage error: {0}")]
    Other(String),
}

impl From<anyhow::Error> for StorageError {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<rusqlite::Error>() {
            Ok(sqlite) => Self::Sqlite(sqlite),
            Err(other) => Self::Other(other.to_string()),
        }
    }
}

/// Errors that can occur while resolving event availability
#[derive(Error, Debug)]
pub enum AvailabilityError {
    /// Site configuration is inconsistent with the request
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The localization lookup failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that can occur while running spam checks
#[derive(Error, Debug)]
pub enum SpamCheckError {
    /// No factory is registered under the configured name
    #[error("Unknown spam check: {0}")]
    UnknownCheck(String),

    /// The check rejected its configuration
    #[error("Invalid configuration for spam check '{check}': {message}")]
    InvalidConfiguration {
        /// Check name
        check: String,
        /// Reason
        message: String,
    },

    /// The check could not be evaluated
    #[error("Spam check '{check}' could not be evaluated: {message}")]
    CheckFailed {
        /// Check name
        check: String,
        /// Reason
        message: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Error from availability resolution
    #[error("Availability error: {0}")]
    Availability(#[from] AvailabilityError),

    /// Error from the storage layer
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Error from spam checking
    #[error("Spam check error: {0}")]
    SpamCheck(#[from] SpamCheckError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
