//! Error types for planetcat.
//!
//! Domain errors raised by the catalogue stores are recoverable: the session
//! reports them and carries on. The remaining variants cover configuration
//! loading and console I/O.

use thiserror::Error;

/// The main error type for planetcat operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Catalogue Errors ===
    /// An add was attempted on a store that already holds its maximum
    /// number of records.
    #[error("{store} store is full (capacity {capacity})")]
    CapacityExceeded {
        /// Which store rejected the record.
        store: &'static str,
        /// The configured capacity of that store.
        capacity: usize,
    },

    /// A lookup key matched no record.
    #[error("{store} not found: {key}")]
    NotFound {
        /// Which store was searched.
        store: &'static str,
        /// The key that was looked up, rendered as text.
        key: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Session Errors ===
    /// The input stream ended while a value was expected.
    #[error("input closed")]
    InputClosed,

    /// Console I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for planetcat operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a capacity error for the named store.
    #[must_use]
    pub fn capacity_exceeded(store: &'static str, capacity: usize) -> Self {
        Self::CapacityExceeded { store, capacity }
    }

    /// Create a not-found error for the named store and key.
    #[must_use]
    pub fn not_found(store: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            store,
            key: key.to_string(),
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error means a store was full.
    #[must_use]
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }

    /// Check if this error means a lookup key matched nothing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error means the input stream has ended.
    #[must_use]
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}
