//! Unified error types and result handling.
//!
//! All store-layer failures are classified here into the small taxonomy the
//! rest of the crate works with: validation problems, unique-key collisions,
//! connectivity failures, and everything else. Handlers catch these at their
//! boundary and never let a raw database error reach the transport layer.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was missing or empty, or an enumerated column was
    /// handed a value outside its literal set.
    #[error("Validation error: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// A unique constraint (the `email` columns) was violated.
    #[error("Constraint violation: {message}")]
    Constraint {
        /// Store-reported constraint detail
        message: String,
    },

    /// The store could not be reached or a connection could not be acquired.
    #[error("Database connectivity error: {message}")]
    Connectivity {
        /// Store-reported connection detail
        message: String,
    },

    /// Any other store failure.
    #[error("Database error: {message}")]
    Database {
        /// Store-reported detail
        message: String,
    },

    /// Configuration could not be assembled.
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// I/O failure (binding or serving the listener).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DbErr> for Error {
    /// Classifies a `SeaORM` error into the crate taxonomy.
    ///
    /// Unique-key collisions are recognised through `DbErr::sql_err` so the
    /// same classification works on `SQLite` and MySQL; connection failures
    /// map to `Connectivity`; everything else is an unexpected store error.
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(message)) = err.sql_err() {
            return Self::Constraint { message };
        }
        match err {
            DbErr::Conn(e) => Self::Connectivity {
                message: e.to_string(),
            },
            DbErr::ConnectionAcquire(e) => Self::Connectivity {
                message: e.to_string(),
            },
            other => Self::Database {
                message: other.to_string(),
            },
        }
    }
}

/// Convenience `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
