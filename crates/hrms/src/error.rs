//! Error types for hrms.
//!
//! Absent records are not errors: repositories return `Option` or `bool` for
//! those. This enum covers what can actually fail underneath them.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for hrms operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to run database migrations.
    #[error("database migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    /// A persisted document could not be decoded.
    #[error("malformed document under key '{key}': {source}")]
    MalformedDocument {
        /// Storage key of the document.
        key: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    // === Record Errors ===
    /// A partial update did not fit the shape of the record.
    #[error("invalid update for {entity} '{id}': {message}")]
    InvalidUpdate {
        /// Name of the entity being updated.
        entity: &'static str,
        /// Identifier of the record.
        id: String,
        /// Description of what went wrong.
        message: String,
    },

    /// A leave request exceeds the employee's remaining allowance.
    #[error("insufficient {leave_type} balance for {employee_id}: {requested} day(s) requested, {available} available")]
    InsufficientBalance {
        /// Employee number of the requester.
        employee_id: String,
        /// Label of the leave type.
        leave_type: &'static str,
        /// Days requested.
        requested: u32,
        /// Days remaining.
        available: u32,
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

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for hrms operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new malformed document error.
    #[must_use]
    pub fn malformed_document(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MalformedDocument {
            key: key.into(),
            source,
        }
    }

    /// Create a new invalid update error.
    #[must_use]
    pub fn invalid_update(
        entity: &'static str,
        id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidUpdate {
            entity,
            id: id.into(),
            message: message.into(),
        }
    }

    /// Check if this error refused a request for lack of leave balance.
    #[must_use]
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, Self::InsufficientBalance { .. })
    }

    /// Check if this error came from a corrupt persisted document.
    #[must_use]
    pub fn is_malformed_document(&self) -> bool {
        matches!(self, Self::MalformedDocument { .. })
    }
}
