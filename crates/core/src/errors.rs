//! Core error types for the Goalplan application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (writer channel failures, poisoned locks) are converted to these types by
//! the storage layer.
//!
//! Note that the contribution solver never returns these: an invalid horizon
//! or rate is reported inside the calculation result instead.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the goal planning application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
}

impl Error {
    pub fn goal_not_found(id: i64) -> Self {
        Error::NotFound { entity: "Goal", id }
    }

    pub fn asset_not_found(id: i64) -> Self {
        Error::NotFound { entity: "Asset", id }
    }
}

/// Storage-agnostic error type for repository operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The single writer stopped accepting jobs.
    #[error("Writer unavailable: {0}")]
    WriterUnavailable(String),

    /// A lock guarding the in-memory collections was poisoned by a panic.
    #[error("Storage lock poisoned: {0}")]
    LockPoisoned(String),

    /// Internal/unexpected storage error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Field '{field}' must be {expectation}, got {value}")]
    OutOfRange {
        field: &'static str,
        expectation: &'static str,
        value: f64,
    },

    #[error("Unknown goal type '{0}'")]
    UnknownGoalType(String),
}
