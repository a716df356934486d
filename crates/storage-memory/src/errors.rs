//! Storage-specific error types for the in-memory store.
//!
//! These are converted to the storage-agnostic error types defined in
//! `goalplan_core` before leaving the crate.

use goalplan_core::errors::{DatabaseError, Error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Writer task is no longer running")]
    WriterStopped,

    #[error("Writer dropped the reply for a job")]
    ReplyDropped,

    #[error("Writer returned an unexpected result type")]
    ResultTypeMismatch,

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::WriterStopped | StorageError::ReplyDropped => {
                Error::Database(DatabaseError::WriterUnavailable(err.to_string()))
            }
            StorageError::LockPoisoned(msg) => Error::Database(DatabaseError::LockPoisoned(msg)),
            StorageError::ResultTypeMismatch => {
                Error::Database(DatabaseError::Internal(err.to_string()))
            }
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for StorageError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        StorageError::LockPoisoned(err.to_string())
    }
}
