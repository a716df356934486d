//! In-memory storage implementation for Goalplan.
//!
//! This crate implements the repository traits defined in `goalplan-core`
//! on top of process-local collections. Nothing survives a restart.
//!
//! # Architecture
//!
//! ```text
//!   GoalService / AssetService (core)
//!                 │
//!                 ▼
//!    GoalRepository / AssetRepository
//!          │                 │
//!     reads (RwLock)   writes (WriteHandle)
//!          │                 │
//!          └──────┬──────────┘
//!                 ▼
//!             MemoryDb
//! ```
//!
//! Every mutation runs as a job on a single writer task, so id assignment
//! and read-modify-write updates never interleave.

pub mod assets;
pub mod db;
pub mod errors;
pub mod goals;

pub use db::{init, spawn_writer, DbHandle, MemoryDb, WriteHandle};
pub use errors::StorageError;

pub use goalplan_core::errors::{DatabaseError, Error, Result};
