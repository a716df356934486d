//! Goalplan Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for Goalplan: the contribution
//! solver that turns a goal's financial parameters into required monthly
//! and lump-sum investments, plus the goal and asset services built on top
//! of it. It is storage-agnostic and defines repository traits that are
//! implemented by the `storage-memory` crate.

pub mod assets;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
