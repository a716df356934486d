//! In-memory storage implementation for assets.

mod repository;

pub use repository::AssetRepository;
