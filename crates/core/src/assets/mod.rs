//! Assets module - holdings the user already owns, alongside their goals.

mod assets_model;
mod assets_service;
mod assets_traits;

#[cfg(test)]
mod assets_model_tests;

pub use assets_model::{Asset, AssetClass, AssetSummary, AssetUpdate, NewAsset};
pub use assets_service::AssetService;
pub use assets_traits::{AssetMutation, AssetRepositoryTrait, AssetServiceTrait};
