use super::assets_model::{Asset, AssetSummary, AssetUpdate, NewAsset};
use crate::errors::Result;

/// Transformation applied to a stored asset inside the repository's writer.
pub type AssetMutation = Box<dyn FnOnce(&Asset) -> Result<Asset> + Send + 'static>;

/// Trait defining the contract for Asset service operations.
#[async_trait::async_trait]
pub trait AssetServiceTrait: Send + Sync {
    fn get_assets(&self) -> Result<Vec<Asset>>;
    fn get_asset(&self, asset_id: i64) -> Result<Asset>;
    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset>;
    async fn update_asset(&self, asset_id: i64, update: AssetUpdate) -> Result<Asset>;
    async fn delete_asset(&self, asset_id: i64) -> Result<usize>;
    fn get_asset_summary(&self) -> Result<AssetSummary>;
}

/// Trait defining the contract for Asset repository operations.
#[async_trait::async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    /// Stores a validated asset under a freshly assigned id.
    async fn create(&self, new_asset: NewAsset) -> Result<Asset>;
    async fn update(&self, asset_id: i64, mutation: AssetMutation) -> Result<Asset>;
    fn get_by_id(&self, asset_id: i64) -> Result<Asset>;
    fn list(&self) -> Result<Vec<Asset>>;
    async fn delete(&self, asset_id: i64) -> Result<usize>;
}
