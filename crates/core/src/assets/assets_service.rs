use log::debug;
use std::sync::Arc;

use super::assets_model::{Asset, AssetSummary, AssetUpdate, NewAsset};
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
use crate::errors::Result;

/// Service for managing the assets a user already holds.
pub struct AssetService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
}

impl AssetService {
    pub fn new(asset_repository: Arc<dyn AssetRepositoryTrait>) -> Self {
        Self { asset_repository }
    }
}

#[async_trait::async_trait]
impl AssetServiceTrait for AssetService {
    fn get_assets(&self) -> Result<Vec<Asset>> {
        self.asset_repository.list()
    }

    fn get_asset(&self, asset_id: i64) -> Result<Asset> {
        self.asset_repository.get_by_id(asset_id)
    }

    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset> {
        new_asset.validate()?;
        let asset = self.asset_repository.create(new_asset).await?;
        debug!("Created asset {} ({:?})", asset.id, asset.asset_class);
        Ok(asset)
    }

    async fn update_asset(&self, asset_id: i64, update: AssetUpdate) -> Result<Asset> {
        self.asset_repository
            .update(asset_id, Box::new(move |current| update.apply(current)))
            .await
    }

    async fn delete_asset(&self, asset_id: i64) -> Result<usize> {
        self.asset_repository.delete(asset_id).await
    }

    fn get_asset_summary(&self) -> Result<AssetSummary> {
        let assets = self.asset_repository.list()?;
        Ok(AssetSummary::from_assets(&assets))
    }
}
