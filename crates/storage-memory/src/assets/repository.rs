use goalplan_core::assets::{Asset, AssetMutation, AssetRepositoryTrait, NewAsset};
use goalplan_core::{Error, Result};

use crate::db::{self, DbHandle, WriteHandle};

pub struct AssetRepository {
    db: DbHandle,
    writer: WriteHandle,
}

impl AssetRepository {
    pub fn new(db: DbHandle, writer: WriteHandle) -> Self {
        Self { db, writer }
    }
}

#[async_trait::async_trait]
impl AssetRepositoryTrait for AssetRepository {
    async fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        self.writer
            .exec(move |db| {
                let asset = new_asset.into_asset(db.next_asset_id());
                db.assets.push(asset.clone());
                Ok(asset)
            })
            .await
    }

    async fn update(&self, asset_id: i64, mutation: AssetMutation) -> Result<Asset> {
        self.writer
            .exec(move |db| {
                let asset = db
                    .assets
                    .iter_mut()
                    .find(|a| a.id == asset_id)
                    .ok_or_else(|| Error::asset_not_found(asset_id))?;
                *asset = mutation(&*asset)?;
                Ok(asset.clone())
            })
            .await
    }

    fn get_by_id(&self, asset_id: i64) -> Result<Asset> {
        db::read(&self.db, |db| {
            db.assets
                .iter()
                .find(|a| a.id == asset_id)
                .cloned()
                .ok_or_else(|| Error::asset_not_found(asset_id))
        })
    }

    fn list(&self) -> Result<Vec<Asset>> {
        db::read(&self.db, |db| Ok(db.assets.clone()))
    }

    async fn delete(&self, asset_id: i64) -> Result<usize> {
        self.writer
            .exec(move |db| {
                let before = db.assets.len();
                db.assets.retain(|a| a.id != asset_id);
                Ok(before - db.assets.len())
            })
            .await
    }
}
