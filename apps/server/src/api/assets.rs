use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{AssetUpdate, NewAsset},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use goalplan_core::assets::{Asset, AssetSummary};

#[utoipa::path(get, path = "/api/v1/assets", responses((status = 200, description = "All assets")))]
pub async fn get_assets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Asset>>> {
    let assets = state.asset_service.get_assets()?;
    Ok(Json(assets))
}

#[utoipa::path(get, path = "/api/v1/assets/summary", responses((status = 200, description = "Totals by asset class")))]
pub async fn get_asset_summary(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<AssetSummary>> {
    let summary = state.asset_service.get_asset_summary()?;
    Ok(Json(summary))
}

#[utoipa::path(get, path = "/api/v1/assets/{id}", responses((status = 200, description = "Asset"), (status = 404, description = "Not found")))]
pub async fn get_asset(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Asset>> {
    let asset = state.asset_service.get_asset(id)?;
    Ok(Json(asset))
}

#[utoipa::path(post, path = "/api/v1/assets", request_body = NewAsset, responses((status = 201, description = "Created asset"), (status = 400, description = "Invalid input")))]
pub async fn create_asset(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewAsset>,
) -> ApiResult<(StatusCode, Json<Asset>)> {
    let asset = state.asset_service.create_asset(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

#[utoipa::path(put, path = "/api/v1/assets/{id}", request_body = AssetUpdate, responses((status = 200, description = "Updated asset"), (status = 400, description = "Invalid input"), (status = 404, description = "Not found")))]
pub async fn update_asset(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AssetUpdate>,
) -> ApiResult<Json<Asset>> {
    let asset = state.asset_service.update_asset(id, payload.into()).await?;
    Ok(Json(asset))
}

#[utoipa::path(delete, path = "/api/v1/assets/{id}", responses((status = 204, description = "Deleted")))]
pub async fn delete_asset(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.asset_service.delete_asset(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets", get(get_assets).post(create_asset))
        .route("/assets/summary", get(get_asset_summary))
        .route(
            "/assets/{id}",
            get(get_asset).put(update_asset).delete(delete_asset),
        )
}
