use std::sync::Arc;

use crate::config::Config;
use goalplan_core::{
    assets::{AssetService, AssetServiceTrait},
    goals::{GoalService, GoalServiceTrait},
};
use goalplan_storage_memory::{
    assets::AssetRepository,
    db::{self, write_actor},
    goals::GoalRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub asset_service: Arc<dyn AssetServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("GP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Wires repositories and services around a fresh in-memory database.
///
/// Must run inside a Tokio runtime: it spawns the store's writer task.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db = db::init();
    let writer = write_actor::spawn_writer(db.clone());
    tracing::debug!(
        "In-memory store ready, request timeout {:?}",
        config.request_timeout
    );

    let goal_repo = Arc::new(GoalRepository::new(db.clone(), writer.clone()));
    let goal_service = Arc::new(GoalService::new(goal_repo));

    let asset_repo = Arc::new(AssetRepository::new(db, writer));
    let asset_service = Arc::new(AssetService::new(asset_repo));

    Ok(Arc::new(AppState {
        goal_service,
        asset_service,
    }))
}
