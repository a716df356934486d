use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{CalculationRequest, GoalType},
};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use goalplan_core::goals::{solve, CalculationResult};

#[utoipa::path(get, path = "/api/v1/goal-types", responses((status = 200, description = "Goal type presets", body = [GoalType])))]
pub async fn get_goal_types(State(state): State<Arc<AppState>>) -> Json<Vec<GoalType>> {
    Json(
        state
            .goal_service
            .get_goal_types()
            .iter()
            .map(GoalType::from)
            .collect(),
    )
}

/// Solves an ad-hoc input without storing a goal.
#[utoipa::path(post, path = "/api/v1/calculate", request_body = CalculationRequest, responses((status = 200, description = "Calculation result")))]
pub async fn calculate(Json(payload): Json<CalculationRequest>) -> ApiResult<Json<CalculationResult>> {
    let result = solve(&payload.into());
    if let Some(error) = result.error {
        tracing::debug!("Ad-hoc calculation flagged: {:?}", error);
    }
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goal-types", get(get_goal_types))
        .route("/calculate", post(calculate))
}
