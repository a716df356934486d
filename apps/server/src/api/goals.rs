use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{GoalUpdate, NewGoal},
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use goalplan_core::goals::Goal;

#[utoipa::path(get, path = "/api/v1/goals", responses((status = 200, description = "All goals with their calculations")))]
pub async fn get_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.get_goals()?;
    Ok(Json(goals))
}

#[utoipa::path(get, path = "/api/v1/goals/{id}", responses((status = 200, description = "Goal"), (status = 404, description = "Not found")))]
pub async fn get_goal(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Goal>> {
    let goal = state.goal_service.get_goal(id)?;
    Ok(Json(goal))
}

#[utoipa::path(post, path = "/api/v1/goals", request_body = NewGoal, responses((status = 201, description = "Created goal"), (status = 400, description = "Invalid input")))]
pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewGoal>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let goal = state.goal_service.create_goal(payload.into()).await?;
    tracing::info!("Created goal {}", goal.id);
    Ok((StatusCode::CREATED, Json(goal)))
}

#[utoipa::path(put, path = "/api/v1/goals/{id}", request_body = GoalUpdate, responses((status = 200, description = "Updated goal"), (status = 400, description = "Invalid input"), (status = 404, description = "Not found")))]
pub async fn update_goal(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GoalUpdate>,
) -> ApiResult<Json<Goal>> {
    let update: goalplan_core::goals::GoalUpdate = payload.into();
    if update.is_empty() {
        return Err(ApiError::BadRequest("No goal fields to update".to_string()));
    }
    let goal = state.goal_service.update_goal(id, update).await?;
    Ok(Json(goal))
}

/// Applies any parameter changes in the body, then recalculates. An empty
/// body simply recalculates the stored parameters.
#[utoipa::path(post, path = "/api/v1/goals/{id}/calculate", request_body = GoalUpdate, responses((status = 200, description = "Recalculated goal"), (status = 404, description = "Not found")))]
pub async fn recalculate_goal(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<Goal>> {
    let update: GoalUpdate = if body.iter().all(u8::is_ascii_whitespace) {
        GoalUpdate::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?
    };
    let goal = state.goal_service.update_goal(id, update.into()).await?;
    Ok(Json(goal))
}

#[utoipa::path(delete, path = "/api/v1/goals/{id}", responses((status = 204, description = "Deleted")))]
pub async fn delete_goal(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let deleted = state.goal_service.delete_goal(id).await?;
    if deleted == 0 {
        tracing::debug!("Delete of unknown goal {} ignored", id);
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route(
            "/goals/{id}",
            get(get_goal).put(update_goal).delete(delete_goal),
        )
        .route("/goals/{id}/calculate", post(recalculate_goal))
}
