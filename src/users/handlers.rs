use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{dto::CreateUserRequest, repo_types::User, services};
use crate::{
    ai::recency::RecencyTracker,
    error::{parse_id, AppError},
    state::AppState,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user))
        .route("/users/:id/recent-suggestions", get(recent_suggestions))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<User>, AppError> {
    let user = services::create_user(state.store.as_ref(), payload).await?;
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let id = parse_id(&id, "User")?;
    Ok(Json(services::get_user(state.store.as_ref(), id).await?))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(services::list_users(state.store.as_ref()).await?))
}

#[instrument(skip(state))]
pub async fn recent_suggestions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<String>>, AppError> {
    let id = parse_id(&id, "User")?;
    let tracker = RecencyTracker::new(state.store.clone());
    Ok(Json(tracker.current_exclusions(id).await?))
}
