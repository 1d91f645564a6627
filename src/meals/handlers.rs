use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use tracing::instrument;

use super::{
    dto::{CreateMealRequest, MessageResponse},
    repo_types::MealEntry,
    services,
};
use crate::{
    error::{parse_id, AppError},
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/meals/:id/:date", get(list_meals_for_date))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", post(create_meal))
        .route("/meals/:id", delete(delete_meal))
}

#[instrument(skip(state, payload))]
pub async fn create_meal(
    State(state): State<AppState>,
    Json(payload): Json<CreateMealRequest>,
) -> Result<Json<MealEntry>, AppError> {
    Ok(Json(services::log_meal(state.store.as_ref(), payload).await?))
}

#[instrument(skip(state))]
pub async fn list_meals_for_date(
    State(state): State<AppState>,
    Path((user_id, date)): Path<(String, String)>,
) -> Result<Json<Vec<MealEntry>>, AppError> {
    let meals = services::meals_for_date(state.store.as_ref(), &user_id, &date).await?;
    Ok(Json(meals))
}

#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id, "Meal")?;
    services::delete_meal(state.store.as_ref(), id).await?;
    Ok(Json(MessageResponse {
        message: "Meal deleted successfully".into(),
    }))
}
