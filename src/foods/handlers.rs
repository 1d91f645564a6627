use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use super::{
    dto::{CreateFoodRequest, SeedResponse},
    repo_types::FoodItem,
    services,
};
use crate::{error::AppError, state::AppState};

pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/foods", get(list_foods).post(create_food))
        .route("/foods/search/:query", get(search_foods))
        .route("/populate-food-database", post(populate_food_database))
}

#[instrument(skip(state, payload))]
pub async fn create_food(
    State(state): State<AppState>,
    Json(payload): Json<CreateFoodRequest>,
) -> Result<Json<FoodItem>, AppError> {
    Ok(Json(services::create_food(state.store.as_ref(), payload).await?))
}

#[instrument(skip(state))]
pub async fn list_foods(State(state): State<AppState>) -> Result<Json<Vec<FoodItem>>, AppError> {
    Ok(Json(services::list_foods(state.store.as_ref()).await?))
}

#[instrument(skip(state))]
pub async fn search_foods(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<FoodItem>>, AppError> {
    Ok(Json(services::search_foods(state.store.as_ref(), &query).await?))
}

#[instrument(skip(state))]
pub async fn populate_food_database(
    State(state): State<AppState>,
) -> Result<Json<SeedResponse>, AppError> {
    let added = services::seed_common_foods(state.store.as_ref()).await?;
    Ok(Json(SeedResponse {
        message: format!("Added {added} foods to database"),
    }))
}
