use axum::{extract::State, routing::post, Json, Router};
use tracing::instrument;

use super::{
    dto::{FoodLookupRequest, MealSuggestionRequest, MealSuggestionResponse},
    interpret::FoodLookup,
    services,
};
use crate::{error::AppError, state::AppState};

pub fn ai_routes() -> Router<AppState> {
    Router::new()
        .route("/ai-meal-suggestions", post(meal_suggestions))
        .route("/ai-food-lookup", post(food_lookup))
}

#[instrument(skip(state, payload), fields(user_id = %payload.user_id))]
pub async fn meal_suggestions(
    State(state): State<AppState>,
    Json(payload): Json<MealSuggestionRequest>,
) -> Result<Json<MealSuggestionResponse>, AppError> {
    Ok(Json(services::suggest_meals(&state, payload).await?))
}

#[instrument(skip(state, payload), fields(food_name = %payload.food_name))]
pub async fn food_lookup(
    State(state): State<AppState>,
    Json(payload): Json<FoodLookupRequest>,
) -> Result<Json<FoodLookup>, AppError> {
    Ok(Json(services::lookup_food(&state, &payload.food_name).await?))
}
