use tracing::{error, info};

use super::{
    dto::{MealSuggestionRequest, MealSuggestionResponse},
    interpret::{interpret_food_lookup, interpret_suggestions, FoodLookup},
    prompt::{build_lookup_prompt, build_suggestion_prompt, resolve_meal_preferences, SuggestionPrompt},
    recency::RecencyTracker,
};
use crate::{
    error::{parse_id, AppError},
    state::AppState,
};

/// One call to the generation service, or `None` when it is not configured.
async fn generate(st: &AppState, prompt: &str) -> Result<Option<String>, AppError> {
    let Some(generator) = st.generator.as_ref() else {
        return Ok(None);
    };
    match generator.generate(prompt).await {
        Ok(text) => Ok(Some(text)),
        Err(e) => {
            error!(error = %e, "generation service call failed");
            Err(AppError::Service(format!("{e:#}")))
        }
    }
}

pub async fn suggest_meals(
    st: &AppState,
    req: MealSuggestionRequest,
) -> Result<MealSuggestionResponse, AppError> {
    let user = st
        .store
        .find_user(parse_id(&req.user_id, "User")?)
        .await?
        .ok_or(AppError::NotFound("User"))?;

    let prompt = build_suggestion_prompt(&SuggestionPrompt {
        meal_type: &req.meal_type,
        remaining_calories: req.remaining_calories,
        remaining_protein: req.remaining_protein,
        remaining_carbs: req.remaining_carbs,
        remaining_fat: req.remaining_fat,
        dietary_preferences: &req.dietary_preferences,
        meal_preferences: resolve_meal_preferences(&req.meal_preferences, &user.meal_preferences),
        recent_meals: &user.recent_suggestions,
    });

    let raw = generate(st, &prompt).await?;
    let outcome = interpret_suggestions(raw.as_deref(), &req.meal_type);

    let names = outcome.generated_names();
    if !names.is_empty() {
        RecencyTracker::new(st.store.clone())
            .record(user.id, &names)
            .await?;
    }

    info!(
        user_id = %user.id,
        meal_type = %req.meal_type,
        current_date = req.current_date.as_deref().unwrap_or("-"),
        source = outcome.source(),
        "meal suggestions served"
    );
    Ok(MealSuggestionResponse {
        source: outcome.source(),
        suggestions: outcome.into_suggestions(),
    })
}

pub async fn lookup_food(st: &AppState, food_name: &str) -> Result<FoodLookup, AppError> {
    let raw = generate(st, &build_lookup_prompt(food_name)).await?;
    Ok(interpret_food_lookup(raw.as_deref(), food_name))
}
