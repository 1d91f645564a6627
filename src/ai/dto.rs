use serde::{Deserialize, Serialize};

use super::model::AiMealSuggestion;
use crate::users::repo_types::MealPreferences;

#[derive(Debug, Deserialize)]
pub struct MealSuggestionRequest {
    pub user_id: String,
    #[serde(default)]
    pub current_date: Option<String>,
    pub remaining_calories: f64,
    pub remaining_protein: f64,
    pub remaining_carbs: f64,
    pub remaining_fat: f64,
    /// Free text; anything outside breakfast/lunch/dinner/snack gets the
    /// generic treatment.
    #[serde(default)]
    pub meal_type: String,
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    /// When non-empty, replaces the user's stored flags for this request.
    #[serde(default)]
    pub meal_preferences: MealPreferences,
}

#[derive(Debug, Serialize)]
pub struct MealSuggestionResponse {
    pub suggestions: Vec<AiMealSuggestion>,
    /// `"ai"` or `"fallback"`.
    pub source: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct FoodLookupRequest {
    #[serde(default)]
    pub food_name: String,
}
