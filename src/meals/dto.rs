use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::repo_types::MealType;

#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    pub user_id: Uuid,
    pub food_name: String,
    pub amount_grams: f64,
    pub meal_type: MealType,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// Accepted but ignored: entries are always stamped with today's date.
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
