use serde::{Deserialize, Serialize};

/// Micronutrients reported for a suggested meal; values keep their units
/// (e.g. `"8g"`, `"45mg"`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Micronutrients {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_c: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iron: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calcium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potassium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<String>,
}

/// One complete meal proposed by the generation service (or the canned table).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiMealSuggestion {
    pub meal_name: String,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub serving_size: String,
    pub ingredients: Vec<String>,
    pub recipe: String,
    pub cooking_time: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub micronutrients: Option<Micronutrients>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<String>,
}

/// Per-100 g estimate for a single food.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodNutrition {
    pub name: String,
    pub calories_per_100g: f64,
    pub protein_per_100g: f64,
    pub carbs_per_100g: f64,
    pub fat_per_100g: f64,
}
