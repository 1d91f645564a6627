use serde::Serialize;

use crate::meals::repo_types::MealEntry;

/// Totals and targets for one user and day. Recomputed on every request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailySummary {
    pub date: String,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub calorie_target: i32,
    pub protein_target: f64,
    pub carbs_target: f64,
    pub fat_target: f64,
    pub meals: Vec<MealEntry>,
}
