use serde::Deserialize;

use super::repo_types::{Goal, MacroSplit, MealPreferences};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub activity_level: String,
    pub goal: Goal,
    pub daily_calorie_target: i32,
    pub macro_split: MacroSplit,
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    /// Overrides for the default (all-off) preference flags.
    #[serde(default)]
    pub meal_preferences: MealPreferences,
}
