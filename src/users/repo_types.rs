use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use time::OffsetDateTime;
use uuid::Uuid;

/// Longest recency log kept per user.
pub const RECENT_SUGGESTIONS_CAP: usize = 15;

/// Meal-preference flags every new user starts with (all off).
pub const MEAL_PREFERENCE_KEYS: &[&str] = &[
    "vegetarian",
    "vegan",
    "keto",
    "paleo",
    "gluten_free",
    "dairy_free",
    "low_carb",
    "high_protein",
    "mediterranean",
    "asian_cuisine",
    "indian_cuisine",
    "mexican_cuisine",
];

pub type MealPreferences = BTreeMap<String, bool>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    FatLoss,
    Maintenance,
    MuscleGain,
}

impl Goal {
    pub fn as_str(self) -> &'static str {
        match self {
            Goal::FatLoss => "fat_loss",
            Goal::Maintenance => "maintenance",
            Goal::MuscleGain => "muscle_gain",
        }
    }
}

impl FromStr for Goal {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fat_loss" => Ok(Goal::FatLoss),
            "maintenance" => Ok(Goal::Maintenance),
            "muscle_gain" => Ok(Goal::MuscleGain),
            other => anyhow::bail!("unknown goal {other:?}"),
        }
    }
}

/// Percent of daily calories per macro. Expected to sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroSplit {
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
}

impl MacroSplit {
    pub fn total(&self) -> i32 {
        self.protein + self.carbs + self.fat
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub activity_level: String,
    pub goal: Goal,
    pub daily_calorie_target: i32,
    pub macro_split: MacroSplit,
    pub dietary_preferences: Vec<String>,
    pub meal_preferences: MealPreferences,
    pub recent_suggestions: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Row shape of the `users` table.
#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub activity_level: String,
    pub goal: String,
    pub daily_calorie_target: i32,
    pub macro_split: Json<MacroSplit>,
    pub dietary_preferences: Vec<String>,
    pub meal_preferences: Json<MealPreferences>,
    pub recent_suggestions: Vec<String>,
    pub created_at: OffsetDateTime,
}

impl TryFrom<UserRow> for User {
    type Error = anyhow::Error;

    fn try_from(r: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: r.id,
            name: r.name,
            age: r.age,
            gender: r.gender,
            activity_level: r.activity_level,
            goal: r.goal.parse()?,
            daily_calorie_target: r.daily_calorie_target,
            macro_split: r.macro_split.0,
            dietary_preferences: r.dietary_preferences,
            meal_preferences: r.meal_preferences.0,
            recent_suggestions: r.recent_suggestions,
            created_at: r.created_at,
        })
    }
}
