use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

use super::{
    dto::CreateUserRequest,
    repo_types::{MealPreferences, User, MEAL_PREFERENCE_KEYS},
};
use crate::{error::AppError, store::NutritionStore};

const LIST_LIMIT: i64 = 1000;

/// Every known flag switched off, with `overrides` applied on top.
pub fn default_meal_preferences(overrides: MealPreferences) -> MealPreferences {
    let mut prefs: MealPreferences = MEAL_PREFERENCE_KEYS
        .iter()
        .map(|k| (k.to_string(), false))
        .collect();
    prefs.extend(overrides);
    prefs
}

pub async fn create_user(
    store: &dyn NutritionStore,
    req: CreateUserRequest,
) -> Result<User, AppError> {
    // Not enforced; target math assumes it.
    if req.macro_split.total() != 100 {
        warn!(total = req.macro_split.total(), "macro split does not sum to 100");
    }

    let user = User {
        id: Uuid::new_v4(),
        name: req.name,
        age: req.age,
        gender: req.gender,
        activity_level: req.activity_level,
        goal: req.goal,
        daily_calorie_target: req.daily_calorie_target,
        macro_split: req.macro_split,
        dietary_preferences: req.dietary_preferences,
        meal_preferences: default_meal_preferences(req.meal_preferences),
        recent_suggestions: Vec::new(),
        created_at: OffsetDateTime::now_utc(),
    };
    store.insert_user(&user).await?;
    info!(user_id = %user.id, goal = user.goal.as_str(), "user registered");
    Ok(user)
}

pub async fn get_user(store: &dyn NutritionStore, id: Uuid) -> Result<User, AppError> {
    store
        .find_user(id)
        .await?
        .ok_or(AppError::NotFound("User"))
}

pub async fn list_users(store: &dyn NutritionStore) -> Result<Vec<User>, AppError> {
    Ok(store.list_users(LIST_LIMIT).await?)
}
