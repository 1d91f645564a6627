use tracing::debug;
use uuid::Uuid;

use super::{
    dto::DailySummary,
    nutrition::{derive_targets, summarize},
};
use crate::{error::AppError, meals::services::normalize_date, store::NutritionStore};

pub async fn daily_summary(
    store: &dyn NutritionStore,
    user_id: Uuid,
    date: &str,
) -> Result<DailySummary, AppError> {
    let date = normalize_date(date)?;
    let user = store
        .find_user(user_id)
        .await?
        .ok_or(AppError::NotFound("User"))?;

    let meals = store.meals_for_date(user_id, &date).await?;
    let totals = summarize(&meals);
    let targets = derive_targets(user.daily_calorie_target, &user.macro_split);
    debug!(%user_id, %date, meals = meals.len(), calories = totals.calories, "daily summary computed");

    Ok(DailySummary {
        date,
        total_calories: totals.calories,
        total_protein: totals.protein,
        total_carbs: totals.carbs,
        total_fat: totals.fat,
        calorie_target: user.daily_calorie_target,
        protein_target: targets.protein_grams,
        carbs_target: targets.carbs_grams,
        fat_target: targets.fat_grams,
        meals,
    })
}
