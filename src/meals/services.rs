use time::{macros::format_description, Date, OffsetDateTime};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{dto::CreateMealRequest, repo_types::MealEntry};
use crate::{error::AppError, store::NutritionStore};

const ISO_DATE: &[time::format_description::FormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

fn format_date(date: Date) -> Result<String, AppError> {
    date.format(ISO_DATE)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("format date: {e}")))
}

/// Server calendar date (UTC) as `YYYY-MM-DD`.
pub fn today_iso() -> Result<String, AppError> {
    format_date(OffsetDateTime::now_utc().date())
}

/// Validates a `YYYY-MM-DD` path segment and returns it in canonical form.
pub fn normalize_date(raw: &str) -> Result<String, AppError> {
    let date = Date::parse(raw.trim(), ISO_DATE)
        .map_err(|_| AppError::BadRequest(format!("invalid date {raw:?}, expected YYYY-MM-DD")))?;
    format_date(date)
}

/// Stores a new entry dated today. A date in the request is ignored.
pub async fn log_meal(
    store: &dyn NutritionStore,
    req: CreateMealRequest,
) -> Result<MealEntry, AppError> {
    let today = today_iso()?;
    if let Some(requested) = req.date.as_deref().filter(|d| *d != today) {
        debug!(%requested, %today, "ignoring supplied meal date");
    }

    let meal = MealEntry {
        id: Uuid::new_v4(),
        user_id: req.user_id,
        food_name: req.food_name,
        amount_grams: req.amount_grams,
        meal_type: req.meal_type,
        calories: req.calories,
        protein: req.protein,
        carbs: req.carbs,
        fat: req.fat,
        date: today,
        created_at: OffsetDateTime::now_utc(),
    };
    store.insert_meal(&meal).await?;
    info!(meal_id = %meal.id, user_id = %meal.user_id, meal_type = %meal.meal_type, "meal logged");
    Ok(meal)
}

/// Entries are not tied to a registered user, so an id that cannot name
/// one simply has no meals.
pub async fn meals_for_date(
    store: &dyn NutritionStore,
    user_id: &str,
    date: &str,
) -> Result<Vec<MealEntry>, AppError> {
    let date = normalize_date(date)?;
    let Ok(user_id) = Uuid::parse_str(user_id.trim()) else {
        debug!(%user_id, %date, "no meals for non-uuid user id");
        return Ok(Vec::new());
    };
    Ok(store.meals_for_date(user_id, &date).await?)
}

pub async fn delete_meal(store: &dyn NutritionStore, id: Uuid) -> Result<(), AppError> {
    if store.delete_meal(id).await? == 0 {
        warn!(meal_id = %id, "delete of unknown meal");
        return Err(AppError::NotFound("Meal"));
    }
    info!(meal_id = %id, "meal deleted");
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::meals::repo_types::MealType;
    use crate::store::memory::MemoryStore;

    pub(crate) fn chicken_request(user_id: Uuid) -> CreateMealRequest {
        CreateMealRequest {
            user_id,
            food_name: "Test Chicken Breast".into(),
            amount_grams: 100.0,
            meal_type: MealType::Lunch,
            calories: 165.0,
            protein: 31.0,
            carbs: 0.0,
            fat: 3.6,
            date: None,
        }
    }

    #[test]
    fn normalize_accepts_iso_dates() {
        assert_eq!(normalize_date("2024-03-09").unwrap(), "2024-03-09");
        assert_eq!(normalize_date(" 2024-12-31 ").unwrap(), "2024-12-31");
    }

    #[test]
    fn normalize_rejects_garbage() {
        for bad in ["09-03-2024", "2024-13-01", "yesterday", ""] {
            assert!(matches!(normalize_date(bad), Err(AppError::BadRequest(_))), "{bad}");
        }
    }

    #[test]
    fn today_is_iso_formatted() {
        let today = today_iso().unwrap();
        assert_eq!(today.len(), 10);
        assert_eq!(normalize_date(&today).unwrap(), today);
    }

    #[tokio::test]
    async fn supplied_date_is_ignored() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        let mut req = chicken_request(user_id);
        req.date = Some("1999-01-01".into());

        let meal = log_meal(&store, req).await.unwrap();
        assert_eq!(meal.date, today_iso().unwrap());
        let user_id = user_id.to_string();
        assert!(meals_for_date(&store, &user_id, "1999-01-01")
            .await
            .unwrap()
            .is_empty());
        assert_eq!(
            meals_for_date(&store, &user_id, &meal.date).await.unwrap(),
            vec![meal]
        );
    }

    #[tokio::test]
    async fn opaque_user_id_lists_nothing() {
        let store = MemoryStore::new();
        log_meal(&store, chicken_request(Uuid::new_v4())).await.unwrap();
        let meals = meals_for_date(&store, "user-123", &today_iso().unwrap())
            .await
            .unwrap();
        assert!(meals.is_empty());
        assert!(matches!(
            meals_for_date(&store, "user-123", "yesterday").await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn delete_twice_is_not_found() {
        let store = MemoryStore::new();
        let meal = log_meal(&store, chicken_request(Uuid::new_v4()))
            .await
            .unwrap();
        delete_meal(&store, meal.id).await.unwrap();
        let err = delete_meal(&store, meal.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound("Meal")));
    }
}
