use anyhow::Context;
use async_trait::async_trait;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use super::NutritionStore;
use crate::{
    foods::repo_types::FoodItem,
    meals::repo_types::{MealEntry, MealEntryRow},
    users::repo_types::{User, UserRow},
};

const USER_COLUMNS: &str = "id, name, age, gender, activity_level, goal, daily_calorie_target, \
     macro_split, dietary_preferences, meal_preferences, recent_suggestions, created_at";

const MEAL_COLUMNS: &str =
    "id, user_id, food_name, amount_grams, meal_type, calories, protein, carbs, fat, date, created_at";

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

/// Escapes LIKE wildcards so the query is matched literally.
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl NutritionStore for PgStore {
    async fn insert_user(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, age, gender, activity_level, goal, daily_calorie_target,
                               macro_split, dietary_preferences, meal_preferences,
                               recent_suggestions, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(user.age)
        .bind(&user.gender)
        .bind(&user.activity_level)
        .bind(user.goal.as_str())
        .bind(user.daily_calorie_target)
        .bind(Json(&user.macro_split))
        .bind(&user.dietary_preferences)
        .bind(Json(&user.meal_preferences))
        .bind(&user.recent_suggestions)
        .bind(user.created_at)
        .execute(&self.db)
        .await
        .context("insert user")?;
        Ok(())
    }

    async fn find_user(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("find user")?;
        row.map(User::try_from).transpose()
    }

    async fn list_users(&self, limit: i64) -> anyhow::Result<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .context("list users")?;
        rows.into_iter().map(User::try_from).collect()
    }

    async fn set_recent_suggestions(
        &self,
        user_id: Uuid,
        names: &[String],
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
               SET recent_suggestions = $2
             WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(names)
        .execute(&self.db)
        .await
        .context("update recent suggestions")?;
        Ok(())
    }

    async fn insert_food(&self, food: &FoodItem) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO foods (id, name, calories_per_100g, protein_per_100g,
                               carbs_per_100g, fat_per_100g, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(food.id)
        .bind(&food.name)
        .bind(food.calories_per_100g)
        .bind(food.protein_per_100g)
        .bind(food.carbs_per_100g)
        .bind(food.fat_per_100g)
        .bind(food.created_at)
        .execute(&self.db)
        .await
        .context("insert food")?;
        Ok(())
    }

    async fn list_foods(&self, limit: i64) -> anyhow::Result<Vec<FoodItem>> {
        let rows = sqlx::query_as::<_, FoodItem>(
            r#"
            SELECT id, name, calories_per_100g, protein_per_100g, carbs_per_100g,
                   fat_per_100g, created_at
              FROM foods
             ORDER BY created_at ASC
             LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .context("list foods")?;
        Ok(rows)
    }

    async fn search_foods(&self, query: &str, limit: i64) -> anyhow::Result<Vec<FoodItem>> {
        let rows = sqlx::query_as::<_, FoodItem>(
            r#"
            SELECT id, name, calories_per_100g, protein_per_100g, carbs_per_100g,
                   fat_per_100g, created_at
              FROM foods
             WHERE name ILIKE $1
             ORDER BY created_at ASC
             LIMIT $2
            "#,
        )
        .bind(like_pattern(query))
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .context("search foods")?;
        Ok(rows)
    }

    async fn insert_meal(&self, meal: &MealEntry) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO meals (id, user_id, food_name, amount_grams, meal_type,
                               calories, protein, carbs, fat, date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(meal.id)
        .bind(meal.user_id)
        .bind(&meal.food_name)
        .bind(meal.amount_grams)
        .bind(meal.meal_type.as_str())
        .bind(meal.calories)
        .bind(meal.protein)
        .bind(meal.carbs)
        .bind(meal.fat)
        .bind(&meal.date)
        .bind(meal.created_at)
        .execute(&self.db)
        .await
        .context("insert meal")?;
        Ok(())
    }

    async fn meals_for_date(&self, user_id: Uuid, date: &str) -> anyhow::Result<Vec<MealEntry>> {
        let rows = sqlx::query_as::<_, MealEntryRow>(&format!(
            "SELECT {MEAL_COLUMNS} FROM meals WHERE user_id = $1 AND date = $2 \
             ORDER BY created_at ASC"
        ))
        .bind(user_id)
        .bind(date)
        .fetch_all(&self.db)
        .await
        .context("list meals for date")?;
        rows.into_iter().map(MealEntry::try_from).collect()
    }

    async fn delete_meal(&self, id: Uuid) -> anyhow::Result<u64> {
        let res = sqlx::query("DELETE FROM meals WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .context("delete meal")?;
        Ok(res.rows_affected())
    }
}
