use async_trait::async_trait;
use uuid::Uuid;

use crate::{foods::repo_types::FoodItem, meals::repo_types::MealEntry, users::repo_types::User};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

/// Persistence for users, foods and meal entries.
///
/// Every call is a single round trip with no retry; callers treat failures
/// as fatal for the request.
#[async_trait]
pub trait NutritionStore: Send + Sync {
    async fn insert_user(&self, user: &User) -> anyhow::Result<()>;
    async fn find_user(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    async fn list_users(&self, limit: i64) -> anyhow::Result<Vec<User>>;
    /// Replaces the user's recency log. Last writer wins.
    async fn set_recent_suggestions(&self, user_id: Uuid, names: &[String])
        -> anyhow::Result<()>;

    async fn insert_food(&self, food: &FoodItem) -> anyhow::Result<()>;
    async fn list_foods(&self, limit: i64) -> anyhow::Result<Vec<FoodItem>>;
    /// Case-insensitive substring match on the food name.
    async fn search_foods(&self, query: &str, limit: i64) -> anyhow::Result<Vec<FoodItem>>;

    async fn insert_meal(&self, meal: &MealEntry) -> anyhow::Result<()>;
    async fn meals_for_date(&self, user_id: Uuid, date: &str) -> anyhow::Result<Vec<MealEntry>>;
    /// Returns how many entries were removed (0 or 1).
    async fn delete_meal(&self, id: Uuid) -> anyhow::Result<u64>;
}
