use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::NutritionStore;
use crate::{foods::repo_types::FoodItem, meals::repo_types::MealEntry, users::repo_types::User};

/// Vec-backed store used by the test suite.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    foods: RwLock<Vec<FoodItem>>,
    meals: RwLock<Vec<MealEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn take(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}

#[async_trait]
impl NutritionStore for MemoryStore {
    async fn insert_user(&self, user: &User) -> anyhow::Result<()> {
        self.users.write().await.push(user.clone());
        Ok(())
    }

    async fn find_user(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn list_users(&self, limit: i64) -> anyhow::Result<Vec<User>> {
        Ok(self.users.read().await.iter().take(take(limit)).cloned().collect())
    }

    async fn set_recent_suggestions(
        &self,
        user_id: Uuid,
        names: &[String],
    ) -> anyhow::Result<()> {
        if let Some(user) = self.users.write().await.iter_mut().find(|u| u.id == user_id) {
            user.recent_suggestions = names.to_vec();
        }
        Ok(())
    }

    async fn insert_food(&self, food: &FoodItem) -> anyhow::Result<()> {
        self.foods.write().await.push(food.clone());
        Ok(())
    }

    async fn list_foods(&self, limit: i64) -> anyhow::Result<Vec<FoodItem>> {
        Ok(self.foods.read().await.iter().take(take(limit)).cloned().collect())
    }

    async fn search_foods(&self, query: &str, limit: i64) -> anyhow::Result<Vec<FoodItem>> {
        let needle = query.to_lowercase();
        Ok(self
            .foods
            .read()
            .await
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&needle))
            .take(take(limit))
            .cloned()
            .collect())
    }

    async fn insert_meal(&self, meal: &MealEntry) -> anyhow::Result<()> {
        self.meals.write().await.push(meal.clone());
        Ok(())
    }

    async fn meals_for_date(&self, user_id: Uuid, date: &str) -> anyhow::Result<Vec<MealEntry>> {
        Ok(self
            .meals
            .read()
            .await
            .iter()
            .filter(|m| m.user_id == user_id && m.date == date)
            .cloned()
            .collect())
    }

    async fn delete_meal(&self, id: Uuid) -> anyhow::Result<u64> {
        let mut meals = self.meals.write().await;
        let before = meals.len();
        meals.retain(|m| m.id != id);
        Ok((before - meals.len()) as u64)
    }
}
