use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use super::{dto::CreateFoodRequest, repo_types::FoodItem};
use crate::{error::AppError, store::NutritionStore};

const LIST_LIMIT: i64 = 100;
const SEARCH_LIMIT: i64 = 20;

/// name, kcal, protein, carbs, fat (per 100 g)
const COMMON_FOODS: [(&str, f64, f64, f64, f64); 10] = [
    ("Chicken Breast", 165.0, 31.0, 0.0, 3.6),
    ("Brown Rice", 111.0, 2.6, 23.0, 0.9),
    ("Avocado", 160.0, 2.0, 9.0, 15.0),
    ("Banana", 89.0, 1.1, 23.0, 0.3),
    ("Salmon", 208.0, 25.0, 0.0, 12.0),
    ("Greek Yogurt", 59.0, 10.0, 3.6, 0.4),
    ("Oats", 389.0, 16.9, 66.0, 6.9),
    ("Eggs", 155.0, 13.0, 1.1, 11.0),
    ("Broccoli", 34.0, 2.8, 7.0, 0.4),
    ("Sweet Potato", 86.0, 1.6, 20.0, 0.1),
];

fn new_food(req: CreateFoodRequest) -> FoodItem {
    FoodItem {
        id: Uuid::new_v4(),
        name: req.name,
        calories_per_100g: req.calories_per_100g,
        protein_per_100g: req.protein_per_100g,
        carbs_per_100g: req.carbs_per_100g,
        fat_per_100g: req.fat_per_100g,
        created_at: OffsetDateTime::now_utc(),
    }
}

pub async fn create_food(
    store: &dyn NutritionStore,
    req: CreateFoodRequest,
) -> Result<FoodItem, AppError> {
    let food = new_food(req);
    store.insert_food(&food).await?;
    info!(food_id = %food.id, name = %food.name, "food created");
    Ok(food)
}

pub async fn list_foods(store: &dyn NutritionStore) -> Result<Vec<FoodItem>, AppError> {
    Ok(store.list_foods(LIST_LIMIT).await?)
}

pub async fn search_foods(
    store: &dyn NutritionStore,
    query: &str,
) -> Result<Vec<FoodItem>, AppError> {
    Ok(store.search_foods(query, SEARCH_LIMIT).await?)
}

/// Inserts the common-food set. Running it twice inserts duplicates.
pub async fn seed_common_foods(store: &dyn NutritionStore) -> Result<usize, AppError> {
    for (name, kcal, protein, carbs, fat) in COMMON_FOODS {
        store
            .insert_food(&new_food(CreateFoodRequest {
                name: name.to_string(),
                calories_per_100g: kcal,
                protein_per_100g: protein,
                carbs_per_100g: carbs,
                fat_per_100g: fat,
            }))
            .await?;
    }
    info!(count = COMMON_FOODS.len(), "food database seeded");
    Ok(COMMON_FOODS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    #[tokio::test]
    async fn seed_inserts_ten_foods() {
        let store = MemoryStore::new();
        assert_eq!(seed_common_foods(&store).await.unwrap(), 10);
        let foods = list_foods(&store).await.unwrap();
        assert_eq!(foods.len(), 10);
        let chicken = foods.iter().find(|f| f.name == "Chicken Breast").unwrap();
        assert_eq!(chicken.calories_per_100g, 165.0);
        assert_eq!(chicken.fat_per_100g, 3.6);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let store = MemoryStore::new();
        seed_common_foods(&store).await.unwrap();

        let hits = search_foods(&store, "CHICK").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Chicken Breast");

        let hits = search_foods(&store, "o").await.unwrap();
        assert!(hits.iter().all(|f| f.name.to_lowercase().contains('o')));
        assert!(search_foods(&store, "tofu").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_single_food() {
        let store = MemoryStore::new();
        let food = create_food(
            &store,
            CreateFoodRequest {
                name: "Tofu".into(),
                calories_per_100g: 76.0,
                protein_per_100g: 8.0,
                carbs_per_100g: 1.9,
                fat_per_100g: 4.8,
            },
        )
        .await
        .unwrap();
        assert_eq!(search_foods(&store, "tofu").await.unwrap(), vec![food]);
    }
}
