use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Serialized lowercase; deserialized with the same case-insensitive
/// rules as [`MealType::parse`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    /// Case-insensitive lookup; `None` for anything outside the four types.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "snack" => Some(MealType::Snack),
            _ => None,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealType::parse(s).ok_or_else(|| anyhow::anyhow!("unknown meal type {s:?}"))
    }
}

impl TryFrom<String> for MealType {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A logged portion of food. `date` is always the server's calendar day at
/// logging time, formatted `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_name: String,
    pub amount_grams: f64,
    pub meal_type: MealType,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub date: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Row shape of the `meals` table.
#[derive(Debug, FromRow)]
pub struct MealEntryRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_name: String,
    pub amount_grams: f64,
    pub meal_type: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub date: String,
    pub created_at: OffsetDateTime,
}

impl TryFrom<MealEntryRow> for MealEntry {
    type Error = anyhow::Error;

    fn try_from(r: MealEntryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: r.id,
            user_id: r.user_id,
            food_name: r.food_name,
            amount_grams: r.amount_grams,
            meal_type: r.meal_type.parse()?,
            calories: r.calories,
            protein: r.protein,
            carbs: r.carbs,
            fat: r.fat,
            date: r.date,
            created_at: r.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_type_parse_is_lenient_on_case() {
        assert_eq!(MealType::parse("Dinner"), Some(MealType::Dinner));
        assert_eq!(MealType::parse(" snack "), Some(MealType::Snack));
        assert_eq!(MealType::parse("brunch"), None);
        assert!("elevenses".parse::<MealType>().is_err());
    }

    #[test]
    fn meal_type_serde_lowercase() {
        let json = serde_json::to_string(&MealType::Breakfast).unwrap();
        assert_eq!(json, "\"breakfast\"");
        let back: MealType = serde_json::from_str("\"lunch\"").unwrap();
        assert_eq!(back, MealType::Lunch);
    }

    #[test]
    fn meal_type_deserialize_ignores_case() {
        let back: MealType = serde_json::from_str("\"Dinner\"").unwrap();
        assert_eq!(back, MealType::Dinner);
        let back: MealType = serde_json::from_str("\"SNACK\"").unwrap();
        assert_eq!(back, MealType::Snack);
        assert!(serde_json::from_str::<MealType>("\"brunch\"").is_err());
    }
}
