use serde::Serialize;
use tracing::warn;

use super::{
    fallback::canned_suggestions,
    fences::strip_fences,
    model::{AiMealSuggestion, FoodNutrition},
};

pub const UNRECOGNIZED_FOOD: &str = "Could not parse nutritional information for this food";

/// Result of reading the generation service's suggestion text.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    /// The text held a JSON array of suggestions.
    Parsed(Vec<AiMealSuggestion>),
    /// The text was unusable (or no call was made); canned data instead.
    Fallback(Vec<AiMealSuggestion>),
}

impl SuggestionOutcome {
    pub fn source(&self) -> &'static str {
        match self {
            SuggestionOutcome::Parsed(_) => "ai",
            SuggestionOutcome::Fallback(_) => "fallback",
        }
    }

    /// Names worth remembering for de-duplication. Canned meals are never
    /// recorded.
    pub fn generated_names(&self) -> Vec<String> {
        match self {
            SuggestionOutcome::Parsed(items) => items.iter().map(|s| s.meal_name.clone()).collect(),
            SuggestionOutcome::Fallback(_) => Vec::new(),
        }
    }

    pub fn into_suggestions(self) -> Vec<AiMealSuggestion> {
        match self {
            SuggestionOutcome::Parsed(items) | SuggestionOutcome::Fallback(items) => items,
        }
    }
}

/// `raw` is `None` when the generation service was not called at all.
pub fn interpret_suggestions(raw: Option<&str>, meal_type: &str) -> SuggestionOutcome {
    let Some(raw) = raw else {
        return SuggestionOutcome::Fallback(canned_suggestions(meal_type));
    };
    match serde_json::from_str::<Vec<AiMealSuggestion>>(&strip_fences(raw)) {
        Ok(items) => SuggestionOutcome::Parsed(items),
        Err(e) => {
            warn!(error = %e, %meal_type, "unparseable suggestion text, using canned meal");
            SuggestionOutcome::Fallback(canned_suggestions(meal_type))
        }
    }
}

/// Result of a single-food nutrition lookup. Serializes to either the
/// nutrition record or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FoodLookup {
    Found(FoodNutrition),
    Unrecognized { error: String },
}

impl FoodLookup {
    fn unrecognized() -> Self {
        FoodLookup::Unrecognized {
            error: UNRECOGNIZED_FOOD.to_string(),
        }
    }
}

pub fn interpret_food_lookup(raw: Option<&str>, food_name: &str) -> FoodLookup {
    let Some(raw) = raw else {
        return FoodLookup::unrecognized();
    };
    match serde_json::from_str::<FoodNutrition>(&strip_fences(raw)) {
        Ok(found) => FoodLookup::Found(found),
        Err(e) => {
            warn!(error = %e, %food_name, "food not recognized");
            FoodLookup::unrecognized()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_MEALS: &str = r#"[
      {"meal_name": "Tofu Stir Fry", "total_calories": 480, "total_protein": 30,
       "total_carbs": 50, "total_fat": 16, "serving_size": "1 plate",
       "ingredients": ["200g tofu", "100g rice"], "recipe": "1. Fry. 2. Serve.",
       "cooking_time": "20 minutes", "reason": "Plant protein",
       "micronutrients": {"fiber": "6g", "iron": "4mg"}, "cuisine_type": "Chinese"},
      {"meal_name": "Lentil Dal", "total_calories": 450, "total_protein": 24,
       "total_carbs": 60, "total_fat": 10, "serving_size": "1 bowl",
       "ingredients": ["100g red lentils"], "recipe": "1. Simmer.",
       "cooking_time": "30 minutes", "reason": "Fiber", "cuisine_type": "Indian"},
      {"meal_name": "Caprese Pasta", "total_calories": 520, "total_protein": 22,
       "total_carbs": 65, "total_fat": 18, "serving_size": "1 plate",
       "ingredients": ["90g pasta", "60g mozzarella"], "recipe": "1. Boil. 2. Toss.",
       "cooking_time": "15 minutes", "reason": "Quick", "cuisine_type": "Italian"}
    ]"#;

    #[test]
    fn parses_plain_json_array() {
        let outcome = interpret_suggestions(Some(THREE_MEALS), "dinner");
        assert_eq!(outcome.source(), "ai");
        assert_eq!(
            outcome.generated_names(),
            vec!["Tofu Stir Fry", "Lentil Dal", "Caprese Pasta"]
        );
        let items = outcome.into_suggestions();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].micronutrients.as_ref().unwrap().iron.as_deref(), Some("4mg"));
        assert!(items[1].micronutrients.is_none());
    }

    #[test]
    fn parses_fenced_json_array() {
        let fenced = format!("```json\n{THREE_MEALS}\n```");
        let outcome = interpret_suggestions(Some(&fenced), "lunch");
        assert_eq!(outcome.source(), "ai");
        assert_eq!(outcome.into_suggestions().len(), 3);
    }

    #[test]
    fn malformed_text_yields_canned_dinner() {
        let outcome = interpret_suggestions(Some("Sorry, I can't help with that."), "dinner");
        assert_eq!(outcome.source(), "fallback");
        assert!(outcome.generated_names().is_empty());
        assert_eq!(outcome.into_suggestions(), canned_suggestions("dinner"));
    }

    #[test]
    fn wrong_shape_is_a_fallback() {
        let outcome = interpret_suggestions(Some(r#"{"meal_name": "Solo"}"#), "snack");
        assert_eq!(outcome, SuggestionOutcome::Fallback(canned_suggestions("snack")));
    }

    #[test]
    fn unknown_meal_type_fallback_is_lunch() {
        let outcome = interpret_suggestions(Some("not json"), "midnight feast");
        assert_eq!(outcome.into_suggestions(), canned_suggestions("lunch"));
    }

    #[test]
    fn no_call_is_a_fallback() {
        assert_eq!(
            interpret_suggestions(None, "breakfast"),
            SuggestionOutcome::Fallback(canned_suggestions("breakfast"))
        );
    }

    #[test]
    fn food_lookup_parses_object() {
        let raw = "```json\n{\"name\": \"Banana\", \"calories_per_100g\": 89, \
                   \"protein_per_100g\": 1.1, \"carbs_per_100g\": 23, \"fat_per_100g\": 0.3}\n```";
        let found = interpret_food_lookup(Some(raw), "banana");
        assert_eq!(
            found,
            FoodLookup::Found(FoodNutrition {
                name: "Banana".into(),
                calories_per_100g: 89.0,
                protein_per_100g: 1.1,
                carbs_per_100g: 23.0,
                fat_per_100g: 0.3,
            })
        );
    }

    #[test]
    fn food_lookup_unrecognized_on_garbage() {
        let res = interpret_food_lookup(Some("I don't know what 'zzz' is."), "zzz");
        assert_eq!(
            res,
            FoodLookup::Unrecognized {
                error: UNRECOGNIZED_FOOD.into()
            }
        );
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["error"], UNRECOGNIZED_FOOD);
    }

    #[test]
    fn food_lookup_error_object_is_unrecognized() {
        let res = interpret_food_lookup(Some(r#"{"error": "unknown food"}"#), "zzz");
        assert!(matches!(res, FoodLookup::Unrecognized { .. }));
    }

    #[test]
    fn found_serializes_flat() {
        let res = FoodLookup::Found(FoodNutrition {
            name: "Oats".into(),
            calories_per_100g: 389.0,
            protein_per_100g: 16.9,
            carbs_per_100g: 66.0,
            fat_per_100g: 6.9,
        });
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["calories_per_100g"], 389.0);
        assert!(json.get("error").is_none());
    }
}
