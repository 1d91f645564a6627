use crate::{meals::repo_types::MealType, users::repo_types::MealPreferences};

const NO_PREFERENCES: &str = "no specific preferences";
const NO_EXCLUSIONS: &str = "none";
const DEFAULT_TIMING: &str = "balanced meals";

/// Everything the suggestion prompt is built from.
#[derive(Debug, Clone)]
pub struct SuggestionPrompt<'a> {
    pub meal_type: &'a str,
    pub remaining_calories: f64,
    pub remaining_protein: f64,
    pub remaining_carbs: f64,
    pub remaining_fat: f64,
    pub dietary_preferences: &'a [String],
    pub meal_preferences: &'a MealPreferences,
    pub recent_meals: &'a [String],
}

/// A non-empty request mapping replaces the stored one wholesale.
pub fn resolve_meal_preferences<'a>(
    requested: &'a MealPreferences,
    stored: &'a MealPreferences,
) -> &'a MealPreferences {
    if requested.is_empty() {
        stored
    } else {
        requested
    }
}

pub fn meal_timing(meal_type: &str) -> &'static str {
    match MealType::parse(meal_type) {
        Some(MealType::Breakfast) => "light, energizing meals suitable for morning consumption",
        Some(MealType::Lunch) => "satisfying, balanced meals that sustain energy through the afternoon",
        Some(MealType::Dinner) => "hearty yet digestible meals suitable for the evening",
        Some(MealType::Snack) => "small, convenient bites that bridge the gap between meals",
        None => DEFAULT_TIMING,
    }
}

/// Enabled flags (underscores shown as spaces) followed by any free-form
/// tags not already covered.
pub fn active_preferences(flags: &MealPreferences, tags: &[String]) -> String {
    let mut active: Vec<String> = flags
        .iter()
        .filter(|(_, on)| **on)
        .map(|(key, _)| key.replace('_', " "))
        .collect();
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !active.iter().any(|a| a.eq_ignore_ascii_case(tag)) {
            active.push(tag.to_string());
        }
    }
    if active.is_empty() {
        NO_PREFERENCES.to_string()
    } else {
        active.join(", ")
    }
}

pub fn excluded_meals(recent: &[String]) -> String {
    if recent.is_empty() {
        NO_EXCLUSIONS.to_string()
    } else {
        recent.join(", ")
    }
}

pub fn build_suggestion_prompt(req: &SuggestionPrompt<'_>) -> String {
    let preferences = active_preferences(req.meal_preferences, req.dietary_preferences);
    let excluded = excluded_meals(req.recent_meals);
    let timing = meal_timing(req.meal_type);

    format!(
        r#"I need complete meal suggestions for {meal_type}. Focus on {timing}.

Nutritional requirements:
- Remaining calories: {calories}
- Remaining protein: {protein}g
- Remaining carbs: {carbs}g
- Remaining fat: {fat}g
- Dietary preferences: {preferences}

Do NOT suggest any of these recently suggested meals: {excluded}

Suggest exactly 3 complete, ready-to-eat meals (not individual ingredients) that help reach these targets.
Each meal must come from a different cuisine type. Include full recipes with all ingredients, sauces and cooking steps.

Return ONLY a JSON array with this exact format:
[
  {{
    "meal_name": "Chicken Burrito Bowl",
    "total_calories": 450,
    "total_protein": 35,
    "total_carbs": 40,
    "total_fat": 15,
    "serving_size": "1 bowl (approximately 350g)",
    "ingredients": ["150g grilled chicken breast", "80g brown rice", "50g black beans", "40g avocado", "20g salsa"],
    "recipe": "1. Cook the rice. 2. Season and grill the chicken for 6-8 minutes per side. 3. Warm the beans. 4. Layer everything in a bowl and top with avocado and salsa.",
    "cooking_time": "20 minutes",
    "reason": "High protein with balanced macros that fit the remaining targets",
    "micronutrients": {{
      "fiber": "9g",
      "vitamin_c": "12mg",
      "iron": "3mg",
      "calcium": "80mg",
      "potassium": "750mg",
      "sodium": "520mg"
    }},
    "cuisine_type": "Mexican"
  }}
]

Make sure each meal:
- Is complete and realistic to prepare at home
- Lists every ingredient with an approximate amount
- Has step-by-step cooking instructions
- Respects the dietary preferences
- Has accurate nutrition totals for the whole serving"#,
        meal_type = req.meal_type,
        timing = timing,
        calories = req.remaining_calories,
        protein = req.remaining_protein,
        carbs = req.remaining_carbs,
        fat = req.remaining_fat,
        preferences = preferences,
        excluded = excluded,
    )
}

pub fn build_lookup_prompt(food_name: &str) -> String {
    format!(
        r#"Provide nutritional information for "{food_name}" per 100g.
Return ONLY a JSON object with this exact format:
{{
  "name": "exact food name",
  "calories_per_100g": 250,
  "protein_per_100g": 20,
  "carbs_per_100g": 30,
  "fat_per_100g": 8
}}

If the food is not recognizable, return an error message instead."#
    )
}
