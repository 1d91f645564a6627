use super::model::{AiMealSuggestion, Micronutrients};
use crate::meals::repo_types::MealType;

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn micros(
    fiber: &str,
    vitamin_c: &str,
    iron: &str,
    calcium: &str,
    potassium: &str,
    sodium: &str,
) -> Option<Micronutrients> {
    Some(Micronutrients {
        fiber: Some(fiber.into()),
        vitamin_c: Some(vitamin_c.into()),
        iron: Some(iron.into()),
        calcium: Some(calcium.into()),
        potassium: Some(potassium.into()),
        sodium: Some(sodium.into()),
    })
}

fn breakfast() -> AiMealSuggestion {
    AiMealSuggestion {
        meal_name: "Greek Yogurt Berry Parfait".into(),
        total_calories: 380.0,
        total_protein: 28.0,
        total_carbs: 45.0,
        total_fat: 10.0,
        serving_size: "1 large glass (approximately 350g)".into(),
        ingredients: owned(&[
            "200g plain Greek yogurt",
            "40g rolled oats",
            "80g mixed berries",
            "15g honey",
            "10g chia seeds",
            "10g sliced almonds",
        ]),
        recipe: "1. Toast the oats in a dry pan for 3 minutes. 2. Layer half the yogurt in a glass. \
                 3. Add half the berries and oats. 4. Repeat the layers. 5. Top with chia seeds, \
                 almonds and a drizzle of honey."
            .into(),
        cooking_time: "10 minutes".into(),
        reason: "Protein-rich start to the day with slow carbs and fiber for steady morning energy"
            .into(),
        micronutrients: micros("8g", "25mg", "2mg", "320mg", "480mg", "95mg"),
        cuisine_type: Some("Mediterranean".into()),
    }
}

fn lunch() -> AiMealSuggestion {
    AiMealSuggestion {
        meal_name: "Chicken Burrito Bowl".into(),
        total_calories: 520.0,
        total_protein: 42.0,
        total_carbs: 52.0,
        total_fat: 16.0,
        serving_size: "1 bowl (approximately 400g)".into(),
        ingredients: owned(&[
            "150g grilled chicken breast",
            "80g brown rice",
            "60g black beans",
            "40g avocado",
            "30g tomato salsa",
            "20g sweetcorn",
            "Mixed greens",
            "Lime wedge",
        ]),
        recipe: "1. Cook the brown rice according to the package. 2. Season the chicken with cumin, \
                 paprika, salt and pepper and grill 6-8 minutes per side. 3. Warm the beans and \
                 corn. 4. Layer rice, beans, corn and sliced chicken in a bowl. 5. Top with \
                 avocado, salsa, greens and a squeeze of lime."
            .into(),
        cooking_time: "25 minutes".into(),
        reason: "Balanced macros with lean protein and complex carbs to carry you through the afternoon"
            .into(),
        micronutrients: micros("11g", "18mg", "3.5mg", "70mg", "820mg", "540mg"),
        cuisine_type: Some("Mexican".into()),
    }
}

fn dinner() -> AiMealSuggestion {
    AiMealSuggestion {
        meal_name: "Baked Salmon with Sweet Potato and Broccoli".into(),
        total_calories: 560.0,
        total_protein: 38.0,
        total_carbs: 45.0,
        total_fat: 24.0,
        serving_size: "1 plate (approximately 420g)".into(),
        ingredients: owned(&[
            "150g salmon fillet",
            "200g sweet potato",
            "120g broccoli florets",
            "10ml olive oil",
            "1 garlic clove",
            "Lemon juice",
            "Salt, pepper and dill",
        ]),
        recipe: "1. Heat the oven to 200C. 2. Cube the sweet potato, toss with half the oil and \
                 roast for 25 minutes. 3. Season the salmon with garlic, dill, salt and pepper and \
                 bake for the last 12-15 minutes. 4. Steam the broccoli for 5 minutes. 5. Plate \
                 everything and finish with lemon juice."
            .into(),
        cooking_time: "35 minutes".into(),
        reason: "Omega-3 rich protein with fiber-dense vegetables for an easy-to-digest evening meal"
            .into(),
        micronutrients: micros("9g", "110mg", "2.4mg", "95mg", "1300mg", "210mg"),
        cuisine_type: Some("Nordic".into()),
    }
}

fn snack() -> AiMealSuggestion {
    AiMealSuggestion {
        meal_name: "Banana Peanut Butter Protein Smoothie".into(),
        total_calories: 310.0,
        total_protein: 24.0,
        total_carbs: 34.0,
        total_fat: 9.0,
        serving_size: "1 glass (approximately 400ml)".into(),
        ingredients: owned(&[
            "1 medium banana",
            "25g whey protein powder",
            "15g peanut butter",
            "250ml unsweetened almond milk",
            "Handful of ice",
        ]),
        recipe: "1. Add all ingredients to a blender. 2. Blend on high for 45 seconds until \
                 smooth. 3. Pour and serve immediately."
            .into(),
        cooking_time: "5 minutes".into(),
        reason: "Quick protein boost with natural sugars to bridge the gap between meals".into(),
        micronutrients: micros("4g", "10mg", "1.2mg", "450mg", "620mg", "230mg"),
        cuisine_type: Some("American".into()),
    }
}

/// Pre-authored suggestion used when generated text cannot be parsed.
/// Unknown meal types get the lunch entry.
pub fn canned_suggestions(meal_type: &str) -> Vec<AiMealSuggestion> {
    let meal = match MealType::parse(meal_type) {
        Some(MealType::Breakfast) => breakfast(),
        Some(MealType::Dinner) => dinner(),
        Some(MealType::Snack) => snack(),
        Some(MealType::Lunch) | None => lunch(),
    };
    vec![meal]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_meal_type_has_its_own_entry() {
        let names: Vec<String> = ["breakfast", "lunch", "dinner", "snack"]
            .iter()
            .map(|t| canned_suggestions(t)[0].meal_name.clone())
            .collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn unknown_meal_type_falls_back_to_lunch() {
        assert_eq!(canned_suggestions("brunch"), canned_suggestions("lunch"));
        assert_eq!(canned_suggestions(""), canned_suggestions("lunch"));
    }

    #[test]
    fn canned_records_are_complete() {
        for meal_type in ["breakfast", "lunch", "dinner", "snack"] {
            let suggestions = canned_suggestions(meal_type);
            assert_eq!(suggestions.len(), 1);
            let s = &suggestions[0];
            assert!(s.total_calories > 0.0);
            assert!(!s.ingredients.is_empty());
            assert!(!s.recipe.is_empty());
            let m = s.micronutrients.as_ref().expect("micronutrients");
            assert!(m.fiber.is_some() && m.sodium.is_some());
            assert!(s.cuisine_type.is_some());
        }
    }
}
