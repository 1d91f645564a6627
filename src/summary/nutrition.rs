//! Calorie and macro arithmetic behind the daily summary.

use crate::{meals::repo_types::MealEntry, users::repo_types::MacroSplit};

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroTargets {
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fat_grams: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Gram targets for a calorie budget split by percentage. Unrounded.
pub fn derive_targets(calorie_target: i32, split: &MacroSplit) -> MacroTargets {
    let share = |pct: i32| f64::from(calorie_target) * f64::from(pct) / 100.0;
    MacroTargets {
        protein_grams: share(split.protein) / KCAL_PER_G_PROTEIN,
        carbs_grams: share(split.carbs) / KCAL_PER_G_CARBS,
        fat_grams: share(split.fat) / KCAL_PER_G_FAT,
    }
}

pub fn summarize(meals: &[MealEntry]) -> Totals {
    meals.iter().fold(Totals::default(), |acc, m| Totals {
        calories: acc.calories + m.calories,
        protein: acc.protein + m.protein,
        carbs: acc.carbs + m.carbs,
        fat: acc.fat + m.fat,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meals::repo_types::MealType;
    use time::OffsetDateTime;
    use uuid::Uuid;

    const EPS: f64 = 1e-9;

    fn meal(calories: f64, protein: f64, carbs: f64, fat: f64) -> MealEntry {
        MealEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            food_name: "x".into(),
            amount_grams: 100.0,
            meal_type: MealType::Snack,
            calories,
            protein,
            carbs,
            fat,
            date: "2024-01-01".into(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn targets_for_2000_kcal_30_40_30() {
        let t = derive_targets(
            2000,
            &MacroSplit {
                protein: 30,
                carbs: 40,
                fat: 30,
            },
        );
        assert!((t.protein_grams - 150.0).abs() < EPS);
        assert!((t.carbs_grams - 200.0).abs() < EPS);
        assert!((t.fat_grams - 600.0 / 9.0).abs() < EPS);
        assert!((t.fat_grams - 66.67).abs() < 0.01);
    }

    #[test]
    fn targets_match_closed_form_across_inputs() {
        let splits = [(30, 40, 30), (40, 30, 30), (25, 50, 25), (20, 5, 75), (100, 0, 0)];
        for calories in [1200, 1800, 2500, 3333] {
            for (p, c, f) in splits {
                let t = derive_targets(
                    calories,
                    &MacroSplit {
                        protein: p,
                        carbs: c,
                        fat: f,
                    },
                );
                let cal = f64::from(calories);
                assert!((t.protein_grams - cal * f64::from(p) / 400.0).abs() < EPS);
                assert!((t.carbs_grams - cal * f64::from(c) / 400.0).abs() < EPS);
                assert!((t.fat_grams - cal * f64::from(f) / 900.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn empty_day_sums_to_zero() {
        assert_eq!(summarize(&[]), Totals::default());
    }

    #[test]
    fn totals_are_field_sums() {
        let meals = [
            meal(165.0, 31.0, 0.0, 3.6),
            meal(111.0, 2.6, 23.0, 0.9),
            meal(80.0, 1.0, 4.0, 7.0),
        ];
        let t = summarize(&meals);
        assert!((t.calories - 356.0).abs() < EPS);
        assert!((t.protein - 34.6).abs() < EPS);
        assert!((t.carbs - 27.0).abs() < EPS);
        assert!((t.fat - 11.5).abs() < EPS);
    }
}
