use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::catalog::FoodCatalog;
use crate::config::{MealSplit, RecommenderConfig};
use crate::error::Result;
use crate::models::{MealSelection, MealSlot, Recommendation, UserProfile};
use crate::planner::calories::estimate_for_profile;
use crate::planner::selection::select_meal;
use crate::planner::workout::WorkoutReferenceSet;

/// Calorie budget per meal, in serving order.
pub fn meal_budgets(required_calories: f64, split: &MealSplit) -> [(MealSlot, f64); 3] {
    MealSlot::ALL.map(|slot| (slot, required_calories * split.share(slot)))
}

/// Build a full diet and workout recommendation.
///
/// Each meal draws from its own `StdRng` seeded from `rng`, so the three
/// selections never share a random stream. Errors from any stage are returned
/// unchanged.
pub fn recommend<R: Rng>(
    profile: &UserProfile,
    catalog: &FoodCatalog,
    reference: &WorkoutReferenceSet,
    config: &RecommenderConfig,
    rng: &mut R,
) -> Result<Recommendation> {
    config.validate()?;

    let energy = estimate_for_profile(profile);
    let options = config.selection_options();

    let budgets = meal_budgets(energy.required, &config.meal_split);
    let mut select = |(slot, budget): (MealSlot, f64)| -> Result<MealSelection> {
        let mut meal_rng = StdRng::seed_from_u64(rng.next_u64());
        select_meal(
            catalog,
            budget,
            slot,
            profile.goal,
            profile.diet_preference,
            &options,
            &mut meal_rng,
        )
    };
    let breakfast = select(budgets[0])?;
    let lunch = select(budgets[1])?;
    let dinner = select(budgets[2])?;

    let workout = reference.match_profile(profile);

    let total_calories = breakfast.total_calories + lunch.total_calories + dinner.total_calories;

    info!(
        required = energy.required,
        total = total_calories,
        items = breakfast.len() + lunch.len() + dinner.len(),
        workout_row = workout.index,
        similarity = workout.similarity,
        "recommendation ready"
    );

    Ok(Recommendation {
        required_calories: energy.required,
        breakfast,
        lunch,
        dinner,
        total_calories,
        workout_plan: workout.plan().clone(),
    })
}

/// Like `recommend`, seeding from `config.seed` or OS entropy.
pub fn recommend_with_entropy(
    profile: &UserProfile,
    catalog: &FoodCatalog,
    reference: &WorkoutReferenceSet,
    config: &RecommenderConfig,
) -> Result<Recommendation> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    recommend(profile, catalog, reference, config, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_budgets_default_split() {
        let budgets = meal_budgets(2000.0, &MealSplit::default());
        assert_eq!(budgets[0], (MealSlot::Breakfast, 500.0));
        assert_eq!(budgets[1], (MealSlot::Lunch, 800.0));
        assert_eq!(budgets[2], (MealSlot::Dinner, 700.0));
    }

    #[test]
    fn test_meal_budgets_sum_to_requirement() {
        let budgets = meal_budgets(2687.3125, &MealSplit::default());
        let sum: f64 = budgets.iter().map(|(_, b)| b).sum();
        assert!((sum - 2687.3125).abs() < 1e-9);
    }
}
