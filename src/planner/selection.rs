use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::FoodCatalog;
use crate::error::{RecommendError, Result};
use crate::models::{DietPreference, FoodItem, Goal, MealSelection, MealSlot};
use crate::planner::constants::*;
use crate::planner::quantile::quantile_of;

/// Which items the Gain fallback pass may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackScope {
    /// Diet-filtered items that are eligible for the meal being planned.
    ///
    /// `AnyMeal` lifts the slot restriction in the fallback pass.
    #[default]
    MealSlot,
    /// Every diet-filtered item, regardless of meal eligibility.
    AnyMeal,
}

/// Tunable parameters of a single meal selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionOptions {
    /// Allowed deviation around the target (kcal).
    pub tolerance: f64,
    pub gain_fallback: FallbackScope,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            gain_fallback: FallbackScope::default(),
        }
    }
}

/// Keep items whose nutrition fits the goal's percentile thresholds.
///
/// Percentiles are computed over `items` itself.
/// - Gain: calories > P50, fats > P50, proteins > P40.
/// - Lose: calories < P60, fats < P70, proteins >= P40, carbohydrates < P75, sugars < P80.
/// - Maintain: calories, fats, proteins and carbohydrates within [P20, P80], sugars < P85.
pub fn apply_goal_filter<'a>(items: &[&'a FoodItem], goal: Goal) -> Result<Vec<&'a FoodItem>> {
    if items.is_empty() {
        return Err(RecommendError::EmptyCatalog(
            "no items available for percentile filtering".to_string(),
        ));
    }

    let calories = |f: &FoodItem| f.calories;
    let fats = |f: &FoodItem| f.fats;
    let proteins = |f: &FoodItem| f.proteins;
    let carbs = |f: &FoodItem| f.carbohydrates;
    let sugars = |f: &FoodItem| f.sugars;

    let kept: Vec<&FoodItem> = match goal {
        Goal::Gain => {
            let cal_min = quantile_of(items, GAIN_CALORIES_MIN_Q, calories)?;
            let fat_min = quantile_of(items, GAIN_FATS_MIN_Q, fats)?;
            let protein_min = quantile_of(items, GAIN_PROTEINS_MIN_Q, proteins)?;

            items
                .iter()
                .copied()
                .filter(|f| f.calories > cal_min && f.fats > fat_min && f.proteins > protein_min)
                .collect()
        }
        Goal::Lose => {
            let cal_max = quantile_of(items, LOSE_CALORIES_MAX_Q, calories)?;
            let fat_max = quantile_of(items, LOSE_FATS_MAX_Q, fats)?;
            let protein_min = quantile_of(items, LOSE_PROTEINS_MIN_Q, proteins)?;
            let carb_max = quantile_of(items, LOSE_CARBS_MAX_Q, carbs)?;
            let sugar_max = quantile_of(items, LOSE_SUGARS_MAX_Q, sugars)?;

            items
                .iter()
                .copied()
                .filter(|f| {
                    f.calories < cal_max
                        && f.fats < fat_max
                        && f.proteins >= protein_min
                        && f.carbohydrates < carb_max
                        && f.sugars < sugar_max
                })
                .collect()
        }
        Goal::Maintain => {
            let band = |attr: fn(&FoodItem) -> f64| -> Result<(f64, f64)> {
                Ok((
                    quantile_of(items, MAINTAIN_BAND_LOW_Q, attr)?,
                    quantile_of(items, MAINTAIN_BAND_HIGH_Q, attr)?,
                ))
            };
            let (cal_lo, cal_hi) = band(calories)?;
            let (fat_lo, fat_hi) = band(fats)?;
            let (protein_lo, protein_hi) = band(proteins)?;
            let (carb_lo, carb_hi) = band(carbs)?;
            let sugar_max = quantile_of(items, MAINTAIN_SUGARS_MAX_Q, sugars)?;

            items
                .iter()
                .copied()
                .filter(|f| {
                    (cal_lo..=cal_hi).contains(&f.calories)
                        && (fat_lo..=fat_hi).contains(&f.fats)
                        && (protein_lo..=protein_hi).contains(&f.proteins)
                        && (carb_lo..=carb_hi).contains(&f.carbohydrates)
                        && f.sugars < sugar_max
                })
                .collect()
        }
    };

    debug!(goal = %goal, kept = kept.len(), total = items.len(), "goal quantile filter");
    Ok(kept)
}

/// Draw items uniformly at random without replacement.
///
/// A drawn item is accepted when it keeps the total at or below `upper`, and
/// is removed from the pool either way. Stops once the total reaches `lower`
/// or the pool runs out.
fn draw_without_replacement<'a, R: Rng>(
    pool: &mut Vec<&'a FoodItem>,
    chosen: &mut Vec<&'a FoodItem>,
    total: &mut f64,
    lower: f64,
    upper: f64,
    rng: &mut R,
) {
    while *total < lower && !pool.is_empty() {
        let idx = rng.gen_range(0..pool.len());
        let item = pool.swap_remove(idx);

        let accepted = *total + item.calories <= upper;
        if accepted {
            *total += item.calories;
            chosen.push(item);
        }
        debug!(
            item = %item.debug_string(),
            accepted,
            total = *total,
            remaining = pool.len(),
            "draw"
        );
    }
}

/// Assemble one meal whose calories approach `target`.
///
/// Items are restricted to the diet preference, narrowed by the goal's
/// percentile filter and the meal slot, then drawn at random while the total
/// is below `target - tolerance` without ever exceeding `target + tolerance`.
/// For `Goal::Gain`, a second pass over the diet-filtered items (without the
/// percentile filter) tries to close any remaining gap.
///
/// An under-target result is returned as-is. Fails with `EmptyCatalog` when no
/// item matches the diet preference, and with `InvalidInput` for a negative or
/// non-finite tolerance.
pub fn select_meal<R: Rng>(
    catalog: &FoodCatalog,
    target: f64,
    slot: MealSlot,
    goal: Goal,
    preference: DietPreference,
    options: &SelectionOptions,
    rng: &mut R,
) -> Result<MealSelection> {
    if !options.tolerance.is_finite() || options.tolerance < 0.0 {
        return Err(RecommendError::InvalidInput(format!(
            "tolerance must be a non-negative number, got {}",
            options.tolerance
        )));
    }

    let diet_pool = catalog.for_preference(preference);
    if diet_pool.is_empty() {
        return Err(RecommendError::EmptyCatalog(format!(
            "no {} items in a catalog of {}",
            preference,
            catalog.len()
        )));
    }

    let mut pool: Vec<&FoodItem> = apply_goal_filter(&diet_pool, goal)?
        .into_iter()
        .filter(|f| f.is_eligible_for(slot))
        .collect();

    let lower = target - options.tolerance;
    let upper = target + options.tolerance;
    let mut chosen: Vec<&FoodItem> = Vec::new();
    let mut total = 0.0;

    debug!(slot = %slot, target, pool = pool.len(), "selecting meal");
    draw_without_replacement(&mut pool, &mut chosen, &mut total, lower, upper, rng);

    if goal == Goal::Gain && total < lower {
        let mut wider: Vec<&FoodItem> = diet_pool
            .iter()
            .copied()
            .filter(|f| options.gain_fallback == FallbackScope::AnyMeal || f.is_eligible_for(slot))
            .filter(|f| !chosen.iter().any(|c| std::ptr::eq(*c, *f)))
            .collect();

        debug!(slot = %slot, gap = lower - total, pool = wider.len(), "gain fallback");
        draw_without_replacement(&mut wider, &mut chosen, &mut total, lower, upper, rng);
    }

    let mut selection = MealSelection::empty(slot, target);
    for item in chosen {
        selection.push(item);
    }

    if selection.total_calories < lower {
        warn!(
            slot = %slot,
            target,
            achieved = selection.total_calories,
            "meal is under target"
        );
    }

    Ok(selection)
}
