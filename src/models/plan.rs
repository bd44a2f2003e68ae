use serde::{Deserialize, Serialize};

use crate::models::food::{FoodItem, MealSlot};
use crate::models::workout::WorkoutPlan;

/// A single food chosen for a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedFood {
    /// Name of the catalog item.
    pub name: String,

    /// Calories contributed by this item.
    pub calories: f64,

    /// Serving-size label, e.g. "100 gram".
    pub quantity: String,
}

impl From<&FoodItem> for SelectedFood {
    fn from(item: &FoodItem) -> Self {
        Self {
            name: item.name.clone(),
            calories: item.calories,
            quantity: item.serving.clone(),
        }
    }
}

/// Foods chosen for one meal and their summed calories.
///
/// The total may fall short of the requested target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSelection {
    pub slot: MealSlot,
    pub target_calories: f64,
    pub foods: Vec<SelectedFood>,
    pub total_calories: f64,
}

impl MealSelection {
    pub fn empty(slot: MealSlot, target_calories: f64) -> Self {
        Self {
            slot,
            target_calories,
            foods: Vec::new(),
            total_calories: 0.0,
        }
    }

    pub fn push(&mut self, item: &FoodItem) {
        self.total_calories += item.calories;
        self.foods.push(SelectedFood::from(item));
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

/// Full diet and workout recommendation for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub required_calories: f64,
    pub breakfast: MealSelection,
    pub lunch: MealSelection,
    pub dinner: MealSelection,
    pub total_calories: f64,
    pub workout_plan: WorkoutPlan,
}

impl Recommendation {
    /// The three meals in serving order.
    pub fn meals(&self) -> [&MealSelection; 3] {
        [&self.breakfast, &self.lunch, &self.dinner]
    }
}
