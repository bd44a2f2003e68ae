use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecommendError;

/// Dietary class of a catalog item, stored as `veg_nonveg` (0 = vegetarian, 1 = non-vegetarian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DietClass {
    Vegetarian,
    NonVegetarian,
}

impl TryFrom<u8> for DietClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DietClass::Vegetarian),
            1 => Ok(DietClass::NonVegetarian),
            other => Err(format!("veg_nonveg must be 0 or 1, got {}", other)),
        }
    }
}

impl From<DietClass> for u8 {
    fn from(class: DietClass) -> Self {
        match class {
            DietClass::Vegetarian => 0,
            DietClass::NonVegetarian => 1,
        }
    }
}

/// One of the three daily meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MealSlot {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            other => Err(RecommendError::InvalidInput(format!(
                "unknown meal slot '{}' (expected breakfast, lunch or dinner)",
                other
            ))),
        }
    }
}

fn default_quantity() -> String {
    "100 gram".to_string()
}

/// A catalog food item with nutrition facts per serving.
///
/// Names are not unique; selection tracks items by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "item")]
    pub name: String,

    pub calories: f64,

    pub fats: f64,

    pub proteins: f64,

    pub carbohydrates: f64,

    pub sugars: f64,

    #[serde(rename = "veg_nonveg")]
    pub diet_class: DietClass,

    #[serde(rename = "quantity", default = "default_quantity")]
    pub serving: String,

    #[serde(default)]
    pub breakfast: bool,

    #[serde(default)]
    pub lunch: bool,

    #[serde(default)]
    pub dinner: bool,
}

impl FoodItem {
    /// Whether this item may be served at the given meal.
    #[inline]
    pub fn is_eligible_for(&self, slot: MealSlot) -> bool {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }

    #[inline]
    pub fn is_vegetarian(&self) -> bool {
        self.diet_class == DietClass::Vegetarian
    }

    /// Non-negative nutrition values.
    pub fn is_valid(&self) -> bool {
        self.calories >= 0.0
            && self.fats >= 0.0
            && self.proteins >= 0.0
            && self.carbohydrates >= 0.0
            && self.sugars >= 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} cal, F:{} P:{} C:{} S:{} ({})",
            self.name,
            self.calories,
            self.fats,
            self.proteins,
            self.carbohydrates,
            self.sugars,
            self.serving
        )
    }
}
