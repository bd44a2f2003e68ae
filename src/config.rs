use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RecommendError, Result};
use crate::models::MealSlot;
use crate::planner::constants::*;
use crate::planner::selection::{FallbackScope, SelectionOptions};

/// Share of the daily requirement assigned to each meal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealSplit {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
}

impl Default for MealSplit {
    fn default() -> Self {
        Self {
            breakfast: BREAKFAST_SHARE,
            lunch: LUNCH_SHARE,
            dinner: DINNER_SHARE,
        }
    }
}

impl MealSplit {
    pub fn share(&self, slot: MealSlot) -> f64 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }

    pub fn sum(&self) -> f64 {
        self.breakfast + self.lunch + self.dinner
    }

    /// Shares must be non-negative and add up to 1.
    pub fn validate(&self) -> Result<()> {
        if MealSlot::ALL.iter().any(|s| !(self.share(*s) >= 0.0)) {
            return Err(RecommendError::InvalidInput(format!(
                "meal split shares must be non-negative: {:?}",
                self
            )));
        }
        if (self.sum() - 1.0).abs() > SPLIT_EPSILON {
            return Err(RecommendError::InvalidInput(format!(
                "meal split must sum to 1.0, got {}",
                self.sum()
            )));
        }
        Ok(())
    }
}

/// Runtime settings for the recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    pub meal_split: MealSplit,

    /// Allowed deviation of a meal total around its target (kcal).
    pub tolerance: f64,

    /// Fixed seed for reproducible selections; entropy when absent.
    pub seed: Option<u64>,

    pub gain_fallback: FallbackScope,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            meal_split: MealSplit::default(),
            tolerance: DEFAULT_TOLERANCE,
            seed: None,
            gain_fallback: FallbackScope::default(),
        }
    }
}

impl RecommenderConfig {
    /// Load and validate a JSON config file. Missing keys take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.meal_split.validate()?;
        if !(self.tolerance >= 0.0) || !self.tolerance.is_finite() {
            return Err(RecommendError::InvalidInput(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    pub fn selection_options(&self) -> SelectionOptions {
        SelectionOptions {
            tolerance: self.tolerance,
            gain_fallback: self.gain_fallback,
        }
    }
}
