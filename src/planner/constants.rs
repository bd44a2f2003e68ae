// ─────────────────────────────────────────────────────────────────────────────
// Energy requirement (Mifflin-St Jeor)
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;

/// Sex-specific BMR offsets.
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Goal multipliers applied on top of TDEE.
pub const GAIN_FACTOR: f64 = 1.15;
pub const LOSE_FACTOR: f64 = 0.85;
pub const MAINTAIN_FACTOR: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Meal planning
// ─────────────────────────────────────────────────────────────────────────────

/// Default share of the daily requirement per meal.
pub const BREAKFAST_SHARE: f64 = 0.25;
pub const LUNCH_SHARE: f64 = 0.40;
pub const DINNER_SHARE: f64 = 0.35;

/// Allowed deviation of a meal total around its target (kcal).
pub const DEFAULT_TOLERANCE: f64 = 10.0;

/// Allowed deviation of the meal split from 1.0.
pub const SPLIT_EPSILON: f64 = 1e-9;

// ─────────────────────────────────────────────────────────────────────────────
// Goal quantile filters (fractions in [0, 1])
// ─────────────────────────────────────────────────────────────────────────────

pub const GAIN_CALORIES_MIN_Q: f64 = 0.5;
pub const GAIN_FATS_MIN_Q: f64 = 0.5;
pub const GAIN_PROTEINS_MIN_Q: f64 = 0.4;

pub const LOSE_CALORIES_MAX_Q: f64 = 0.6;
pub const LOSE_FATS_MAX_Q: f64 = 0.7;
pub const LOSE_PROTEINS_MIN_Q: f64 = 0.4;
pub const LOSE_CARBS_MAX_Q: f64 = 0.75;
pub const LOSE_SUGARS_MAX_Q: f64 = 0.8;

/// Inclusive band applied to calories, fats, proteins and carbohydrates.
pub const MAINTAIN_BAND_LOW_Q: f64 = 0.2;
pub const MAINTAIN_BAND_HIGH_Q: f64 = 0.8;
pub const MAINTAIN_SUGARS_MAX_Q: f64 = 0.85;

// ─────────────────────────────────────────────────────────────────────────────
// Form defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_ACTIVITY: &str = "1.2";
pub const DEFAULT_GOAL: &str = "Maintain";

/// Value of the `veg_nonveg` form field meaning "vegetarian".
pub const VEG_FLAG: &str = "0";

/// Minimum Jaro-Winkler score to suggest a spelling for an unknown enum value.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;
