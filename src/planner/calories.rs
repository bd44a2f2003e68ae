use serde::{Deserialize, Serialize};

use crate::models::{Gender, Goal, UserProfile};
use crate::planner::constants::*;

/// Intermediate values of the energy estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieBreakdown {
    pub bmr: f64,
    pub tdee: f64,
    pub required: f64,
}

/// Basal metabolic rate using the Mifflin-St Jeor equation.
///
/// Formula: 10 * weight + 6.25 * height - 5 * age + offset, where the offset
/// is +5 for men and -161 for women.
pub fn bmr(age: u32, weight_kg: f64, height_cm: f64, gender: Gender) -> f64 {
    let offset = match gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    };
    BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm - BMR_AGE_COEF * age as f64 + offset
}

/// Multiplier applied to TDEE for a goal.
pub fn goal_factor(goal: Goal) -> f64 {
    match goal {
        Goal::Gain => GAIN_FACTOR,
        Goal::Lose => LOSE_FACTOR,
        Goal::Maintain => MAINTAIN_FACTOR,
    }
}

/// BMR, TDEE and goal-adjusted requirement.
///
/// Inputs are not validated here; `UserProfile::from_raw` does that.
pub fn estimate_breakdown(
    age: u32,
    weight_kg: f64,
    height_cm: f64,
    gender: Gender,
    activity: f64,
    goal: Goal,
) -> CalorieBreakdown {
    let bmr = bmr(age, weight_kg, height_cm, gender);
    let tdee = bmr * activity;
    CalorieBreakdown {
        bmr,
        tdee,
        required: tdee * goal_factor(goal),
    }
}

/// Daily caloric requirement in kcal.
pub fn estimate_daily_calories(
    age: u32,
    weight_kg: f64,
    height_cm: f64,
    gender: Gender,
    activity: f64,
    goal: Goal,
) -> f64 {
    estimate_breakdown(age, weight_kg, height_cm, gender, activity, goal).required
}

/// Convenience wrapper over a validated profile.
pub fn estimate_for_profile(profile: &UserProfile) -> CalorieBreakdown {
    estimate_breakdown(
        profile.age,
        profile.weight_kg,
        profile.height_cm,
        profile.gender,
        profile.activity,
        profile.goal,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male() {
        // 10*70 + 6.25*175 - 5*25 + 5
        assert!((bmr(25, 70.0, 175.0, Gender::Male) - 1733.75).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_female() {
        // 10*60 + 6.25*165 - 5*30 - 161
        assert!((bmr(30, 60.0, 165.0, Gender::Female) - 1320.25).abs() < 1e-9);
    }

    #[test]
    fn test_goal_factors() {
        assert_eq!(goal_factor(Goal::Gain), 1.15);
        assert_eq!(goal_factor(Goal::Lose), 0.85);
        assert_eq!(goal_factor(Goal::Maintain), 1.0);
    }

    #[test]
    fn test_breakdown() {
        let b = estimate_breakdown(25, 70.0, 175.0, Gender::Male, 1.55, Goal::Maintain);
        assert!((b.bmr - 1733.75).abs() < 1e-9);
        assert!((b.tdee - 2687.3125).abs() < 1e-9);
        assert!((b.required - b.tdee).abs() < 1e-9);
    }
}
