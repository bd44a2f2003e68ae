use serde::{Deserialize, Serialize};

use crate::models::profile::{Gender, Goal, body_mass_index};

/// Day labels of a weekly workout schedule, in order.
pub const DAY_LABELS: [&str; 7] = ["day1", "day2", "day3", "day4", "day5", "day6", "day7"];

/// A seven-day workout schedule, one free-text description per day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub day1: String,
    pub day2: String,
    pub day3: String,
    pub day4: String,
    pub day5: String,
    pub day6: String,
    pub day7: String,
}

impl WorkoutPlan {
    /// (label, description) pairs in day order.
    pub fn days(&self) -> [(&'static str, &str); 7] {
        [
            (DAY_LABELS[0], self.day1.as_str()),
            (DAY_LABELS[1], self.day2.as_str()),
            (DAY_LABELS[2], self.day3.as_str()),
            (DAY_LABELS[3], self.day4.as_str()),
            (DAY_LABELS[4], self.day5.as_str()),
            (DAY_LABELS[5], self.day6.as_str()),
            (DAY_LABELS[6], self.day7.as_str()),
        ]
    }
}

/// A historical profile with the workout schedule it followed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutReferenceRecord {
    pub age: f64,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub goal: Goal,
    pub bmi: f64,
    pub plan: WorkoutPlan,
}

impl WorkoutReferenceRecord {
    /// Build a record, deriving BMI from weight and height.
    pub fn new(
        age: f64,
        gender: Gender,
        height_cm: f64,
        weight_kg: f64,
        goal: Goal,
        plan: WorkoutPlan,
    ) -> Self {
        Self {
            age,
            gender,
            height_cm,
            weight_kg,
            goal,
            bmi: body_mass_index(weight_kg, height_cm),
            plan,
        }
    }

    /// Encoded feature vector: [age, gender, height, weight, goal, BMI].
    pub fn features(&self) -> [f64; 6] {
        [
            self.age,
            self.gender.code(),
            self.height_cm,
            self.weight_kg,
            self.goal.code(),
            self.bmi,
        ]
    }
}
