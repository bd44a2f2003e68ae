use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{RecommendError, Result};
use crate::planner::constants::{DEFAULT_ACTIVITY, DEFAULT_GOAL, SUGGESTION_THRESHOLD, VEG_FLAG};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Numeric code used by the workout matcher.
    pub fn code(&self) -> f64 {
        match self {
            Gender::Male => 0.0,
            Gender::Female => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Gender {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(unknown_value("gender", s, &["Male", "Female"])),
        }
    }
}

/// Fitness goal. "Healthy" is accepted as an alias of `Maintain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    Gain,
    Lose,
    #[serde(alias = "Healthy")]
    Maintain,
}

impl Goal {
    /// Numeric code used by the workout matcher.
    pub fn code(&self) -> f64 {
        match self {
            Goal::Lose => 0.0,
            Goal::Maintain => 1.0,
            Goal::Gain => 2.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::Gain => "Gain",
            Goal::Lose => "Lose",
            Goal::Maintain => "Maintain",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Goal {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "gain" => Ok(Goal::Gain),
            "lose" => Ok(Goal::Lose),
            "maintain" | "healthy" => Ok(Goal::Maintain),
            _ => Err(unknown_value(
                "goal",
                s,
                &["Gain", "Lose", "Maintain", "Healthy"],
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietPreference {
    Veg,
    NonVeg,
}

impl DietPreference {
    /// Form flag: "0" means vegetarian, anything else non-vegetarian.
    pub fn from_flag(flag: &str) -> Self {
        if flag.trim() == VEG_FLAG {
            DietPreference::Veg
        } else {
            DietPreference::NonVeg
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietPreference::Veg => "veg",
            DietPreference::NonVeg => "non-veg",
        }
    }
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Build an `InvalidInput` error, suggesting the closest accepted spelling if any.
fn unknown_value(field: &str, input: &str, accepted: &[&str]) -> RecommendError {
    let needle = input.trim().to_lowercase();
    let suggestion = accepted
        .iter()
        .map(|a| (*a, jaro_winkler(&a.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    match suggestion {
        Some((name, _)) => RecommendError::InvalidInput(format!(
            "unknown {} '{}' (did you mean '{}'?)",
            field, input, name
        )),
        None => RecommendError::InvalidInput(format!(
            "unknown {} '{}' (expected one of: {})",
            field,
            input,
            accepted.join(", ")
        )),
    }
}

/// Validated biometric inputs for one recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
    pub activity: f64,
    pub goal: Goal,
    pub diet_preference: DietPreference,
}

/// Form fields as submitted, before parsing.
///
/// `activity` and `goal` fall back to "1.2" and "Maintain" when absent.
#[derive(Debug, Clone, Default)]
pub struct RawProfileInput {
    pub age: String,
    pub weight: String,
    pub height: String,
    pub gender: String,
    pub activity: Option<String>,
    pub veg_nonveg: String,
    pub goal: Option<String>,
}

fn parse_positive(field: &str, value: &str) -> Result<f64> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| RecommendError::InvalidInput(format!("{} must be a number, got '{}'", field, value)))?;

    if !parsed.is_finite() || parsed <= 0.0 {
        return Err(RecommendError::InvalidInput(format!(
            "{} must be positive, got {}",
            field, parsed
        )));
    }
    Ok(parsed)
}

impl UserProfile {
    /// Parse and validate raw form input.
    pub fn from_raw(raw: &RawProfileInput) -> Result<Self> {
        let age: u32 = raw.age.trim().parse().map_err(|_| {
            RecommendError::InvalidInput(format!("age must be a whole number, got '{}'", raw.age))
        })?;
        if age == 0 {
            return Err(RecommendError::InvalidInput("age must be positive".to_string()));
        }

        let weight_kg = parse_positive("weight", &raw.weight)?;
        let height_cm = parse_positive("height", &raw.height)?;
        let activity = parse_positive("activity", raw.activity.as_deref().unwrap_or(DEFAULT_ACTIVITY))?;
        let gender: Gender = raw.gender.parse()?;
        let goal: Goal = raw.goal.as_deref().unwrap_or(DEFAULT_GOAL).parse()?;
        let diet_preference = DietPreference::from_flag(&raw.veg_nonveg);

        Ok(Self {
            age,
            weight_kg,
            height_cm,
            gender,
            activity,
            goal,
            diet_preference,
        })
    }

    /// Body-mass index from weight (kg) and height (cm).
    pub fn bmi(&self) -> f64 {
        body_mass_index(self.weight_kg, self.height_cm)
    }
}

/// BMI = weight / (height in meters)^2.
#[inline]
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawProfileInput {
        RawProfileInput {
            age: "25".to_string(),
            weight: "70".to_string(),
            height: "175".to_string(),
            gender: "Male".to_string(),
            activity: None,
            veg_nonveg: "1".to_string(),
            goal: None,
        }
    }

    #[test]
    fn test_from_raw_applies_defaults() {
        let profile = UserProfile::from_raw(&raw()).unwrap();
        assert_eq!(profile.age, 25);
        assert!((profile.activity - 1.2).abs() < 1e-12);
        assert_eq!(profile.goal, Goal::Maintain);
        assert_eq!(profile.diet_preference, DietPreference::NonVeg);
    }

    #[test]
    fn test_veg_flag() {
        assert_eq!(DietPreference::from_flag("0"), DietPreference::Veg);
        assert_eq!(DietPreference::from_flag(" 0 "), DietPreference::Veg);
        assert_eq!(DietPreference::from_flag("1"), DietPreference::NonVeg);
        assert_eq!(DietPreference::from_flag(""), DietPreference::NonVeg);
    }

    #[test]
    fn test_healthy_is_maintain() {
        assert_eq!("Healthy".parse::<Goal>().unwrap(), Goal::Maintain);
        assert_eq!("maintain".parse::<Goal>().unwrap(), Goal::Maintain);
    }

    #[test]
    fn test_rejects_unknown_goal_with_suggestion() {
        let err = "Gian".parse::<Goal>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("did you mean 'Gain'"), "got: {}", msg);
    }

    #[test]
    fn test_rejects_unknown_gender() {
        let mut input = raw();
        input.gender = "Other".to_string();
        assert!(matches!(
            UserProfile::from_raw(&input),
            Err(RecommendError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_numbers() {
        let mut input = raw();
        input.weight = "0".to_string();
        assert!(UserProfile::from_raw(&input).is_err());

        let mut input = raw();
        input.height = "abc".to_string();
        assert!(UserProfile::from_raw(&input).is_err());

        let mut input = raw();
        input.age = "25.5".to_string();
        assert!(UserProfile::from_raw(&input).is_err());
    }

    #[test]
    fn test_bmi() {
        let profile = UserProfile::from_raw(&raw()).unwrap();
        assert!((profile.bmi() - 70.0 / (1.75 * 1.75)).abs() < 1e-9);
    }
}
