use tracing::debug;

use crate::error::{RecommendError, Result};
use crate::models::{Gender, Goal, UserProfile, WorkoutPlan, WorkoutReferenceRecord, body_mass_index};

/// Number of features compared: age, gender, height, weight, goal, BMI.
pub const FEATURE_COUNT: usize = 6;

pub type FeatureVector = [f64; FEATURE_COUNT];

/// Encoded feature vector for a query profile.
pub fn query_features(age: u32, gender: Gender, height_cm: f64, weight_kg: f64, goal: Goal) -> FeatureVector {
    [
        age as f64,
        gender.code(),
        height_cm,
        weight_kg,
        goal.code(),
        body_mass_index(weight_kg, height_cm),
    ]
}

/// Zero-mean, unit-variance scaling fitted per feature.
///
/// Uses the population standard deviation; constant features get a scale of 1.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: FeatureVector,
    scale: FeatureVector,
}

impl StandardScaler {
    /// Fit on a set of rows. Returns `None` for an empty set.
    pub fn fit(rows: &[FeatureVector]) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        let n = rows.len() as f64;

        let mut mean = [0.0; FEATURE_COUNT];
        for row in rows {
            for (m, v) in mean.iter_mut().zip(row) {
                *m += v / n;
            }
        }

        let mut scale = [0.0; FEATURE_COUNT];
        for row in rows {
            for j in 0..FEATURE_COUNT {
                let d = row[j] - mean[j];
                scale[j] += d * d / n;
            }
        }
        for s in scale.iter_mut() {
            *s = s.sqrt();
            if *s < f64::EPSILON {
                *s = 1.0;
            }
        }

        Some(Self { mean, scale })
    }

    pub fn transform(&self, row: &FeatureVector) -> FeatureVector {
        let mut out = [0.0; FEATURE_COUNT];
        for j in 0..FEATURE_COUNT {
            out[j] = (row[j] - self.mean[j]) / self.scale[j];
        }
        out
    }

    pub fn scale(&self) -> &FeatureVector {
        &self.scale
    }
}

/// Cosine of the angle between two vectors; 0 when either has zero length.
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Best reference row for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutMatch<'a> {
    /// Position of the row in the reference table.
    pub index: usize,
    pub similarity: f64,
    pub record: &'a WorkoutReferenceRecord,
}

impl WorkoutMatch<'_> {
    pub fn plan(&self) -> &WorkoutPlan {
        &self.record.plan
    }
}

/// Non-empty reference table with its fitted scaler and pre-scaled rows.
#[derive(Debug, Clone)]
pub struct WorkoutReferenceSet {
    records: Vec<WorkoutReferenceRecord>,
    scaler: StandardScaler,
    scaled: Vec<FeatureVector>,
}

impl WorkoutReferenceSet {
    /// Fit the scaler over the records.
    ///
    /// Fails with `InvalidInput` when a record has a non-finite feature.
    pub fn new(records: Vec<WorkoutReferenceRecord>) -> Result<Self> {
        let features: Vec<FeatureVector> = records.iter().map(|r| r.features()).collect();
        if let Some(i) = features.iter().position(|f| f.iter().any(|v| !v.is_finite())) {
            return Err(RecommendError::InvalidInput(format!(
                "reference record {} has a non-finite feature: {:?}",
                i, features[i]
            )));
        }
        let scaler = StandardScaler::fit(&features).ok_or(RecommendError::EmptyReferenceDataset)?;
        let scaled = features.iter().map(|f| scaler.transform(f)).collect();

        Ok(Self {
            records,
            scaler,
            scaled,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most similar reference row; ties go to the earliest row.
    pub fn best_match(&self, query: &FeatureVector) -> WorkoutMatch<'_> {
        let query_scaled = self.scaler.transform(query);

        let mut best_index = 0;
        let mut best_similarity = f64::NEG_INFINITY;
        for (i, row) in self.scaled.iter().enumerate() {
            let similarity = cosine_similarity(&query_scaled, row);
            if similarity > best_similarity {
                best_index = i;
                best_similarity = similarity;
            }
        }

        debug!(
            index = best_index,
            similarity = best_similarity,
            rows = self.scaled.len(),
            "workout match"
        );

        WorkoutMatch {
            index: best_index,
            similarity: best_similarity,
            record: &self.records[best_index],
        }
    }

    /// Match a profile and return the chosen row.
    pub fn match_profile(&self, profile: &UserProfile) -> WorkoutMatch<'_> {
        let query = query_features(
            profile.age,
            profile.gender,
            profile.height_cm,
            profile.weight_kg,
            profile.goal,
        );
        self.best_match(&query)
    }
}

/// Seven-day plan of the reference row most similar to the given profile.
pub fn match_workout(
    records: &[WorkoutReferenceRecord],
    age: u32,
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
    goal: Goal,
) -> Result<WorkoutPlan> {
    let set = WorkoutReferenceSet::new(records.to_vec())?;
    let query = query_features(age, gender, height_cm, weight_kg, goal);
    Ok(set.best_match(&query).plan().clone())
}
