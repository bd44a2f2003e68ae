use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{RecommendError, Result};
use crate::models::{FoodItem, Gender, Goal, WorkoutPlan, WorkoutReferenceRecord, body_mass_index};

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Load the food catalog from a JSON array or a CSV file (chosen by extension).
///
/// Duplicate names are kept. Items with negative nutrition values are rejected.
pub fn load_foods<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let path = path.as_ref();

    let foods: Vec<FoodItem> = if is_csv(path) {
        let mut rdr = csv::Reader::from_path(path)?;
        rdr.deserialize().collect::<std::result::Result<_, _>>()?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)?
    };

    if let Some(bad) = foods.iter().find(|f| !f.is_valid()) {
        return Err(RecommendError::InvalidInput(format!(
            "food '{}' has negative nutrition values",
            bad.name
        )));
    }

    debug!(count = foods.len(), path = %path.display(), "loaded food catalog");
    Ok(foods)
}

/// One row of the workout reference table as stored on disk.
#[derive(Debug, Deserialize)]
struct ReferenceRow {
    age: f64,
    gender: String,
    height: f64,
    weight: f64,
    goal: String,
    #[serde(rename = "BMI", default)]
    bmi: Option<f64>,
    day1: String,
    day2: String,
    day3: String,
    day4: String,
    day5: String,
    day6: String,
    day7: String,
}

fn positive(line: usize, field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RecommendError::InvalidInput(format!(
            "row {}: {} must be a positive number, got {}",
            line, field, value
        )))
    }
}

impl ReferenceRow {
    fn into_record(self, line: usize) -> Result<WorkoutReferenceRecord> {
        let age = positive(line, "age", self.age)?;
        let height_cm = positive(line, "height", self.height)?;
        let weight_kg = positive(line, "weight", self.weight)?;
        let bmi = match self.bmi {
            Some(bmi) => positive(line, "BMI", bmi)?,
            None => body_mass_index(weight_kg, height_cm),
        };

        let gender: Gender = self
            .gender
            .parse()
            .map_err(|e| RecommendError::InvalidInput(format!("row {}: {}", line, e)))?;
        let goal: Goal = self
            .goal
            .parse()
            .map_err(|e| RecommendError::InvalidInput(format!("row {}: {}", line, e)))?;

        Ok(WorkoutReferenceRecord {
            age,
            gender,
            height_cm,
            weight_kg,
            goal,
            bmi,
            plan: WorkoutPlan {
                day1: self.day1,
                day2: self.day2,
                day3: self.day3,
                day4: self.day4,
                day5: self.day5,
                day6: self.day6,
                day7: self.day7,
            },
        })
    }
}

/// Load workout reference records from CSV.
///
/// Expected columns: `age,gender,height,weight,goal,BMI,day1..day7`. A missing
/// `BMI` column is derived from weight and height. Rows with an unknown gender
/// or goal are rejected.
pub fn load_workout_references<P: AsRef<Path>>(path: P) -> Result<Vec<WorkoutReferenceRecord>> {
    let path = path.as_ref();
    let mut rdr = csv::Reader::from_path(path)?;

    let mut records = Vec::new();
    for (i, row) in rdr.deserialize::<ReferenceRow>().enumerate() {
        // Header is line 1.
        records.push(row?.into_record(i + 2)?);
    }

    debug!(count = records.len(), path = %path.display(), "loaded workout references");
    Ok(records)
}
