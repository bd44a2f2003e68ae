use std::path::PathBuf;

use fit_recommender_rs::catalog::load_workout_references;
use fit_recommender_rs::error::RecommendError;
use fit_recommender_rs::models::{Gender, Goal, WorkoutPlan, WorkoutReferenceRecord};
use fit_recommender_rs::planner::{WorkoutReferenceSet, match_workout, query_features};

fn plan(prefix: &str) -> WorkoutPlan {
    WorkoutPlan {
        day1: format!("{} A", prefix),
        day2: format!("{} B", prefix),
        day3: format!("{} C", prefix),
        day4: format!("{} D", prefix),
        day5: format!("{} E", prefix),
        day6: format!("{} F", prefix),
        day7: format!("{} G", prefix),
    }
}

fn reference_records() -> Vec<WorkoutReferenceRecord> {
    vec![
        WorkoutReferenceRecord::new(22.0, Gender::Male, 178.0, 62.0, Goal::Gain, plan("lean gain")),
        WorkoutReferenceRecord::new(25.0, Gender::Male, 175.0, 70.0, Goal::Maintain, plan("maintain")),
        WorkoutReferenceRecord::new(45.0, Gender::Male, 170.0, 88.0, Goal::Lose, plan("cut")),
        WorkoutReferenceRecord::new(27.0, Gender::Female, 165.0, 58.0, Goal::Maintain, plan("tone")),
        WorkoutReferenceRecord::new(50.0, Gender::Female, 162.0, 80.0, Goal::Lose, plan("low impact")),
        WorkoutReferenceRecord::new(29.0, Gender::Female, 168.0, 60.0, Goal::Gain, plan("build")),
    ]
}

fn data_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

#[test]
fn test_exact_row_matches_itself() {
    let records = reference_records();
    let set = WorkoutReferenceSet::new(records.clone()).unwrap();

    for (i, record) in records.iter().enumerate() {
        let query = query_features(
            record.age as u32,
            record.gender,
            record.height_cm,
            record.weight_kg,
            record.goal,
        );
        let m = set.best_match(&query);
        assert_eq!(m.index, i);
        assert!((m.similarity - 1.0).abs() < 1e-9, "similarity {}", m.similarity);
        assert_eq!(m.plan(), &record.plan);
    }
}

#[test]
fn test_match_workout_returns_plan_verbatim() {
    let records = reference_records();
    let plan = match_workout(&records, 46, Gender::Male, 171.0, 90.0, Goal::Lose).unwrap();
    assert_eq!(plan, records[2].plan);
    assert_eq!(plan.days()[0], ("day1", "cut A"));
}

#[test]
fn test_empty_dataset() {
    let result = match_workout(&[], 30, Gender::Female, 160.0, 55.0, Goal::Maintain);
    assert!(matches!(result, Err(RecommendError::EmptyReferenceDataset)));
}

#[test]
fn test_bundled_reference_table() {
    let records = load_workout_references(data_path("workout_reference.csv")).unwrap();
    assert!(!records.is_empty());

    let set = WorkoutReferenceSet::new(records).unwrap();
    let m = set.best_match(&query_features(26, Gender::Male, 176.0, 71.0, Goal::Maintain));
    assert!(m.similarity > 0.9);
    assert_eq!(m.record.goal, Goal::Maintain);
    assert_eq!(m.record.gender, Gender::Male);
}
