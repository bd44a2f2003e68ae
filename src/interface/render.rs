use crate::models::{MealSelection, Recommendation, UserProfile, WorkoutPlan};
use crate::planner::CalorieBreakdown;

/// Display one meal as a numbered list.
pub fn display_meal(meal: &MealSelection) {
    println!(
        "--- {} (target {:.0} kcal) ---",
        capitalize(meal.slot.label()),
        meal.target_calories
    );

    if meal.is_empty() {
        println!("  (no suitable items found)");
        println!();
        return;
    }

    let max_name_len = meal.foods.iter().map(|f| f.name.len()).max().unwrap_or(10);

    for (i, food) in meal.foods.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>6.1} cal | {}",
            i + 1,
            food.name,
            food.calories,
            food.quantity,
            width = max_name_len
        );
    }
    println!("     Subtotal: {:.1} kcal", meal.total_calories);
    println!();
}

/// Display the weekly workout schedule.
pub fn display_workout_plan(plan: &WorkoutPlan) {
    println!("=== Workout Plan ===");
    println!();
    for (label, description) in plan.days() {
        println!("  {}: {}", capitalize(label), description);
    }
    println!();
}

/// Display the energy estimate.
pub fn display_breakdown(profile: &UserProfile, breakdown: &CalorieBreakdown) {
    println!();
    println!(
        "Profile: {} y, {} kg, {} cm, {}, activity x{}, goal {}",
        profile.age,
        profile.weight_kg,
        profile.height_cm,
        profile.gender,
        profile.activity,
        profile.goal
    );
    println!("BMR:               {:.2} kcal", breakdown.bmr);
    println!("TDEE:              {:.2} kcal", breakdown.tdee);
    println!("Required calories: {:.2} kcal", breakdown.required);
    println!();
}

/// Display a full recommendation.
pub fn display_recommendation(rec: &Recommendation) {
    println!();
    println!("=== Diet Plan ===");
    println!();
    println!("Required calories: {:.2} kcal", rec.required_calories);
    println!();

    for meal in rec.meals() {
        display_meal(meal);
    }

    println!("--- Summary ---");
    let items: usize = rec.meals().iter().map(|m| m.len()).sum();
    println!("Total items: {}", items);
    println!("Total calories: {:.1}", rec.total_calories);
    println!();

    display_workout_plan(&rec.workout_plan);
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
