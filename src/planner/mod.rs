pub mod calories;
pub mod constants;
pub mod orchestrator;
pub mod quantile;
pub mod selection;
pub mod workout;

pub use calories::{
    CalorieBreakdown, bmr, estimate_breakdown, estimate_daily_calories, estimate_for_profile,
    goal_factor,
};
pub use orchestrator::{meal_budgets, recommend, recommend_with_entropy};
pub use quantile::quantile;
pub use selection::{FallbackScope, SelectionOptions, apply_goal_filter, select_meal};
pub use workout::{
    StandardScaler, WorkoutMatch, WorkoutReferenceSet, cosine_similarity, match_workout,
    query_features,
};
