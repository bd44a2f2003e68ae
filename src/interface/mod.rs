pub mod prompts;
pub mod render;

pub use prompts::{collect_profile, collect_raw_profile, prompt_gender, prompt_veg_flag};
pub use render::{display_breakdown, display_meal, display_recommendation, display_workout_plan};
