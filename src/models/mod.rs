pub mod food;
pub mod plan;
pub mod profile;
pub mod workout;

pub use food::{DietClass, FoodItem, MealSlot};
pub use plan::{MealSelection, Recommendation, SelectedFood};
pub use profile::{DietPreference, Gender, Goal, RawProfileInput, UserProfile, body_mass_index};
pub use workout::{DAY_LABELS, WorkoutPlan, WorkoutReferenceRecord};
