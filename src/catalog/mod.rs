mod food_catalog;
mod persistence;
pub mod reference;

pub use food_catalog::FoodCatalog;
pub use persistence::{load_foods, load_workout_references};
