pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;

pub use config::RecommenderConfig;
pub use error::{RecommendError, Result};
pub use models::{FoodItem, MealSelection, Recommendation, UserProfile};
