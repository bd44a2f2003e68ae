use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// FitRecommender: daily diet and workout recommendations from biometric inputs.
#[derive(Parser, Debug)]
#[command(name = "fit_recommender")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog (JSON array or CSV).
    #[arg(long, global = true, default_value = "data/food_catalog.json")]
    pub foods: PathBuf,

    /// Path to the workout reference table (CSV).
    #[arg(long, global = true, default_value = "data/workout_reference.csv")]
    pub workouts: PathBuf,

    /// Optional JSON config (meal split, tolerance, seed, gain fallback).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible food selection (overrides the config).
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

/// Raw profile fields, as a form would submit them. Missing required fields are prompted for.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Age in whole years.
    #[arg(long)]
    pub age: Option<String>,

    /// Weight in kilograms.
    #[arg(long)]
    pub weight: Option<String>,

    /// Height in centimeters.
    #[arg(long)]
    pub height: Option<String>,

    /// Male or Female.
    #[arg(long)]
    pub gender: Option<String>,

    /// Activity multiplier (default 1.2).
    #[arg(long)]
    pub activity: Option<String>,

    /// "0" for vegetarian, anything else for non-vegetarian.
    #[arg(long)]
    pub veg_nonveg: Option<String>,

    /// Gain, Lose or Maintain (default Maintain; "Healthy" is accepted).
    #[arg(long)]
    pub goal: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend a full day of meals and a weekly workout plan.
    Recommend {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Print the result as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show BMR, TDEE and the goal-adjusted daily requirement.
    Calories {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Assemble a single meal for a calorie target.
    Diet {
        /// breakfast, lunch or dinner.
        #[arg(long)]
        slot: String,

        /// Calorie target for the meal.
        #[arg(long)]
        calories: f64,

        /// Gain, Lose or Maintain.
        #[arg(long, default_value = "Maintain")]
        goal: String,

        /// "0" for vegetarian, anything else for non-vegetarian.
        #[arg(long, default_value = "1")]
        veg_nonveg: String,

        /// Print the result as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Match the profile against the workout reference table.
    Workout {
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Recommend {
            profile: ProfileArgs::default(),
            json: false,
        }
    }
}
