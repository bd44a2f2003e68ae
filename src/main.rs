use std::path::Path;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use fit_recommender_rs::catalog::{self, FoodCatalog, load_foods};
use fit_recommender_rs::cli::{Cli, Command, ProfileArgs};
use fit_recommender_rs::config::RecommenderConfig;
use fit_recommender_rs::error::Result;
use fit_recommender_rs::interface::{
    collect_profile, display_breakdown, display_meal, display_recommendation, display_workout_plan,
};
use fit_recommender_rs::logging;
use fit_recommender_rs::models::{DietPreference, Goal, MealSlot};
use fit_recommender_rs::planner::{estimate_for_profile, recommend_with_entropy, select_meal};

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RecommenderConfig::load(path)?,
        None => RecommenderConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Recommend { profile, json } => {
            cmd_recommend(&cli.foods, &cli.workouts, &profile, &config, json)
        }
        Command::Calories { profile } => cmd_calories(&profile),
        Command::Diet {
            slot,
            calories,
            goal,
            veg_nonveg,
            json,
        } => cmd_diet(&cli.foods, &slot, calories, &goal, &veg_nonveg, &config, json),
        Command::Workout { profile } => cmd_workout(&cli.workouts, &profile),
    }
}

fn make_rng(config: &RecommenderConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generate a full diet and workout recommendation.
fn cmd_recommend(
    foods_path: &Path,
    workouts_path: &Path,
    args: &ProfileArgs,
    config: &RecommenderConfig,
    json: bool,
) -> Result<()> {
    let profile = collect_profile(args, true)?;

    let foods = FoodCatalog::new(load_foods(foods_path)?);
    let reference = catalog::reference::global(workouts_path)?;

    let rec = recommend_with_entropy(&profile, &foods, reference, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rec)?);
    } else {
        display_recommendation(&rec);
    }
    Ok(())
}

/// Show the energy estimate for a profile.
fn cmd_calories(args: &ProfileArgs) -> Result<()> {
    let profile = collect_profile(args, false)?;
    let breakdown = estimate_for_profile(&profile);
    display_breakdown(&profile, &breakdown);
    Ok(())
}

/// Assemble a single meal.
fn cmd_diet(
    foods_path: &Path,
    slot: &str,
    calories: f64,
    goal: &str,
    veg_nonveg: &str,
    config: &RecommenderConfig,
    json: bool,
) -> Result<()> {
    config.validate()?;
    let slot: MealSlot = slot.parse()?;
    let goal: Goal = goal.parse()?;
    let preference = DietPreference::from_flag(veg_nonveg);

    let foods = FoodCatalog::new(load_foods(foods_path)?);
    let mut rng = make_rng(config);
    let meal = select_meal(
        &foods,
        calories,
        slot,
        goal,
        preference,
        &config.selection_options(),
        &mut rng,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&meal)?);
    } else {
        println!();
        display_meal(&meal);
    }
    Ok(())
}

/// Match a profile to a workout plan.
fn cmd_workout(workouts_path: &Path, args: &ProfileArgs) -> Result<()> {
    let profile = collect_profile(args, false)?;
    let reference = catalog::reference::global(workouts_path)?;
    let matched = reference.match_profile(&profile);

    println!();
    println!(
        "Closest reference profile: row {} (similarity {:.3})",
        matched.index + 1,
        matched.similarity
    );
    println!();
    display_workout_plan(matched.plan());
    Ok(())
}
