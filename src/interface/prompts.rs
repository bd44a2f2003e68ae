use dialoguer::{Input, Select};

use crate::cli::ProfileArgs;
use crate::error::Result;
use crate::models::{RawProfileInput, UserProfile};
use crate::planner::constants::VEG_FLAG;

/// Return the given value, or ask for it when absent.
fn value_or_prompt(value: &Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v.clone()),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}

/// Prompt for gender.
pub fn prompt_gender() -> Result<String> {
    let options = ["Male", "Female"];
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&options)
        .default(0)
        .interact()?;
    Ok(options[selection].to_string())
}

/// Prompt for diet preference, returned as the form flag.
pub fn prompt_veg_flag() -> Result<String> {
    let options = ["Vegetarian", "Non-vegetarian"];
    let selection = Select::new()
        .with_prompt("Diet preference")
        .items(&options)
        .default(0)
        .interact()?;
    Ok(if selection == 0 {
        VEG_FLAG.to_string()
    } else {
        "1".to_string()
    })
}

/// Fill the raw form from arguments, prompting for missing required fields.
///
/// Activity and goal are never prompted; their defaults apply. The diet flag is
/// only asked for when `need_diet` is set.
pub fn collect_raw_profile(args: &ProfileArgs, need_diet: bool) -> Result<RawProfileInput> {
    let age = value_or_prompt(&args.age, "Age (years)")?;
    let weight = value_or_prompt(&args.weight, "Weight (kg)")?;
    let height = value_or_prompt(&args.height, "Height (cm)")?;

    let gender = match &args.gender {
        Some(g) => g.clone(),
        None => prompt_gender()?,
    };

    let veg_nonveg = match (&args.veg_nonveg, need_diet) {
        (Some(flag), _) => flag.clone(),
        (None, true) => prompt_veg_flag()?,
        (None, false) => String::new(),
    };

    Ok(RawProfileInput {
        age,
        weight,
        height,
        gender,
        activity: args.activity.clone(),
        veg_nonveg,
        goal: args.goal.clone(),
    })
}

/// Collect and validate a profile.
pub fn collect_profile(args: &ProfileArgs, need_diet: bool) -> Result<UserProfile> {
    let raw = collect_raw_profile(args, need_diet)?;
    UserProfile::from_raw(&raw)
}
