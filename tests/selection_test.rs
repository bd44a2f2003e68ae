use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use fit_recommender_rs::catalog::FoodCatalog;
use fit_recommender_rs::error::RecommendError;
use fit_recommender_rs::models::{DietClass, DietPreference, FoodItem, Goal, MealSlot};
use fit_recommender_rs::planner::{SelectionOptions, select_meal};

fn make_food(name: &str, cal: f64, fats: f64, proteins: f64, class: DietClass, slots: &[MealSlot]) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        calories: cal,
        fats,
        proteins,
        carbohydrates: cal / 10.0,
        sugars: (cal / 100.0).floor(),
        diet_class: class,
        serving: "1 serving".to_string(),
        breakfast: slots.contains(&MealSlot::Breakfast),
        lunch: slots.contains(&MealSlot::Lunch),
        dinner: slots.contains(&MealSlot::Dinner),
    }
}

fn sample_catalog() -> FoodCatalog {
    use DietClass::*;
    use MealSlot::*;

    FoodCatalog::new(vec![
        make_food("Oats", 150.0, 3.0, 5.0, Vegetarian, &[Breakfast]),
        make_food("Poha", 180.0, 5.0, 3.5, Vegetarian, &[Breakfast]),
        make_food("Eggs", 155.0, 11.0, 13.0, NonVegetarian, &[Breakfast]),
        make_food("Yogurt", 97.0, 5.0, 9.0, Vegetarian, &[Breakfast, Lunch]),
        make_food("Toast", 262.0, 14.0, 9.0, Vegetarian, &[Breakfast]),
        make_food("Rice", 130.0, 0.3, 2.7, Vegetarian, &[Lunch, Dinner]),
        make_food("Chapati", 120.0, 3.7, 3.1, Vegetarian, &[Lunch, Dinner]),
        make_food("Dal", 198.0, 7.0, 9.0, Vegetarian, &[Lunch, Dinner]),
        make_food("Rajma", 210.0, 6.0, 11.0, Vegetarian, &[Lunch, Dinner]),
        make_food("Paneer", 340.0, 26.0, 14.0, Vegetarian, &[Lunch, Dinner]),
        make_food("Chicken", 290.0, 17.0, 27.0, NonVegetarian, &[Lunch, Dinner]),
        make_food("Fish", 240.0, 14.0, 22.0, NonVegetarian, &[Lunch, Dinner]),
        make_food("Biryani", 400.0, 16.0, 22.0, NonVegetarian, &[Lunch, Dinner]),
        make_food("Khichdi", 260.0, 6.0, 11.0, Vegetarian, &[Dinner]),
        make_food("Soup", 90.0, 2.0, 3.0, Vegetarian, &[Dinner]),
        make_food("Tofu", 190.0, 11.0, 15.0, Vegetarian, &[Lunch, Dinner]),
    ])
}

fn find<'a>(catalog: &'a FoodCatalog, name: &str) -> &'a FoodItem {
    catalog
        .items()
        .iter()
        .find(|f| f.name == name)
        .expect("selected item comes from the catalog")
}

#[test]
fn test_selection_invariants_across_seeds() {
    let catalog = sample_catalog();
    let options = SelectionOptions::default();

    for seed in 0..200u64 {
        for goal in [Goal::Gain, Goal::Lose, Goal::Maintain] {
            for slot in MealSlot::ALL {
                for pref in [DietPreference::Veg, DietPreference::NonVeg] {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let target = 300.0 + (seed % 7) as f64 * 100.0;
                    let meal = select_meal(&catalog, target, slot, goal, pref, &options, &mut rng)
                        .unwrap();

                    assert!(
                        meal.total_calories <= target + options.tolerance,
                        "{} kcal exceeds {} + tolerance",
                        meal.total_calories,
                        target
                    );

                    let mut seen = HashSet::new();
                    for selected in &meal.foods {
                        assert!(seen.insert(selected.name.clone()), "duplicate {}", selected.name);
                        let item = find(&catalog, &selected.name);
                        assert!(item.is_eligible_for(slot), "{} not eligible for {}", item.name, slot);
                        if pref == DietPreference::Veg {
                            assert!(item.is_vegetarian(), "{} is not vegetarian", item.name);
                        }
                    }

                    let sum: f64 = meal.foods.iter().map(|f| f.calories).sum();
                    assert!((sum - meal.total_calories).abs() < 1e-9);
                }
            }
        }
    }
}

#[test]
fn test_same_seed_same_meal() {
    let catalog = sample_catalog();
    let options = SelectionOptions::default();

    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        select_meal(
            &catalog,
            900.0,
            MealSlot::Lunch,
            Goal::Maintain,
            DietPreference::NonVeg,
            &options,
            &mut rng,
        )
        .unwrap()
    };

    assert_eq!(run(99), run(99));
}

#[test]
fn test_empty_slot_pool_is_not_an_error() {
    // Nothing is flagged for breakfast.
    let catalog = FoodCatalog::new(vec![
        make_food("Rice", 130.0, 0.3, 2.7, DietClass::Vegetarian, &[MealSlot::Lunch]),
        make_food("Dal", 198.0, 7.0, 9.0, DietClass::Vegetarian, &[MealSlot::Dinner]),
    ]);
    let mut rng = StdRng::seed_from_u64(5);

    let meal = select_meal(
        &catalog,
        500.0,
        MealSlot::Breakfast,
        Goal::Maintain,
        DietPreference::Veg,
        &SelectionOptions::default(),
        &mut rng,
    )
    .unwrap();

    assert!(meal.is_empty());
    assert_eq!(meal.total_calories, 0.0);
}

#[test]
fn test_empty_catalog_is_an_error() {
    let catalog = FoodCatalog::new(Vec::new());
    let mut rng = StdRng::seed_from_u64(5);

    let result = select_meal(
        &catalog,
        500.0,
        MealSlot::Lunch,
        Goal::Maintain,
        DietPreference::NonVeg,
        &SelectionOptions::default(),
        &mut rng,
    );
    assert!(matches!(result, Err(RecommendError::EmptyCatalog(_))));
}

#[test]
fn test_under_target_is_returned() {
    // The Gain filter rejects the only item; the fallback pass picks it up but
    // cannot reach the target.
    let catalog = FoodCatalog::new(vec![make_food(
        "Soup",
        90.0,
        2.0,
        3.0,
        DietClass::Vegetarian,
        &[MealSlot::Dinner],
    )]);
    let mut rng = StdRng::seed_from_u64(11);

    let meal = select_meal(
        &catalog,
        800.0,
        MealSlot::Dinner,
        Goal::Gain,
        DietPreference::Veg,
        &SelectionOptions::default(),
        &mut rng,
    )
    .unwrap();

    assert_eq!(meal.len(), 1);
    assert_eq!(meal.total_calories, 90.0);
}

#[test]
fn test_zero_target_selects_nothing() {
    let catalog = sample_catalog();
    let mut rng = StdRng::seed_from_u64(2);

    let meal = select_meal(
        &catalog,
        0.0,
        MealSlot::Lunch,
        Goal::Lose,
        DietPreference::NonVeg,
        &SelectionOptions::default(),
        &mut rng,
    )
    .unwrap();

    assert!(meal.is_empty());
}
