use tracing::debug;

use crate::models::{DietPreference, FoodItem};

/// Read-only snapshot of the food catalog for one recommendation run.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    /// Items in supplier order.
    items: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Create a snapshot from a list of items.
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Items matching a predicate, in catalog order.
    pub fn filter<F>(&self, predicate: F) -> Vec<&FoodItem>
    where
        F: Fn(&FoodItem) -> bool,
    {
        self.items.iter().filter(|item| predicate(*item)).collect()
    }

    /// Items allowed by a diet preference.
    ///
    /// Vegetarian preference keeps vegetarian items only; non-vegetarian keeps everything.
    pub fn for_preference(&self, preference: DietPreference) -> Vec<&FoodItem> {
        let items = match preference {
            DietPreference::Veg => self.filter(FoodItem::is_vegetarian),
            DietPreference::NonVeg => self.items.iter().collect(),
        };
        debug!(
            preference = %preference,
            kept = items.len(),
            total = self.items.len(),
            "diet preference filter"
        );
        items
    }

    /// Count of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
