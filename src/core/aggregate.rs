//! Grocery-list aggregation.
//!
//! Builds the standing weekly shopping list: ingredient quantities are summed
//! across *all* meals regardless of weekday, then manual overrides are
//! applied on top. The result is derived fresh on every call and never
//! persisted. Pure function, no I/O.

use crate::core::meal::MealWithIngredients;
use std::collections::BTreeMap;

/// Mapping from item name to aggregate quantity.
pub type GroceryList = BTreeMap<String, i64>;

/// Combines per-meal ingredient quantities with manual overrides.
///
/// Order matters and overrides win:
/// 1. Every ingredient with a non-empty name adds its quantity to the running
///    total for that name. Empty names are skipped silently.
/// 2. Each override with a positive quantity *replaces* the summed total for
///    its item; an override with quantity `<= 0` removes the item entirely.
///
/// The result therefore never contains a value `<= 0`, and is deterministic
/// for a given pair of inputs.
#[must_use]
pub fn grocery_list(meals: &[MealWithIngredients], overrides: &GroceryList) -> GroceryList {
    let mut list = GroceryList::new();

    for meal in meals {
        for ing in &meal.ingredients {
            if ing.name.is_empty() {
                continue;
            }
            *list.entry(ing.name.clone()).or_insert(0) += ing.quantity;
        }
    }

    for (item, &quantity) in overrides {
        if quantity > 0 {
            list.insert(item.clone(), quantity);
        } else {
            list.remove(item);
        }
    }

    list
}
