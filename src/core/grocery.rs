//! Manual grocery-override operations.
//!
//! Overrides are keyed by item name and take precedence over meal-derived
//! totals during aggregation. Writing a non-positive quantity is a deletion
//! request, never a stored zero, so the overrides table only ever holds
//! positive quantities.

use crate::{
    core::aggregate::GroceryList,
    entities::{GroceryOverride, grocery_override},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};

/// Loads all manual overrides as an item-to-quantity map.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn load_overrides(db: &DatabaseConnection) -> Result<GroceryList> {
    let rows = GroceryOverride::find().all(db).await?;
    Ok(rows.into_iter().map(|row| (row.item, row.quantity)).collect())
}

/// Upserts or removes a single grocery override.
///
/// A quantity `<= 0` deletes the override for `item` if present (idempotent:
/// deleting an absent row is not an error); a positive quantity creates or
/// replaces the override. Callers are expected to clamp user input to a
/// non-negative integer before calling, but any non-positive value is treated
/// as a deletion request rather than rejected.
///
/// # Errors
/// Returns an error if:
/// - The item name is empty
/// - The database write fails
pub async fn set_override(db: &DatabaseConnection, item: &str, quantity: i64) -> Result<()> {
    if item.is_empty() {
        return Err(Error::Validation {
            message: "Grocery item name cannot be empty".to_string(),
        });
    }

    if quantity <= 0 {
        GroceryOverride::delete_by_id(item).exec(db).await?;
        return Ok(());
    }

    match GroceryOverride::find_by_id(item).one(db).await? {
        Some(existing) => {
            let mut active: grocery_override::ActiveModel = existing.into();
            active.quantity = Set(quantity);
            active.update(db).await?;
        }
        None => {
            grocery_override::ActiveModel {
                item: Set(item.to_string()),
                quantity: Set(quantity),
            }
            .insert(db)
            .await?;
        }
    }

    Ok(())
}
