//! Meal business logic - Handles all meal and ingredient operations.
//!
//! Provides functions for creating, retrieving, updating, and deleting meals
//! together with their ordered ingredient lists. A meal and its ingredients
//! are always written in one database transaction so readers never observe a
//! meal with a half-replaced ingredient set.

use crate::{
    entities::{Ingredient, Meal, ingredient, meal},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, TransactionTrait, prelude::*};

/// The weekday labels a meal's `day` field may carry, Sunday first.
pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// A meal together with its ingredients in position order.
#[derive(Debug, Clone, PartialEq)]
pub struct MealWithIngredients {
    /// The meal row
    pub meal: meal::Model,
    /// Ingredients ordered by position, possibly empty
    pub ingredients: Vec<ingredient::Model>,
}

/// An ingredient line as supplied by a caller creating or updating a meal.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIngredient {
    /// Item name, free text
    pub name: String,
    /// Quantity, must be at least 1
    pub quantity: i64,
}

/// Retrieves all meals with their ingredients, ordered by meal id.
///
/// Ingredients are returned in position order within each meal. This is the
/// snapshot consumed by both the grocery aggregator (all meals) and the today
/// filter (weekday subset).
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_meals(db: &DatabaseConnection) -> Result<Vec<MealWithIngredients>> {
    let rows = Meal::find()
        .find_with_related(Ingredient)
        .order_by_asc(meal::Column::Id)
        .order_by_asc(ingredient::Column::Position)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(meal, ingredients)| MealWithIngredients { meal, ingredients })
        .collect())
}

/// Retrieves a single meal with its ingredients by id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_meal_by_id(
    db: &DatabaseConnection,
    meal_id: i64,
) -> Result<Option<MealWithIngredients>> {
    let Some(meal) = Meal::find_by_id(meal_id).one(db).await? else {
        return Ok(None);
    };

    let ingredients = Ingredient::find()
        .filter(ingredient::Column::MealId.eq(meal_id))
        .order_by_asc(ingredient::Column::Position)
        .all(db)
        .await?;

    Ok(Some(MealWithIngredients { meal, ingredients }))
}

/// Creates a new meal with its ingredient list, performing input validation.
///
/// The `day` must be one of the weekday labels in [`WEEKDAYS`], every
/// ingredient must have a quantity of at least 1, and the meal row plus all
/// ingredient rows are inserted in a single transaction.
///
/// # Errors
/// Returns an error if:
/// - The day is not a recognized weekday label
/// - Any ingredient quantity is below 1
/// - The database insert fails
pub async fn create_meal(
    db: &DatabaseConnection,
    day: String,
    breakfast: String,
    lunch: String,
    dinner: String,
    ingredients: Vec<NewIngredient>,
) -> Result<MealWithIngredients> {
    validate_meal(&day, &ingredients)?;

    let txn = db.begin().await?;

    let meal = meal::ActiveModel {
        day: Set(day),
        breakfast: Set(breakfast),
        lunch: Set(lunch),
        dinner: Set(dinner),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let inserted = insert_ingredients(&txn, meal.id, ingredients).await?;

    txn.commit().await?;

    Ok(MealWithIngredients {
        meal,
        ingredients: inserted,
    })
}

/// Updates an existing meal, replacing its ingredient list wholesale.
///
/// The previous ingredient rows are deleted and the new list inserted inside
/// one transaction, so the replacement is atomic.
///
/// # Errors
/// Returns an error if:
/// - The meal does not exist
/// - The day is not a recognized weekday label
/// - Any ingredient quantity is below 1
/// - The database update fails
pub async fn update_meal(
    db: &DatabaseConnection,
    meal_id: i64,
    day: String,
    breakfast: String,
    lunch: String,
    dinner: String,
    ingredients: Vec<NewIngredient>,
) -> Result<MealWithIngredients> {
    validate_meal(&day, &ingredients)?;

    let existing = Meal::find_by_id(meal_id)
        .one(db)
        .await?
        .ok_or(Error::MealNotFound { id: meal_id })?;

    let txn = db.begin().await?;

    let mut active: meal::ActiveModel = existing.into();
    active.day = Set(day);
    active.breakfast = Set(breakfast);
    active.lunch = Set(lunch);
    active.dinner = Set(dinner);
    let meal = active.update(&txn).await?;

    Ingredient::delete_many()
        .filter(ingredient::Column::MealId.eq(meal_id))
        .exec(&txn)
        .await?;
    let inserted = insert_ingredients(&txn, meal_id, ingredients).await?;

    txn.commit().await?;

    Ok(MealWithIngredients {
        meal,
        ingredients: inserted,
    })
}

/// Deletes a meal and its ingredients. Deleting an absent id is not an error.
///
/// # Errors
/// Returns an error if the database delete fails.
pub async fn delete_meal(db: &DatabaseConnection, meal_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    Ingredient::delete_many()
        .filter(ingredient::Column::MealId.eq(meal_id))
        .exec(&txn)
        .await?;
    Meal::delete_by_id(meal_id).exec(&txn).await?;

    txn.commit().await?;
    Ok(())
}

fn validate_meal(day: &str, ingredients: &[NewIngredient]) -> Result<()> {
    if !WEEKDAYS.contains(&day) {
        return Err(Error::Validation {
            message: format!("'{day}' is not a weekday label"),
        });
    }

    for ing in ingredients {
        if ing.quantity < 1 {
            return Err(Error::Validation {
                message: format!(
                    "Ingredient '{}' has non-positive quantity {}",
                    ing.name, ing.quantity
                ),
            });
        }
    }

    Ok(())
}

async fn insert_ingredients<C: ConnectionTrait>(
    conn: &C,
    meal_id: i64,
    ingredients: Vec<NewIngredient>,
) -> Result<Vec<ingredient::Model>> {
    let mut inserted = Vec::with_capacity(ingredients.len());

    // Cast safety: ingredient lists are user-entered and tiny.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    for (position, ing) in ingredients.into_iter().enumerate() {
        let row = ingredient::ActiveModel {
            meal_id: Set(meal_id),
            position: Set(position as i32),
            name: Set(ing.name),
            quantity: Set(ing.quantity),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        inserted.push(row);
    }

    Ok(inserted)
}
