//! Shared test utilities for the daily planner.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test records with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    core::meal::{self, MealWithIngredients, NewIngredient},
    errors::Result,
    store::PlannerStore,
};
use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a [`PlannerStore`] over a fresh in-memory database.
pub async fn setup_test_store() -> Result<PlannerStore> {
    Ok(PlannerStore::new(setup_test_db().await?))
}

/// Parses a `YYYY-MM-DDTHH:MM` literal into a naive instant.
///
/// # Panics
/// Panics on malformed input; test fixtures are written literals.
#[must_use]
pub fn instant(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
}

/// Creates a test meal on the given weekday with the given `(name, quantity)`
/// ingredient lines. Breakfast/lunch/dinner text defaults to placeholders.
pub async fn create_test_meal(
    db: &DatabaseConnection,
    day: &str,
    ingredients: &[(&str, i64)],
) -> Result<MealWithIngredients> {
    meal::create_meal(
        db,
        day.to_string(),
        "Breakfast".to_string(),
        "Lunch".to_string(),
        "Dinner".to_string(),
        ingredients
            .iter()
            .map(|(name, quantity)| NewIngredient {
                name: (*name).to_string(),
                quantity: *quantity,
            })
            .collect(),
    )
    .await
}
