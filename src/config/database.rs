//! Database configuration module for the daily planner.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{Event, GroceryOverride, Ingredient, Meal, Todo};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/daily_planner.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database at the given URL.
///
/// This function handles connection errors and provides a clean interface for
/// database access throughout the application.
///
/// # Errors
/// Returns an error if the connection cannot be established.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation, ensuring the database schema matches the Rust struct definitions.
/// It creates tables for events, meals, ingredients, grocery overrides, and to-do items.
///
/// # Errors
/// Returns an error if any of the table-creation statements fail.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let event_table = schema.create_table_from_entity(Event);
    let meal_table = schema.create_table_from_entity(Meal);
    let ingredient_table = schema.create_table_from_entity(Ingredient);
    let override_table = schema.create_table_from_entity(GroceryOverride);
    let todo_table = schema.create_table_from_entity(Todo);

    db.execute(builder.build(&event_table)).await?;
    db.execute(builder.build(&meal_table)).await?;
    db.execute(builder.build(&ingredient_table)).await?;
    db.execute(builder.build(&override_table)).await?;
    db.execute(builder.build(&todo_table)).await?;

    Ok(())
}
