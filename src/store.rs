//! Planner store - the explicit handle bundling the database connection with
//! the change-notification hub.
//!
//! Every mutation goes through this facade: the underlying `core` operation
//! runs first, and only after the store write succeeds is a change
//! notification published. A failed write leaves both the store and every
//! derived view untouched, so there is nothing to roll back. Reads delegate
//! straight to `core` without notifying.

use crate::{
    core::{
        aggregate::GroceryList,
        event, grocery,
        meal::{self, MealWithIngredients, NewIngredient},
        todo,
    },
    errors::Result,
    watch::{Collection, PushFeed, StoreEvents},
};
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::DatabaseConnection;

/// Shared store handle for all planner operations.
#[derive(Debug, Clone)]
pub struct PlannerStore {
    db: DatabaseConnection,
    events: StoreEvents,
}

impl PlannerStore {
    /// Creates a store handle around an established connection.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            events: StoreEvents::new(),
        }
    }

    /// The underlying database connection, for read-only derivations that
    /// take the connection directly (e.g. [`crate::core::overview::Overview`]).
    #[must_use]
    pub const fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Opens a push change feed over the given collections.
    #[must_use]
    pub fn subscribe(&self, collections: &[Collection]) -> PushFeed {
        self.events.subscribe(collections)
    }

    // --- events -----------------------------------------------------------

    /// Lists all events ordered by start instant.
    ///
    /// # Errors
    /// Returns an error if the read fails.
    pub async fn list_events(&self) -> Result<Vec<crate::entities::EventModel>> {
        event::get_all_events(&self.db).await
    }

    /// Creates an event and notifies subscribers.
    ///
    /// # Errors
    /// Returns an error if validation or the write fails; no notification is
    /// published on failure.
    pub async fn create_event(
        &self,
        title: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<crate::entities::EventModel> {
        let created = event::create_event(&self.db, title, start, end).await?;
        self.events.notify(Collection::Events);
        Ok(created)
    }

    /// Updates an event and notifies subscribers.
    ///
    /// # Errors
    /// Returns an error if validation, the lookup, or the write fails.
    pub async fn update_event(
        &self,
        event_id: i64,
        title: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<crate::entities::EventModel> {
        let updated = event::update_event(&self.db, event_id, title, start, end).await?;
        self.events.notify(Collection::Events);
        Ok(updated)
    }

    /// Sets an event's completion flag and notifies subscribers.
    ///
    /// # Errors
    /// Returns an error if the lookup or the write fails.
    pub async fn set_event_completed(
        &self,
        event_id: i64,
        completed: bool,
    ) -> Result<crate::entities::EventModel> {
        let updated = event::set_event_completed(&self.db, event_id, completed).await?;
        self.events.notify(Collection::Events);
        Ok(updated)
    }

    /// Deletes an event (idempotent) and notifies subscribers.
    ///
    /// # Errors
    /// Returns an error if the write fails.
    pub async fn delete_event(&self, event_id: i64) -> Result<()> {
        event::delete_event(&self.db, event_id).await?;
        self.events.notify(Collection::Events);
        Ok(())
    }

    // --- meals ------------------------------------------------------------

    /// Lists all meals with their ingredients.
    ///
    /// # Errors
    /// Returns an error if the read fails.
    pub async fn list_meals(&self) -> Result<Vec<MealWithIngredients>> {
        meal::get_all_meals(&self.db).await
    }

    /// Creates a meal and notifies subscribers.
    ///
    /// # Errors
    /// Returns an error if validation or the write fails.
    pub async fn create_meal(
        &self,
        day: String,
        breakfast: String,
        lunch: String,
        dinner: String,
        ingredients: Vec<NewIngredient>,
    ) -> Result<MealWithIngredients> {
        let created =
            meal::create_meal(&self.db, day, breakfast, lunch, dinner, ingredients).await?;
        self.events.notify(Collection::Meals);
        Ok(created)
    }

    /// Updates a meal, replacing its ingredients, and notifies subscribers.
    ///
    /// # Errors
    /// Returns an error if validation, the lookup, or the write fails.
    pub async fn update_meal(
        &self,
        meal_id: i64,
        day: String,
        breakfast: String,
        lunch: String,
        dinner: String,
        ingredients: Vec<NewIngredient>,
    ) -> Result<MealWithIngredients> {
        let updated =
            meal::update_meal(&self.db, meal_id, day, breakfast, lunch, dinner, ingredients)
                .await?;
        self.events.notify(Collection::Meals);
        Ok(updated)
    }

    /// Deletes a meal and its ingredients (idempotent), notifying subscribers.
    ///
    /// # Errors
    /// Returns an error if the write fails.
    pub async fn delete_meal(&self, meal_id: i64) -> Result<()> {
        meal::delete_meal(&self.db, meal_id).await?;
        self.events.notify(Collection::Meals);
        Ok(())
    }

    // --- groceries --------------------------------------------------------

    /// Builds the standing grocery list: meal-derived totals with manual
    /// overrides applied.
    ///
    /// # Errors
    /// Returns an error if either collection read fails.
    pub async fn grocery_list(&self) -> Result<GroceryList> {
        let meals = meal::get_all_meals(&self.db).await?;
        let overrides = grocery::load_overrides(&self.db).await?;
        Ok(crate::core::aggregate::grocery_list(&meals, &overrides))
    }

    /// Upserts or removes a grocery override and notifies subscribers.
    ///
    /// # Errors
    /// Returns an error if validation or the write fails.
    pub async fn set_grocery_override(&self, item: &str, quantity: i64) -> Result<()> {
        grocery::set_override(&self.db, item, quantity).await?;
        self.events.notify(Collection::ManualGroceries);
        Ok(())
    }

    // --- todos ------------------------------------------------------------

    /// Lists one day's tasks in creation order.
    ///
    /// # Errors
    /// Returns an error if the read fails.
    pub async fn list_todos(&self, date: NaiveDate) -> Result<Vec<crate::entities::TodoModel>> {
        todo::get_todos_for_date(&self.db, date).await
    }

    /// Creates a task and notifies subscribers.
    ///
    /// # Errors
    /// Returns an error if validation or the write fails.
    pub async fn create_todo(
        &self,
        title: String,
        date: NaiveDate,
        created_at: NaiveDateTime,
    ) -> Result<crate::entities::TodoModel> {
        let created = todo::create_todo(&self.db, title, date, created_at).await?;
        self.events.notify(Collection::Todos);
        Ok(created)
    }

    /// Toggles a task's completion flag and notifies subscribers.
    ///
    /// # Errors
    /// Returns an error if the lookup or the write fails.
    pub async fn toggle_todo(&self, todo_id: i64) -> Result<crate::entities::TodoModel> {
        let updated = todo::toggle_todo(&self.db, todo_id).await?;
        self.events.notify(Collection::Todos);
        Ok(updated)
    }

    /// Deletes a task (idempotent) and notifies subscribers.
    ///
    /// # Errors
    /// Returns an error if the write fails.
    pub async fn delete_todo(&self, todo_id: i64) -> Result<()> {
        todo::delete_todo(&self.db, todo_id).await?;
        self.events.notify(Collection::Todos);
        Ok(())
    }
}
