//! Event business logic - Handles all calendar-event operations.
//!
//! Provides functions for creating, retrieving, updating, and deleting
//! scheduled events. All functions are async, take an explicit database
//! connection, and validate input before any store call is attempted.

use crate::{
    entities::{Event, event},
    errors::{Error, Result},
};
use chrono::NaiveDateTime;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all events ordered by start instant.
///
/// This is the ordering the scheduler view subscribes to; events with no
/// start instant sort first and are filtered out downstream by the today
/// filter.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_events(db: &DatabaseConnection) -> Result<Vec<event::Model>> {
    Event::find()
        .order_by_asc(event::Column::Start)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific event by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_event_by_id(db: &DatabaseConnection, event_id: i64) -> Result<Option<event::Model>> {
    Event::find_by_id(event_id).one(db).await.map_err(Into::into)
}

/// Creates a new event, performing input validation.
///
/// The title must be non-empty after trimming and the start instant must not
/// come after the end instant. New events start out not completed.
///
/// # Errors
/// Returns an error if:
/// - The title is empty or whitespace-only
/// - `start` is after `end`
/// - The database insert fails
pub async fn create_event(
    db: &DatabaseConnection,
    title: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<event::Model> {
    validate_event(&title, start, end)?;

    let event = event::ActiveModel {
        title: Set(title.trim().to_string()),
        start: Set(Some(start)),
        end: Set(Some(end)),
        completed: Set(false),
        ..Default::default()
    };

    event.insert(db).await.map_err(Into::into)
}

/// Updates an existing event's title and instants, performing input validation.
///
/// # Errors
/// Returns an error if:
/// - The title is empty or whitespace-only
/// - `start` is after `end`
/// - The event does not exist
/// - The database update fails
pub async fn update_event(
    db: &DatabaseConnection,
    event_id: i64,
    title: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<event::Model> {
    validate_event(&title, start, end)?;

    let existing = Event::find_by_id(event_id)
        .one(db)
        .await?
        .ok_or(Error::EventNotFound { id: event_id })?;

    let mut active: event::ActiveModel = existing.into();
    active.title = Set(title.trim().to_string());
    active.start = Set(Some(start));
    active.end = Set(Some(end));

    active.update(db).await.map_err(Into::into)
}

/// Sets the completion flag on an event.
///
/// # Errors
/// Returns an error if the event does not exist or the database update fails.
pub async fn set_event_completed(
    db: &DatabaseConnection,
    event_id: i64,
    completed: bool,
) -> Result<event::Model> {
    let existing = Event::find_by_id(event_id)
        .one(db)
        .await?
        .ok_or(Error::EventNotFound { id: event_id })?;

    let mut active: event::ActiveModel = existing.into();
    active.completed = Set(completed);

    active.update(db).await.map_err(Into::into)
}

/// Deletes an event by id. Deleting an absent id is not an error.
///
/// # Errors
/// Returns an error if the database delete fails.
pub async fn delete_event(db: &DatabaseConnection, event_id: i64) -> Result<()> {
    Event::delete_by_id(event_id).exec(db).await?;
    Ok(())
}

fn validate_event(title: &str, start: NaiveDateTime, end: NaiveDateTime) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::Validation {
            message: "Event title cannot be empty".to_string(),
        });
    }

    if start > end {
        return Err(Error::Validation {
            message: format!("Event starts at {start} but ends earlier at {end}"),
        });
    }

    Ok(())
}
