//! To-do list business logic.
//!
//! Tasks are scoped to a single calendar day and listed in creation order.
//! Completion is a toggle; tasks stay on their day's list until deleted.

use crate::{
    entities::{Todo, todo},
    errors::{Error, Result},
};
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves the tasks for one calendar day, ordered by creation instant.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_todos_for_date(db: &DatabaseConnection, date: NaiveDate) -> Result<Vec<todo::Model>> {
    Todo::find()
        .filter(todo::Column::Date.eq(date))
        .order_by_asc(todo::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new task on the given day, performing input validation.
///
/// # Errors
/// Returns an error if:
/// - The title is empty or whitespace-only
/// - The database insert fails
pub async fn create_todo(
    db: &DatabaseConnection,
    title: String,
    date: NaiveDate,
    created_at: NaiveDateTime,
) -> Result<todo::Model> {
    if title.trim().is_empty() {
        return Err(Error::Validation {
            message: "Task title cannot be empty".to_string(),
        });
    }

    let task = todo::ActiveModel {
        title: Set(title.trim().to_string()),
        completed: Set(false),
        date: Set(date),
        created_at: Set(created_at),
        ..Default::default()
    };

    task.insert(db).await.map_err(Into::into)
}

/// Flips the completion flag on a task.
///
/// # Errors
/// Returns an error if the task does not exist or the database update fails.
pub async fn toggle_todo(db: &DatabaseConnection, todo_id: i64) -> Result<todo::Model> {
    let existing = Todo::find_by_id(todo_id)
        .one(db)
        .await?
        .ok_or(Error::TodoNotFound { id: todo_id })?;

    let completed = existing.completed;
    let mut active: todo::ActiveModel = existing.into();
    active.completed = Set(!completed);

    active.update(db).await.map_err(Into::into)
}

/// Deletes a task by id. Deleting an absent id is not an error.
///
/// # Errors
/// Returns an error if the database delete fails.
pub async fn delete_todo(db: &DatabaseConnection, todo_id: i64) -> Result<()> {
    Todo::delete_by_id(todo_id).exec(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{instant, setup_test_db};

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn test_create_and_list_in_creation_order() -> Result<()> {
        let db = setup_test_db().await?;
        let today = day("2024-03-01");

        create_todo(&db, "Second".to_string(), today, instant("2024-03-01T10:00")).await?;
        create_todo(&db, "First".to_string(), today, instant("2024-03-01T08:00")).await?;

        let titles: Vec<String> = get_todos_for_date(&db, today)
            .await?
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_one_day() -> Result<()> {
        let db = setup_test_db().await?;

        create_todo(
            &db,
            "Today".to_string(),
            day("2024-03-01"),
            instant("2024-03-01T08:00"),
        )
        .await?;
        create_todo(
            &db,
            "Tomorrow".to_string(),
            day("2024-03-02"),
            instant("2024-03-01T08:00"),
        )
        .await?;

        let tasks = get_todos_for_date(&db, day("2024-03-01")).await?;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Today");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_todo(
            &db,
            "  ".to_string(),
            day("2024-03-01"),
            instant("2024-03-01T08:00"),
        )
        .await;

        assert!(matches!(result, Err(Error::Validation { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_toggle_flips_both_ways() -> Result<()> {
        let db = setup_test_db().await?;
        let task = create_todo(
            &db,
            "Water plants".to_string(),
            day("2024-03-01"),
            instant("2024-03-01T08:00"),
        )
        .await?;

        let done = toggle_todo(&db, task.id).await?;
        assert!(done.completed);

        let undone = toggle_todo(&db, task.id).await?;
        assert!(!undone.completed);
        Ok(())
    }

    #[tokio::test]
    async fn test_toggle_missing_task() -> Result<()> {
        let db = setup_test_db().await?;

        let result = toggle_todo(&db, 13).await;
        assert!(matches!(result, Err(Error::TodoNotFound { id: 13 })));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let task = create_todo(
            &db,
            "Trash".to_string(),
            day("2024-03-01"),
            instant("2024-03-01T08:00"),
        )
        .await?;

        delete_todo(&db, task.id).await?;
        delete_todo(&db, task.id).await?;

        assert!(get_todos_for_date(&db, day("2024-03-01")).await?.is_empty());
        Ok(())
    }
}
