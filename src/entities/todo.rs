//! To-do entity - A date-scoped task on the daily list.
//!
//! Each task belongs to a single calendar day and is listed in creation
//! order. Completion is a toggleable flag; completed tasks stay on the list
//! until deleted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// To-do database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    /// Unique identifier for the task
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Task description as entered by the user
    pub title: String,
    /// Whether the task has been checked off
    pub completed: bool,
    /// Calendar day this task belongs to
    pub date: Date,
    /// Creation instant, used as the list ordering
    pub created_at: DateTime,
}

/// Tasks have no relations to other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
