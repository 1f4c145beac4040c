//! Event entity - Represents a scheduled calendar event.
//!
//! Events carry a title, a start/end instant, and a completion flag. The
//! instants are stored as naive local date-times; day-level comparisons are
//! done on the date component alone. `start` and `end` are nullable at the
//! read boundary so that malformed legacy records can be skipped instead of
//! failing the whole collection read.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Event database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    /// Unique identifier for the event
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable title of the event (e.g., "Dentist", "Standup")
    pub title: String,
    /// Start instant in local time, None for malformed records
    pub start: Option<DateTime>,
    /// End instant in local time, None for malformed records
    pub end: Option<DateTime>,
    /// Whether the event has been marked as done
    pub completed: bool,
}

/// Events have no relations to other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
