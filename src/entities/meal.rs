//! Meal entity - Represents one planned day of meals.
//!
//! A meal row names a weekday plus free-text breakfast/lunch/dinner entries
//! and owns an ordered set of ingredients. The `day` field is a weekday label
//! ("Sunday".."Saturday") with no date component, so a meal recurs every week
//! on that weekday. Matching against the current day is exact string equality.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Meal database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meals")]
pub struct Model {
    /// Unique identifier for the meal
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Weekday label this meal applies to ("Monday", "Tuesday", ...)
    pub day: String,
    /// Free-text breakfast description
    pub breakfast: String,
    /// Free-text lunch description
    pub lunch: String,
    /// Free-text dinner description
    pub dinner: String,
}

/// Defines relationships between Meal and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One meal has many ingredients
    #[sea_orm(has_many = "super::ingredient::Entity")]
    Ingredients,
}

impl Related<super::ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
