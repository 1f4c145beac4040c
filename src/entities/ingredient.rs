//! Ingredient entity - One grocery line belonging to a meal.
//!
//! Ingredients are ordered within their meal by `position`. Names are free
//! text with no case normalization ("Milk" and "milk" are distinct items in
//! the derived grocery list).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ingredient database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    /// Unique identifier for the ingredient row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The meal this ingredient belongs to
    pub meal_id: i64,
    /// Zero-based order of this ingredient within its meal
    pub position: i32,
    /// Item name as entered by the user, free text
    pub name: String,
    /// Quantity needed for the owning meal, expected to be positive
    pub quantity: i64,
}

/// Defines relationships between Ingredient and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each ingredient belongs to exactly one meal
    #[sea_orm(
        belongs_to = "super::meal::Entity",
        from = "Column::MealId",
        to = "super::meal::Column::Id"
    )]
    Meal,
}

impl Related<super::meal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
