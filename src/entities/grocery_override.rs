//! Grocery override entity - A user-entered adjustment to the grocery list.
//!
//! Overrides are keyed by item name (the primary key is the item itself) and
//! take precedence over quantities derived from meal ingredients. An override
//! is never stored with a non-positive quantity; writing `quantity <= 0`
//! deletes the row instead.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Grocery override database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "grocery_overrides")]
pub struct Model {
    /// Item name, doubling as the document key
    #[sea_orm(primary_key, auto_increment = false)]
    pub item: String,
    /// Quantity that replaces any meal-derived total for this item
    pub quantity: i64,
}

/// Overrides have no relations to other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
