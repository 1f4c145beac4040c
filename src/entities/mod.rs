//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod event;
pub mod grocery_override;
pub mod ingredient;
pub mod meal;
pub mod todo;

// Re-export specific types to avoid conflicts
pub use event::{Column as EventColumn, Entity as Event, Model as EventModel};
pub use grocery_override::{
    Column as GroceryOverrideColumn, Entity as GroceryOverride, Model as GroceryOverrideModel,
};
pub use ingredient::{Column as IngredientColumn, Entity as Ingredient, Model as IngredientModel};
pub use meal::{Column as MealColumn, Entity as Meal, Model as MealModel};
pub use todo::{Column as TodoColumn, Entity as Todo, Model as TodoModel};
