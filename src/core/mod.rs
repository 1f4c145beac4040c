//! Core business logic - framework-agnostic planner operations.
//!
//! CRUD modules (`event`, `meal`, `grocery`, `todo`) are free async functions
//! over an explicit `&DatabaseConnection`; derivation modules (`today`,
//! `aggregate`, `overview`) are pure transforms over snapshots of the
//! collections and own no state between invocations.

/// Pure grocery-list aggregation with manual-override precedence
pub mod aggregate;
/// Calendar event operations
pub mod event;
/// Manual grocery-override operations
pub mod grocery;
/// Meal and ingredient operations
pub mod meal;
/// Today's summary counters and last-good overview state
pub mod overview;
/// Pure same-day filtering of events and meals
pub mod today;
/// Date-scoped to-do list operations
pub mod todo;
