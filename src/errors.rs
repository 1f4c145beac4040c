//! Unified error types for the daily planner.
//!
//! All fallible operations in this crate return [`Result`], which wraps the
//! single [`Error`] enum defined here. Store-level failures (`sea_orm::DbErr`)
//! convert automatically; validation and lookup failures carry enough context
//! to report the offending input back to the caller.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or parsing failed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Input validation failed before any store call was attempted
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the rejected input
        message: String,
    },

    /// A store read or write failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// No event exists with the requested id
    #[error("Event not found: {id}")]
    EventNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// No meal exists with the requested id
    #[error("Meal not found: {id}")]
    MealNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// No to-do item exists with the requested id
    #[error("To-do item not found: {id}")]
    TodoNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// I/O failure (configuration files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable missing or malformed
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
