//! Today's overview - summary counters and last-good derived state.
//!
//! [`summarize`] is the pure counter over already-filtered collections.
//! [`Overview`] wraps it with the read cycle: each refresh re-reads the event
//! and meal collections, filters them down to the reference day, and swaps in
//! the new derived state. When a read fails the previous derived state is
//! kept untouched and the error is handed back for the caller to log; no
//! failure crosses the read boundary as a panic.
//!
//! Note the deliberate scope difference from the grocery aggregator: the
//! `grocery_lines` counter sums raw ingredient lines of *today's* meals only,
//! while the standing shopping list in `core::aggregate` spans every meal of
//! the week.

use crate::{
    core::{
        event as event_ops,
        meal::{self as meal_ops, MealWithIngredients},
        today,
    },
    entities::event,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use tracing::debug;

/// Counters shown on the home screen, recomputed on every refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodaySummary {
    /// Number of events starting today
    pub events: usize,
    /// Number of today's events marked completed
    pub completed: usize,
    /// Number of meals planned for today's weekday
    pub meals: usize,
    /// Total ingredient lines across today's meals
    pub grocery_lines: usize,
}

/// Computes the summary counters from today's filtered events and meals.
#[must_use]
pub fn summarize(today_events: &[event::Model], today_meals: &[MealWithIngredients]) -> TodaySummary {
    TodaySummary {
        events: today_events.len(),
        completed: today_events.iter().filter(|e| e.completed).count(),
        meals: today_meals.len(),
        grocery_lines: today_meals.iter().map(|m| m.ingredients.len()).sum(),
    }
}

/// Derived same-day state, retaining its last good value across failed reads.
#[derive(Debug, Default)]
pub struct Overview {
    summary: TodaySummary,
    today_events: Vec<event::Model>,
    today_meals: Vec<MealWithIngredients>,
}

impl Overview {
    /// Creates an empty overview; call [`Overview::refresh`] to populate it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently derived summary counters.
    #[must_use]
    pub const fn summary(&self) -> &TodaySummary {
        &self.summary
    }

    /// Today's events from the last successful refresh, in store order.
    #[must_use]
    pub fn today_events(&self) -> &[event::Model] {
        &self.today_events
    }

    /// Today's meals from the last successful refresh.
    #[must_use]
    pub fn today_meals(&self) -> &[MealWithIngredients] {
        &self.today_meals
    }

    /// Re-reads the event and meal collections and re-derives today's state.
    ///
    /// Both collections are read before any state is replaced, so a failure
    /// partway through leaves every previous derived value in place.
    ///
    /// # Errors
    /// Returns an error when either collection read fails; the caller is
    /// expected to log it and keep using the previous state.
    pub async fn refresh(&mut self, db: &DatabaseConnection, day: NaiveDate) -> Result<()> {
        let all_events = event_ops::get_all_events(db).await?;
        let all_meals = meal_ops::get_all_meals(db).await?;

        let malformed = all_events.iter().filter(|e| e.start.is_none()).count();
        if malformed > 0 {
            debug!(count = malformed, "Skipping events with no start instant");
        }

        let today_events = today::events_on(&all_events, day);
        let weekday = today::weekday_name(day);
        let today_meals: Vec<MealWithIngredients> = today::meals_on(&all_meals, &weekday)
            .into_iter()
            .cloned()
            .collect();

        self.summary = summarize(&today_events, &today_meals);
        self.today_events = today_events;
        self.today_meals = today_meals;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::event::create_event;
    use crate::test_utils::{create_test_meal, instant, setup_test_db};
    use chrono::NaiveDate;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_summarize_counts() {
        let events = vec![
            event::Model {
                id: 1,
                title: "Done".to_string(),
                start: Some(instant("2024-03-01T09:00")),
                end: Some(instant("2024-03-01T10:00")),
                completed: true,
            },
            event::Model {
                id: 2,
                title: "Pending".to_string(),
                start: Some(instant("2024-03-01T11:00")),
                end: Some(instant("2024-03-01T12:00")),
                completed: false,
            },
        ];

        let summary = summarize(&events, &[]);
        assert_eq!(summary.events, 2);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.meals, 0);
        assert_eq!(summary.grocery_lines, 0);
    }

    #[test]
    fn test_summarize_sums_ingredient_lines() {
        let meals = vec![
            meal_fixture("Friday", 2),
            meal_fixture("Friday", 0),
            meal_fixture("Friday", 3),
        ];

        let summary = summarize(&[], &meals);
        assert_eq!(summary.events, 0);
        assert_eq!(summary.meals, 3);
        assert_eq!(summary.grocery_lines, 5);
    }

    fn meal_fixture(day: &str, lines: usize) -> MealWithIngredients {
        MealWithIngredients {
            meal: crate::entities::meal::Model {
                id: 0,
                day: day.to_string(),
                breakfast: String::new(),
                lunch: String::new(),
                dinner: String::new(),
            },
            ingredients: (0..lines)
                .map(|i| crate::entities::ingredient::Model {
                    id: 0,
                    meal_id: 0,
                    position: i32::try_from(i).unwrap_or(i32::MAX),
                    name: format!("item {i}"),
                    quantity: 1,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_refresh_derives_todays_state() -> Result<()> {
        let db = setup_test_db().await?;

        // 2024-03-01 is a Friday
        create_event(
            &db,
            "Today".to_string(),
            instant("2024-03-01T09:00"),
            instant("2024-03-01T10:00"),
        )
        .await?;
        create_event(
            &db,
            "Tomorrow".to_string(),
            instant("2024-03-02T09:00"),
            instant("2024-03-02T10:00"),
        )
        .await?;
        create_test_meal(&db, "Friday", &[("Fish", 1), ("Lemon", 2)]).await?;
        create_test_meal(&db, "Saturday", &[("Pancakes", 1)]).await?;

        let mut overview = Overview::new();
        overview.refresh(&db, day("2024-03-01")).await?;

        let summary = overview.summary();
        assert_eq!(summary.events, 1);
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.meals, 1);
        assert_eq!(summary.grocery_lines, 2);

        assert_eq!(overview.today_events().len(), 1);
        assert_eq!(overview.today_events()[0].title, "Today");
        assert_eq!(overview.today_meals().len(), 1);
        assert_eq!(overview.today_meals()[0].meal.day, "Friday");
        Ok(())
    }

    #[tokio::test]
    async fn test_refresh_counts_completed_events() -> Result<()> {
        let db = setup_test_db().await?;

        let done = create_event(
            &db,
            "Done".to_string(),
            instant("2024-03-01T09:00"),
            instant("2024-03-01T10:00"),
        )
        .await?;
        crate::core::event::set_event_completed(&db, done.id, true).await?;

        let mut overview = Overview::new();
        overview.refresh(&db, day("2024-03-01")).await?;

        assert_eq!(overview.summary().events, 1);
        assert_eq!(overview.summary().completed, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_state() -> Result<()> {
        let db = setup_test_db().await?;

        create_event(
            &db,
            "Keep me".to_string(),
            instant("2024-03-01T09:00"),
            instant("2024-03-01T10:00"),
        )
        .await?;

        let mut overview = Overview::new();
        overview.refresh(&db, day("2024-03-01")).await?;
        assert_eq!(overview.summary().events, 1);

        // A closed connection makes the next read fail; the derived state
        // from the last good refresh must survive.
        let closed = setup_test_db().await?;
        closed.clone().close().await?;

        let result = overview.refresh(&closed, day("2024-03-01")).await;
        assert!(result.is_err());
        assert_eq!(overview.summary().events, 1);
        assert_eq!(overview.today_events().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_meal_without_ingredients_counts_zero_lines() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_meal(&db, "Friday", &[]).await?;

        let mut overview = Overview::new();
        overview.refresh(&db, day("2024-03-01")).await?;

        assert_eq!(overview.summary().meals, 1);
        assert_eq!(overview.summary().grocery_lines, 0);
        Ok(())
    }
}
