//! Same-day filtering of events and meals.
//!
//! Pure functions: they take a snapshot of a collection plus a reference day
//! and return the matching subsequence with the original order preserved.
//! Events match on the calendar date of their start instant; meals match on
//! exact weekday-label equality, with no case or whitespace normalization.

use crate::core::meal::MealWithIngredients;
use crate::entities::event;
use chrono::NaiveDate;

/// Returns the events whose start falls on the given day, preserving order.
///
/// Events with no start instant (malformed records tolerated at the read
/// boundary) are excluded, never an error.
#[must_use]
pub fn events_on(events: &[event::Model], day: NaiveDate) -> Vec<event::Model> {
    events
        .iter()
        .filter(|e| e.start.is_some_and(|start| start.date() == day))
        .cloned()
        .collect()
}

/// Returns the meals whose `day` label equals `weekday` exactly, preserving
/// order.
#[must_use]
pub fn meals_on<'a>(
    meals: &'a [MealWithIngredients],
    weekday: &str,
) -> Vec<&'a MealWithIngredients> {
    meals.iter().filter(|m| m.meal.day == weekday).collect()
}

/// English weekday name for a date ("Sunday".."Saturday"), the form meal
/// `day` labels are matched against.
#[must_use]
pub fn weekday_name(day: NaiveDate) -> String {
    day.format("%A").to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::meal;
    use chrono::NaiveDateTime;

    fn event(id: i64, start: Option<&str>, completed: bool) -> event::Model {
        event::Model {
            id,
            title: format!("event {id}"),
            start: start.map(|s| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()),
            end: None,
            completed,
        }
    }

    fn meal_for(day: &str) -> MealWithIngredients {
        MealWithIngredients {
            meal: meal::Model {
                id: 0,
                day: day.to_string(),
                breakfast: String::new(),
                lunch: String::new(),
                dinner: String::new(),
            },
            ingredients: vec![],
        }
    }

    #[test]
    fn test_events_on_filters_by_start_date() {
        // Only the same-day event remains
        let events = vec![
            event(1, Some("2024-03-01T09:00"), true),
            event(2, Some("2024-03-02T09:00"), false),
        ];
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let today = events_on(&events, day);
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].id, 1);
    }

    #[test]
    fn test_events_on_preserves_order() {
        let events = vec![
            event(3, Some("2024-03-01T18:00"), false),
            event(1, Some("2024-03-01T09:00"), false),
            event(2, Some("2024-03-02T09:00"), false),
        ];
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let ids: Vec<i64> = events_on(&events, day).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_events_on_skips_missing_start() {
        let events = vec![event(1, None, false), event(2, Some("2024-03-01T09:00"), false)];
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let today = events_on(&events, day);
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].id, 2);
    }

    #[test]
    fn test_meals_on_exact_match_only() {
        let meals = vec![meal_for("Monday"), meal_for("monday"), meal_for("Monday ")];

        let today = meals_on(&meals, "Monday");
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].meal.day, "Monday");
    }

    #[test]
    fn test_weekday_name() {
        // 2024-03-01 was a Friday
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(weekday_name(day), "Friday");
    }
}
