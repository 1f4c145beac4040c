//! Daily planner daemon.
//!
//! Keeps a live "today" overview of the planner store: it re-derives the
//! same-day event list, meal list, and summary counters whenever a change
//! feed signals, and logs the result. In-process writes arrive through the
//! push feed; the poll feed catches writes made by other processes on the
//! configured interval.

use chrono::Local;
use daily_planner::{
    config::{database, settings},
    core::overview::Overview,
    errors::Result,
    store::PlannerStore,
    watch::{ChangeFeed, Collection, PollFeed},
};
use dotenvy::dotenv;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load application settings (falls back to defaults when absent)
    let settings = settings::load_default_settings()?;
    info!(
        refresh_interval_secs = settings.refresh_interval_secs,
        "Loaded application settings"
    );

    // 4. Initialize the database
    let database_url = database::get_database_url();
    let db = database::create_connection(&database_url).await?;
    database::create_tables(&db).await?;
    info!(%database_url, "Database initialized");

    // 5. Run the overview loop until Ctrl-C
    let store = PlannerStore::new(db);
    run_overview_loop(&store, settings.refresh_interval_secs).await;

    Ok(())
}

/// Re-derives and logs today's overview on every change signal.
///
/// The push feed covers in-process mutations of the events and meals
/// collections; the poll feed is the fixed-interval fallback. Both feeds are
/// dropped on exit, which unsubscribes them.
async fn run_overview_loop(store: &PlannerStore, refresh_interval_secs: u64) {
    let mut push = store.subscribe(&[Collection::Events, Collection::Meals]);
    let mut poll = PollFeed::new(Duration::from_secs(refresh_interval_secs));
    let mut overview = Overview::new();

    loop {
        let refresh_due = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
            due = poll.changed() => due,
            due = push.changed() => due,
        };

        if !refresh_due {
            continue;
        }

        let today = Local::now().date_naive();
        match overview.refresh(store.db(), today).await {
            Ok(()) => {
                let summary = overview.summary();
                info!(
                    events = summary.events,
                    completed = summary.completed,
                    meals = summary.meals,
                    grocery_lines = summary.grocery_lines,
                    "Today's overview refreshed"
                );
            }
            // Keep the previous derived state; the failure scopes to this
            // refresh only.
            Err(e) => warn!("Failed to refresh today's overview: {e}"),
        }
    }
}
