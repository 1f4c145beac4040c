//! Change notification for derived views.
//!
//! Views that display derived state need a single capability: a
//! [`ChangeFeed`] that yields a signal whenever that state should be
//! recomputed. [`PushFeed`] is the push implementation, driven by the
//! [`StoreEvents`] hub that every successful mutation publishes to;
//! [`PollFeed`] is the interval-based fallback for changes made outside the
//! process.
//!
//! Feeds hold no store state. Dropping a feed unsubscribes it, which is the
//! teardown path for views going away.

use tokio::sync::broadcast;
use tokio::time::{Duration, Interval, MissedTickBehavior, interval};

/// Capacity of the notification channel; mutations are human-paced, so a
/// small buffer is plenty and lag is treated as a change signal anyway.
const CHANNEL_CAPACITY: usize = 64;

/// The persistent collections a change notification can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Calendar events
    Events,
    /// Meals and their ingredients
    Meals,
    /// Manual grocery overrides
    ManualGroceries,
    /// To-do items
    Todos,
}

/// Broadcast hub publishing which collection changed after each successful
/// mutation.
#[derive(Debug, Clone)]
pub struct StoreEvents {
    tx: broadcast::Sender<Collection>,
}

impl StoreEvents {
    /// Creates a hub with no subscribers yet.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Publishes a change notification. A hub with no live subscribers
    /// swallows the notification; that is not an error.
    pub fn notify(&self, collection: Collection) {
        let _ = self.tx.send(collection);
    }

    /// Opens a push feed over the given collections.
    #[must_use]
    pub fn subscribe(&self, collections: &[Collection]) -> PushFeed {
        PushFeed {
            rx: self.tx.subscribe(),
            collections: collections.to_vec(),
        }
    }
}

impl Default for StoreEvents {
    fn default() -> Self {
        Self::new()
    }
}

/// A source of "re-derive now" signals.
pub trait ChangeFeed {
    /// Waits for the next change signal. Returns `false` once the feed is
    /// closed and will never signal again.
    async fn changed(&mut self) -> bool;
}

/// Push implementation: receives [`StoreEvents`] notifications, filtered to
/// the collections a view derives from.
#[derive(Debug)]
pub struct PushFeed {
    rx: broadcast::Receiver<Collection>,
    collections: Vec<Collection>,
}

impl ChangeFeed for PushFeed {
    async fn changed(&mut self) -> bool {
        loop {
            match self.rx.recv().await {
                Ok(collection) if self.collections.contains(&collection) => return true,
                Ok(_) => {}
                // Missed notifications may include a relevant one; recompute.
                Err(broadcast::error::RecvError::Lagged(_)) => return true,
                Err(broadcast::error::RecvError::Closed) => return false,
            }
        }
    }
}

/// Poll-based fallback: signals on a fixed interval whether or not anything
/// changed, for stores written to by other processes.
#[derive(Debug)]
pub struct PollFeed {
    interval: Interval,
}

impl PollFeed {
    /// Creates a feed ticking every `period`. The first tick fires
    /// immediately so a fresh view gets populated without waiting a full
    /// period.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

impl ChangeFeed for PollFeed {
    async fn changed(&mut self) -> bool {
        self.interval.tick().await;
        true
    }
}
