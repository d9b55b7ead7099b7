// EventStore trait for pluggable storage backends
//
// The in-memory implementation in `memory` is the only backend today; the
// trait keeps the service layer testable against fresh store instances and
// leaves room for a database-backed implementation later.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use agenda_contracts::Event;

use crate::error::StoreResult;

/// Storage-side input row: the mutable field set of an event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub user_id: i64,
    pub date: DateTime<Utc>,
    pub text: String,
}

/// Trait for storing and querying calendar events
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Store a new event, assigning the next sequential identifier.
    /// Always succeeds; returns the stored copy with its identifier set.
    async fn create(&self, event: NewEvent) -> StoreResult<Event>;

    /// Replace the mutable fields of a live event wholesale.
    /// Fails with `StoreError::NotFound` if `id` is not live.
    async fn update(&self, id: i64, event: NewEvent) -> StoreResult<Event>;

    /// Remove a live event permanently; its identifier is never reassigned.
    /// Fails with `StoreError::NotFound` if `id` is not live.
    async fn delete(&self, id: i64) -> StoreResult<()>;

    /// All live events whose timestamp falls on the given calendar day,
    /// ascending by full timestamp. An empty result is not an error.
    async fn events_for_day(&self, day: NaiveDate) -> StoreResult<Vec<Event>>;

    /// All live events with timestamp in `[start, end]` inclusive,
    /// ascending by full timestamp.
    async fn events_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> StoreResult<Vec<Event>>;
}
