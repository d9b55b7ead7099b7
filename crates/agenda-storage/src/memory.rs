// In-memory event store
//
// Authoritative holder of all live events for the lifetime of the process.
// Reinitialized empty on every process start; mutating operations take the
// write lock (writers are serialized), queries take the read lock
// (concurrent reads, excluded during writes).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;

use agenda_contracts::Event;

use crate::error::{StoreError, StoreResult};
use crate::store::{EventStore, NewEvent};

#[derive(Debug)]
struct Inner {
    events: HashMap<i64, Event>,
    next_id: i64,
}

/// In-memory event store
///
/// Events live in a HashMap keyed by identifier; identifiers are assigned
/// from a counter starting at 1 and are never reused after deletion.
/// Callers always receive independent copies of stored events.
#[derive(Debug, Clone)]
pub struct InMemoryEventStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryEventStore {
    /// Create a new, empty in-memory event store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                events: HashMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Number of live events (useful for testing)
    pub async fn len(&self) -> usize {
        self.inner.read().await.events.len()
    }

    /// Whether the store holds no live events
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.events.is_empty()
    }
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn create(&self, event: NewEvent) -> StoreResult<Event> {
        let mut inner = self.inner.write().await;

        // The counter advances even for logically-identical repeated input.
        let id = inner.next_id;
        inner.next_id += 1;

        let stored = Event {
            id,
            user_id: event.user_id,
            date: event.date,
            text: event.text,
        };
        inner.events.insert(id, stored.clone());

        Ok(stored)
    }

    async fn update(&self, id: i64, event: NewEvent) -> StoreResult<Event> {
        let mut inner = self.inner.write().await;

        if !inner.events.contains_key(&id) {
            return Err(StoreError::NotFound);
        }

        let stored = Event {
            id,
            user_id: event.user_id,
            date: event.date,
            text: event.text,
        };
        inner.events.insert(id, stored.clone());

        Ok(stored)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;

        if inner.events.remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn events_for_day(&self, day: NaiveDate) -> StoreResult<Vec<Event>> {
        let inner = self.inner.read().await;

        let mut events: Vec<Event> = inner
            .events
            .values()
            .filter(|event| event.date.date_naive() == day)
            .cloned()
            .collect();

        events.sort_by_key(|event| event.date);
        Ok(events)
    }

    async fn events_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> StoreResult<Vec<Event>> {
        let inner = self.inner.read().await;

        let mut events: Vec<Event> = inner
            .events
            .values()
            .filter(|event| event.date >= start && event.date <= end)
            .cloned()
            .collect();

        events.sort_by_key(|event| event.date);
        Ok(events)
    }
}
