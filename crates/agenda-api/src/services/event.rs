// Event service: the single entry point enforcing business rules
//
// All validation and error classification lives here. The store only ever
// reports a generic not-found condition; this layer reclassifies it as a
// business error and wraps everything else as internal.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use agenda_contracts::{Event, EventError, EventInput, Result};
use agenda_storage::{EventStore, NewEvent, StoreError};

pub struct EventService {
    store: Arc<dyn EventStore>,
}

impl EventService {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Validates (text, then user id, then date) and stores a new event.
    pub async fn create_event(&self, input: EventInput) -> Result<Event> {
        if input.text.is_empty() {
            return Err(EventError::validation("text", "event text cannot be empty"));
        }
        if input.user_id == 0 {
            return Err(EventError::validation("user_id", "user ID is required"));
        }
        let Some(date) = input.date else {
            return Err(EventError::validation("date", "event date is required"));
        };

        self.store
            .create(NewEvent {
                user_id: input.user_id,
                date,
                text: input.text,
            })
            .await
            .map_err(|e| EventError::internal("create_event", e.to_string()))
    }

    /// Validates (id, then user id, then text) and replaces the event's
    /// fields wholesale. The date is deliberately not validated here: an
    /// absent date falls back to the minimum timestamp, which no realistic
    /// query matches.
    pub async fn update_event(&self, id: i64, input: EventInput) -> Result<Event> {
        if id == 0 {
            return Err(EventError::validation("id", "event ID is required"));
        }
        if input.user_id == 0 {
            return Err(EventError::validation("user_id", "user ID is required"));
        }
        if input.text.is_empty() {
            return Err(EventError::validation("text", "event text cannot be empty"));
        }

        let date = input.date.unwrap_or(DateTime::<Utc>::MIN_UTC);

        match self
            .store
            .update(
                id,
                NewEvent {
                    user_id: input.user_id,
                    date,
                    text: input.text,
                },
            )
            .await
        {
            Ok(event) => Ok(event),
            Err(StoreError::NotFound) => {
                Err(EventError::business("update_event", "event not found"))
            }
            Err(e) => Err(EventError::internal("update_event", e.to_string())),
        }
    }

    /// Validates the id and removes the event permanently.
    pub async fn delete_event(&self, id: i64) -> Result<()> {
        if id == 0 {
            return Err(EventError::validation("id", "event ID is required"));
        }

        match self.store.delete(id).await {
            Ok(()) => Ok(()),
            Err(StoreError::NotFound) => {
                Err(EventError::business("delete_event", "event not found"))
            }
            Err(e) => Err(EventError::internal("delete_event", e.to_string())),
        }
    }

    pub async fn events_for_day(&self, day: NaiveDate) -> Result<Vec<Event>> {
        self.store
            .events_for_day(day)
            .await
            .map_err(|e| EventError::internal("get_events_day", e.to_string()))
    }

    pub async fn events_for_week(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Event>> {
        self.store
            .events_in_range(start, end)
            .await
            .map_err(|e| EventError::internal("get_events_week", e.to_string()))
    }

    pub async fn events_for_month(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Event>> {
        self.store
            .events_in_range(start, end)
            .await
            .map_err(|e| EventError::internal("get_events_month", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_storage::InMemoryEventStore;
    use chrono::TimeZone;

    fn service() -> EventService {
        EventService::new(Arc::new(InMemoryEventStore::new()))
    }

    fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    fn input(user_id: i64, date: Option<DateTime<Utc>>, text: &str) -> EventInput {
        EventInput {
            user_id,
            date,
            text: text.to_string(),
        }
    }

    fn assert_validation(err: EventError, field: &str) {
        match err {
            EventError::Validation { field: f, .. } => assert_eq!(f, field),
            other => panic!("expected validation error on {field}, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_checks_text_before_user_id_before_date() {
        let svc = service();

        // All three invalid: text wins.
        let err = svc.create_event(input(0, None, "")).await.unwrap_err();
        assert_validation(err, "text");

        // Text valid, user id and date invalid: user_id wins.
        let err = svc.create_event(input(0, None, "A")).await.unwrap_err();
        assert_validation(err, "user_id");

        // Only the date invalid.
        let err = svc.create_event(input(1, None, "A")).await.unwrap_err();
        assert_validation(err, "date");
    }

    #[tokio::test]
    async fn create_returns_stored_event_with_id() {
        let svc = service();
        let event = svc
            .create_event(input(1, Some(at(2024, 1, 15, 10)), "A"))
            .await
            .unwrap();
        assert_eq!(event.id, 1);
        assert_eq!(event.user_id, 1);
        assert_eq!(event.text, "A");
    }

    #[tokio::test]
    async fn update_checks_id_before_user_id_before_text() {
        let svc = service();

        let err = svc.update_event(0, input(0, None, "")).await.unwrap_err();
        assert_validation(err, "id");

        let err = svc.update_event(1, input(0, None, "")).await.unwrap_err();
        assert_validation(err, "user_id");

        let err = svc.update_event(1, input(1, None, "")).await.unwrap_err();
        assert_validation(err, "text");
    }

    #[tokio::test]
    async fn update_does_not_require_a_date() {
        let svc = service();
        let created = svc
            .create_event(input(1, Some(at(2024, 1, 15, 10)), "A"))
            .await
            .unwrap();

        // No date at all: the update still succeeds.
        let updated = svc
            .update_event(created.id, input(2, None, "B"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.user_id, 2);
        assert_eq!(updated.text, "B");

        // And the event no longer matches its old day.
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert!(svc.events_for_day(day).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_missing_event_is_a_business_error() {
        let svc = service();
        let err = svc
            .update_event(42, input(1, Some(at(2024, 1, 15, 10)), "A"))
            .await
            .unwrap_err();
        assert_eq!(err, EventError::business("update_event", "event not found"));
    }

    #[tokio::test]
    async fn delete_missing_event_is_a_business_error() {
        let svc = service();
        let err = svc.delete_event(42).await.unwrap_err();
        assert_eq!(err, EventError::business("delete_event", "event not found"));
    }

    #[tokio::test]
    async fn delete_checks_id() {
        let svc = service();
        let err = svc.delete_event(0).await.unwrap_err();
        assert_validation(err, "id");
    }

    #[tokio::test]
    async fn delete_then_query_misses_the_event() {
        let svc = service();
        let created = svc
            .create_event(input(1, Some(at(2024, 1, 15, 10)), "A"))
            .await
            .unwrap();

        svc.delete_event(created.id).await.unwrap();

        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert!(svc.events_for_day(day).await.unwrap().is_empty());

        let err = svc.delete_event(created.id).await.unwrap_err();
        assert_eq!(err, EventError::business("delete_event", "event not found"));
    }

    #[tokio::test]
    async fn week_query_delegates_inclusively() {
        let svc = service();
        svc.create_event(input(1, Some(at(2024, 1, 15, 0)), "start"))
            .await
            .unwrap();
        svc.create_event(input(1, Some(at(2024, 1, 22, 0)), "end"))
            .await
            .unwrap();

        let events = svc
            .events_for_week(at(2024, 1, 15, 0), at(2024, 1, 22, 0))
            .await
            .unwrap();
        assert_eq!(events.len(), 2);
    }
}
