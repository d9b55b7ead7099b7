// Event DTOs (calendar event model)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user-owned, timestamped text record.
///
/// Identifiers are assigned by the store: monotonically increasing from 1,
/// never reused after deletion within a store's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    pub id: i64,
    pub user_id: i64,
    pub date: DateTime<Utc>,
    pub text: String,
}

/// The mutable field set of an event, used for both create and update.
///
/// Updates replace fields wholesale; partial update is not supported.
/// `user_id` and `text` default on deserialization so that missing JSON
/// fields surface as field-level validation errors rather than body
/// rejections, matching the service's error contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EventInput {
    #[serde(default)]
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_input_tolerates_missing_fields() {
        let input: EventInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.user_id, 0);
        assert_eq!(input.text, "");
        assert!(input.date.is_none());
    }

    #[test]
    fn event_input_parses_rfc3339_date() {
        let input: EventInput =
            serde_json::from_str(r#"{"user_id":1,"date":"2024-01-15T10:00:00Z","text":"A"}"#)
                .unwrap();
        assert_eq!(input.user_id, 1);
        assert_eq!(input.text, "A");
        let date = input.date.unwrap();
        assert_eq!(date.to_rfc3339(), "2024-01-15T10:00:00+00:00");
    }
}
