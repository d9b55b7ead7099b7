// Event HTTP routes
//
// Route table preserved from the service's public contract:
// POST /create_event, /update_event/{id}, /delete_event/{id} and
// GET /events_for_day|week|month?date=YYYY-MM-DD&user_id=N.
//
// The week/month boundaries are computed here and handed to the service as
// explicit start/end instants; per-user filtering also happens here, after
// the range query (the store's query contract is user-agnostic).

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use agenda_contracts::{Event, EventError, EventInput};
use agenda_storage::EventStore;

use crate::error::ApiError;
use crate::services::EventService;

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self {
            service: Arc::new(EventService::new(store)),
        }
    }
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/create_event", post(create_event))
        .route("/update_event/{id}", post(update_event))
        .route("/delete_event/{id}", post(delete_event))
        .route("/events_for_day", get(events_for_day))
        .route("/events_for_week", get(events_for_week))
        .route("/events_for_month", get(events_for_month))
        .with_state(state)
}

/// Query parameters for the day/week/month listings.
/// Both fields arrive as raw strings so that presence and format failures
/// surface as field-level validation errors.
#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    pub date: Option<String>,
    pub user_id: Option<String>,
}

/// Response body for delete
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// POST /create_event - Create a new event
#[utoipa::path(
    post,
    path = "/create_event",
    request_body = EventInput,
    responses(
        (status = 201, description = "Event created successfully", body = Event),
        (status = 400, description = "Validation error", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<EventInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let Json(input) = payload.map_err(|_| EventError::validation("body", "invalid JSON format"))?;

    let event = state.service.create_event(input).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// POST /update_event/{id} - Replace an event's fields
#[utoipa::path(
    post,
    path = "/update_event/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    request_body = EventInput,
    responses(
        (status = 200, description = "Event updated successfully", body = Event),
        (status = 400, description = "Validation error", body = crate::error::ErrorResponse),
        (status = 503, description = "Event not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    ),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EventInput>, JsonRejection>,
) -> Result<Json<Event>, ApiError> {
    let id = parse_event_id(&id)?;
    let Json(input) = payload.map_err(|_| EventError::validation("body", "invalid JSON format"))?;

    let event = state.service.update_event(id, input).await?;
    Ok(Json(event))
}

/// POST /delete_event/{id} - Delete an event
#[utoipa::path(
    post,
    path = "/delete_event/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event deleted successfully", body = StatusResponse),
        (status = 400, description = "Validation error", body = crate::error::ErrorResponse),
        (status = 503, description = "Event not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let id = parse_event_id(&id)?;

    state.service.delete_event(id).await?;
    Ok(Json(StatusResponse { status: "deleted" }))
}

/// GET /events_for_day - Events on the given calendar day for a user
#[utoipa::path(
    get,
    path = "/events_for_day",
    params(
        ("date" = String, Query, description = "Calendar day (YYYY-MM-DD)"),
        ("user_id" = i64, Query, description = "Owning user ID")
    ),
    responses(
        (status = 200, description = "Events for the day", body = Vec<Event>),
        (status = 400, description = "Validation error", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    ),
    tag = "events"
)]
pub async fn events_for_day(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let (day, user_id) = parse_events_query(&query)?;

    let events = state.service.events_for_day(day).await?;
    Ok(Json(filter_by_user(events, user_id)))
}

/// GET /events_for_week - Events in the week containing the given day
#[utoipa::path(
    get,
    path = "/events_for_week",
    params(
        ("date" = String, Query, description = "Any day of the week (YYYY-MM-DD)"),
        ("user_id" = i64, Query, description = "Owning user ID")
    ),
    responses(
        (status = 200, description = "Events for the week", body = Vec<Event>),
        (status = 400, description = "Validation error", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    ),
    tag = "events"
)]
pub async fn events_for_week(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let (day, user_id) = parse_events_query(&query)?;
    let (start, end) = week_bounds(day);

    let events = state.service.events_for_week(start, end).await?;
    Ok(Json(filter_by_user(events, user_id)))
}

/// GET /events_for_month - Events in the month containing the given day
#[utoipa::path(
    get,
    path = "/events_for_month",
    params(
        ("date" = String, Query, description = "Any day of the month (YYYY-MM-DD)"),
        ("user_id" = i64, Query, description = "Owning user ID")
    ),
    responses(
        (status = 200, description = "Events for the month", body = Vec<Event>),
        (status = 400, description = "Validation error", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    ),
    tag = "events"
)]
pub async fn events_for_month(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let (day, user_id) = parse_events_query(&query)?;
    let (start, end) = month_bounds(day);

    let events = state.service.events_for_month(start, end).await?;
    Ok(Json(filter_by_user(events, user_id)))
}

fn parse_event_id(raw: &str) -> Result<i64, EventError> {
    raw.parse()
        .map_err(|_| EventError::validation("id", "invalid event ID format"))
}

fn parse_events_query(query: &EventsQuery) -> Result<(NaiveDate, i64), EventError> {
    let (Some(date), Some(user_id)) = (&query.date, &query.user_id) else {
        return Err(EventError::validation(
            "query_params",
            "date and user_id parameters are required",
        ));
    };

    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| EventError::validation("date", "invalid date format. Use YYYY-MM-DD"))?;
    let user_id = user_id
        .parse()
        .map_err(|_| EventError::validation("user_id", "invalid user ID format"))?;

    Ok((date, user_id))
}

fn filter_by_user(events: Vec<Event>, user_id: i64) -> Vec<Event> {
    events
        .into_iter()
        .filter(|event| event.user_id == user_id)
        .collect()
}

/// Week of `day`: [Monday on/before `day` at 00:00 UTC, that Monday + 7 days]
fn week_bounds(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let monday = day - Duration::days(day.weekday().num_days_from_monday() as i64);
    let start = monday.and_time(NaiveTime::MIN).and_utc();
    (start, start + Duration::days(7))
}

/// Month of `day`: [first of month 00:00 UTC, first of next month - 1ns]
fn month_bounds(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let first = day.with_day(1).expect("day 1 exists in every month");
    let start = first.and_time(NaiveTime::MIN).and_utc();
    let next = (first + Months::new(1)).and_time(NaiveTime::MIN).and_utc();
    (start, next - Duration::nanoseconds(1))
}
