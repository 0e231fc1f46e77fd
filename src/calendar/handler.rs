//! HTTP handlers for the Calendar API
//!
//! Provides 5 REST endpoints:
//! - POST   /api/v1/calendar       — create event
//! - GET    /api/v1/calendar       — list events
//! - GET    /api/v1/calendar/:id   — event detail
//! - PUT    /api/v1/calendar/:id   — partial update
//! - DELETE /api/v1/calendar/:id   — delete event

use crate::calendar::store::CalendarStore;
use crate::calendar::types::*;
use crate::error::Error;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Shared state for calendar handlers
#[derive(Clone)]
pub struct CalendarState {
    pub store: Arc<CalendarStore>,
}

/// Create the calendar router with all REST endpoints
pub fn calendar_router(state: CalendarState) -> Router {
    Router::new()
        .route("/api/v1/calendar", get(list_events).post(create_event))
        .route(
            "/api/v1/calendar/:id",
            get(get_event).put(update_event).delete(delete_event),
        )
        .with_state(state)
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, ApiError::validation(msg.clone())),
            Error::DuplicateDate(_) => (
                StatusCode::BAD_REQUEST,
                ApiError::duplicate_date(self.to_string()),
            ),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, ApiError::not_found(self.to_string())),
            _ => {
                tracing::error!("Calendar request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::internal(self.to_string()),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/calendar
async fn create_event(
    State(state): State<CalendarState>,
    Json(request): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, Error> {
    let event_id = state.store.create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Event created.".to_string(),
            event_id,
        }),
    ))
}

/// GET /api/v1/calendar
async fn list_events(State(state): State<CalendarState>) -> impl IntoResponse {
    Json(state.store.list().await)
}

/// GET /api/v1/calendar/:id
async fn get_event(
    State(state): State<CalendarState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, Error> {
    Ok(Json(state.store.get(id).await?))
}

/// PUT /api/v1/calendar/:id
async fn update_event(
    State(state): State<CalendarState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, Error> {
    state.store.update(id, request).await?;
    Ok(Json(MessageResponse::new("Event updated.")))
}

/// DELETE /api/v1/calendar/:id
async fn delete_event(
    State(state): State<CalendarState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, Error> {
    state.store.delete(id).await?;
    Ok((
        StatusCode::NO_CONTENT,
        Json(MessageResponse::new("Event deleted.")),
    ))
}
