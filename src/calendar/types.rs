//! Wire types for the Calendar API
//!
//! Field names follow the public API: `id`, `date`, `title`, `text`, and
//! `event_id` in the create response.

use serde::{Deserialize, Serialize};

/// A single-day calendar event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: u64,
    pub date: String,
    pub title: String,
    pub text: String,
}

/// Request body for creating an event
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    pub date: String,
    pub title: String,
    pub text: String,
}

/// Request body for updating an event; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEventRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl UpdateEventRequest {
    /// Supplied date, with empty strings treated as absent
    pub fn date(&self) -> Option<&str> {
        non_empty(self.date.as_deref())
    }

    /// Supplied title, with empty strings treated as absent
    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    /// Supplied text, with empty strings treated as absent
    pub fn text(&self) -> Option<&str> {
        non_empty(self.text.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Response body for a successful create
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub event_id: u64,
}

/// Response body carrying only a status message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

/// API error detail
#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    pub fn duplicate_date(message: impl Into<String>) -> Self {
        Self::new("DUPLICATE_DATE", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}
