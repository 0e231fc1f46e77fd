//! Calendar service - one event per day over a small REST API
//!
//! Clients create, list, fetch, update and delete events through
//! `/api/v1/calendar`. Every event is keyed by a calendar date, and at most
//! one event exists per date.
//!
//! ## Modules
//!
//! - [`calendar`]: event store and REST handlers
//! - [`api`]: application router (health probe, CORS, request tracing)
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;

pub use config::CalendarConfig;
pub use error::{Error, Result};
