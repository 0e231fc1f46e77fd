//! Calendar module — single-day event records
//!
//! Provides REST endpoints for creating, listing, reading, updating and
//! deleting events. Each event owns one calendar date; events live in memory
//! only.

pub mod handler;
pub mod store;
pub mod types;

pub use handler::{calendar_router, CalendarState};
pub use store::CalendarStore;
