//! In-memory calendar event store
//!
//! Events are keyed by date, so at most one event exists per day. A second
//! index maps ids to dates for the id-keyed operations. Both indexes live in
//! one [`EventBook`] behind a single lock, so every check-then-act sequence
//! (date uniqueness, id assignment) runs under one write guard.

use crate::calendar::types::*;
use crate::config::LimitsConfig;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

/// Shared calendar store used by the HTTP handlers
pub struct CalendarStore {
    book: RwLock<EventBook>,
}

impl CalendarStore {
    /// Create an empty store enforcing the given field limits
    pub fn new(limits: LimitsConfig) -> Self {
        Self {
            book: RwLock::new(EventBook::new(limits)),
        }
    }

    /// Create a new event, returning its id
    pub async fn create(&self, req: CreateEventRequest) -> Result<u64> {
        self.book.write().await.create(req)
    }

    /// List all events ordered by id
    pub async fn list(&self) -> Vec<CalendarEvent> {
        self.book.read().await.list()
    }

    /// Get a single event by id
    pub async fn get(&self, id: u64) -> Result<CalendarEvent> {
        self.book.read().await.get(id)
    }

    /// Apply a partial update to an event
    pub async fn update(&self, id: u64, req: UpdateEventRequest) -> Result<()> {
        self.book.write().await.update(id, req)
    }

    /// Delete an event by id
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.book.write().await.delete(id)
    }

    /// Number of live events
    pub async fn len(&self) -> usize {
        self.book.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.book.read().await.is_empty()
    }
}

impl Default for CalendarStore {
    fn default() -> Self {
        Self::new(LimitsConfig::default())
    }
}

/// Unsynchronized event collection with date and id indexes
#[derive(Debug)]
pub struct EventBook {
    limits: LimitsConfig,
    by_date: HashMap<String, CalendarEvent>,
    dates_by_id: BTreeMap<u64, String>,
    next_id: u64,
}

impl EventBook {
    pub fn new(limits: LimitsConfig) -> Self {
        Self {
            limits,
            by_date: HashMap::new(),
            dates_by_id: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Validate and insert a new event.
    ///
    /// Length limits are checked before date uniqueness. Ids come from a
    /// monotonic counter and are never handed out twice, even after deletes.
    pub fn create(&mut self, req: CreateEventRequest) -> Result<u64> {
        if !self.title_fits(&req.title) || !self.text_fits(&req.text) {
            tracing::debug!(date = %req.date, "Rejected event with oversized fields");
            return Err(Error::Validation(format!(
                "Title must not exceed {} characters and text {} characters",
                self.limits.max_title_chars, self.limits.max_text_chars
            )));
        }
        if self.by_date.contains_key(&req.date) {
            tracing::debug!(date = %req.date, "Rejected event on a taken date");
            return Err(Error::DuplicateDate(req.date));
        }

        let id = self.next_id;
        self.next_id += 1;

        let event = CalendarEvent {
            id,
            date: req.date,
            title: req.title,
            text: req.text,
        };
        tracing::info!(id, date = %event.date, "Created calendar event");
        self.dates_by_id.insert(id, event.date.clone());
        self.by_date.insert(event.date.clone(), event);
        Ok(id)
    }

    pub fn list(&self) -> Vec<CalendarEvent> {
        self.dates_by_id
            .values()
            .filter_map(|date| self.by_date.get(date))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: u64) -> Result<CalendarEvent> {
        self.dates_by_id
            .get(&id)
            .and_then(|date| self.by_date.get(date))
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    /// Apply a partial update.
    ///
    /// A new date that belongs to a different event is rejected before any
    /// field changes. Oversized title or text values are skipped without an
    /// error, unlike [`EventBook::create`].
    pub fn update(&mut self, id: u64, req: UpdateEventRequest) -> Result<()> {
        let current_date = self
            .dates_by_id
            .get(&id)
            .cloned()
            .ok_or(Error::NotFound(id))?;

        if let Some(new_date) = req.date() {
            if new_date != current_date && self.by_date.contains_key(new_date) {
                tracing::debug!(id, date = %new_date, "Rejected move to a taken date");
                return Err(Error::DuplicateDate(new_date.to_string()));
            }
        }

        let mut event = self
            .by_date
            .remove(&current_date)
            .ok_or(Error::NotFound(id))?;

        match req.title() {
            Some(title) if self.title_fits(title) => event.title = title.to_string(),
            Some(_) => tracing::debug!(id, "Ignoring oversized title in update"),
            None => {}
        }
        match req.text() {
            Some(text) if self.text_fits(text) => event.text = text.to_string(),
            Some(_) => tracing::debug!(id, "Ignoring oversized text in update"),
            None => {}
        }
        if let Some(new_date) = req.date() {
            event.date = new_date.to_string();
        }

        tracing::info!(id, from = %current_date, to = %event.date, "Updated calendar event");
        self.dates_by_id.insert(id, event.date.clone());
        self.by_date.insert(event.date.clone(), event);
        Ok(())
    }

    pub fn delete(&mut self, id: u64) -> Result<()> {
        let date = self.dates_by_id.remove(&id).ok_or(Error::NotFound(id))?;
        self.by_date.remove(&date);
        tracing::info!(id, date = %date, "Deleted calendar event");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    fn title_fits(&self, title: &str) -> bool {
        title.chars().count() <= self.limits.max_title_chars
    }

    fn text_fits(&self, text: &str) -> bool {
        text.chars().count() <= self.limits.max_text_chars
    }
}
