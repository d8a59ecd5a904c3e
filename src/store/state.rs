//! Persisted session state

use crate::core::{EventKind, Order, parse_date_key};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry of the play history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorDay {
    /// Stored `month/day/year` key
    pub date: String,
    pub solved: bool,
}

impl PriorDay {
    #[must_use]
    pub fn new(date: impl Into<String>, solved: bool) -> Self {
        Self {
            date: date.into(),
            solved,
        }
    }

    /// Calendar date of this entry, if the stored key parses
    #[must_use]
    pub fn day(&self) -> Option<NaiveDate> {
        parse_date_key(&self.date)
    }
}

/// Everything the store remembers about the current day and the history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub last_played: Option<NaiveDate>,
    pub stored_version: Option<String>,
    pub current_order: Option<Order>,
    pub tries: u32,
    pub drags: u32,
    pub hint_level: u32,
    pub solved: bool,
    pub event_log: Vec<EventKind>,
    pub prior_days: Vec<PriorDay>,
}

/// Fields to write; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatePatch {
    pub current_order: Option<Order>,
    pub tries: Option<u32>,
    pub drags: Option<u32>,
    pub hint_level: Option<u32>,
    pub solved: Option<bool>,
    pub event_log: Option<Vec<EventKind>>,
}
