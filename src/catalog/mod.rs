//! Puzzle catalog
//!
//! The versioned set of daily puzzles. Loaded once at startup and read-only
//! afterwards. Bumping `version` forces every player's progress to reset.

mod embedded;
pub mod loader;

pub use embedded::DEFAULT_CATALOG;
pub use loader::{load_default, load_from_file, load_from_str};

use crate::core::{Order, OrderError};
use chrono::NaiveDate;
use rand::prelude::IndexedRandom;
use std::path::PathBuf;
use thiserror::Error;

/// Message shown on a win when the catalog carries none
pub const FALLBACK_WIN_MESSAGE: &str = "Solved!";

/// Configuration errors. All of them halt initialization.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid start_date '{0}', expected YYYY-MM-DD")]
    StartDate(String),

    #[error("catalog has no days")]
    Empty,

    #[error("day {day}: {reason}")]
    InvalidDay { day: usize, reason: String },

    #[error("day {day}: final order is not a permutation of the words: {source}")]
    FinalOrder {
        day: usize,
        #[source]
        source: OrderError,
    },

    #[error("day index {index} is outside the catalog (0..{len})")]
    DayOutOfRange { index: i64, len: usize },
}

/// One day's puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleDefinition {
    pub words: Vec<String>,
    pub final_order: Order,
    pub hints: Vec<String>,
    pub day_index: usize,
}

impl PuzzleDefinition {
    /// Number of draggable words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The solution as words
    #[must_use]
    pub fn solution(&self) -> Vec<&str> {
        self.final_order.arrange(&self.words)
    }
}

/// All daily puzzles for one catalog version
#[derive(Debug, Clone)]
pub struct Catalog {
    pub version: String,
    pub start_date: NaiveDate,
    pub days: Vec<PuzzleDefinition>,
    pub win_messages: Vec<String>,
}

impl Catalog {
    /// Puzzle for a resolved day index
    ///
    /// # Errors
    /// Returns `CatalogError::DayOutOfRange` for negative indices and indices
    /// past the last day.
    pub fn day(&self, index: i64) -> Result<&PuzzleDefinition, CatalogError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.days.get(i))
            .ok_or(CatalogError::DayOutOfRange {
                index,
                len: self.days.len(),
            })
    }

    /// Last calendar date with a puzzle
    #[must_use]
    pub fn last_date(&self) -> NaiveDate {
        self.start_date + chrono::Days::new(self.days.len() as u64)
    }

    /// Pick a win message at random
    #[must_use]
    pub fn win_message<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.win_messages
            .choose(rng)
            .map_or(FALLBACK_WIN_MESSAGE, String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog(win_messages: Vec<String>) -> Catalog {
        Catalog {
            version: "1".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            days: vec![PuzzleDefinition {
                words: vec!["b".to_string(), "a".to_string()],
                final_order: Order::new(vec![1, 0], 2).unwrap(),
                hints: vec![],
                day_index: 0,
            }],
            win_messages,
        }
    }

    #[test]
    fn day_lookup_in_range() {
        let c = catalog(vec![]);
        assert_eq!(c.day(0).unwrap().solution(), vec!["a", "b"]);
    }

    #[test]
    fn day_lookup_out_of_range() {
        let c = catalog(vec![]);
        assert!(matches!(
            c.day(1),
            Err(CatalogError::DayOutOfRange { index: 1, len: 1 })
        ));
        assert!(matches!(
            c.day(-1),
            Err(CatalogError::DayOutOfRange { index: -1, .. })
        ));
    }

    #[test]
    fn last_date_covers_every_day() {
        let c = catalog(vec![]);
        // Day 0 is played the day after the start date
        assert_eq!(c.last_date(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn win_message_falls_back() {
        let c = catalog(vec![]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(c.win_message(&mut rng), FALLBACK_WIN_MESSAGE);
    }

    #[test]
    fn win_message_comes_from_catalog() {
        let messages = vec!["Nice!".to_string(), "Wow!".to_string()];
        let c = catalog(messages.clone());
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let drawn = c.win_message(&mut rng);
            assert!(messages.iter().any(|m| m == drawn), "{drawn}");
        }
    }
}
