//! Session persistence
//!
//! `SessionStore` owns the persisted `SessionState` and mirrors every change
//! to a string-keyed backend. Reads never fail: values that do not decode are
//! logged and replaced by their defaults. The backend is injected, so the game
//! logic never touches ambient global storage.

pub mod codec;
mod file;
mod memory;
mod state;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use state::{PriorDay, SessionState, StatePatch};

use crate::core::{Order, date_key, decode_log, encode_log, parse_date_key};
use chrono::NaiveDate;
use codec::CodecError;
use std::path::PathBuf;
use thiserror::Error;

/// Persistence keys
pub mod keys {
    pub const VERSION: &str = "version";
    pub const LAST_DATE: &str = "lastDate";
    pub const CURRENT_ORDER: &str = "currentOrder";
    pub const HINT_LEVEL: &str = "showHint";
    pub const DRAGS: &str = "drags";
    pub const TRIES: &str = "tries";
    pub const EVENT_LOG: &str = "eventOrder";
    pub const SOLVED: &str = "solved";
    pub const PRIORS: &str = "priors";
}

/// Write failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write state file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String-keyed storage that survives restarts
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Returns `StoreError` if the value cannot be persisted.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Typed view over a backend
#[derive(Debug)]
pub struct SessionStore<S> {
    backend: S,
    state: SessionState,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Wrap a backend. Nothing is read until [`reset_if_stale`] or [`load`].
    ///
    /// [`reset_if_stale`]: Self::reset_if_stale
    /// [`load`]: Self::load
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            state: SessionState::default(),
        }
    }

    /// State as of the last load or write
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Read every persisted field, substituting defaults for missing or
    /// unreadable values
    pub fn load(&mut self) -> &SessionState {
        self.state = SessionState {
            last_played: self.read(keys::LAST_DATE, |raw| {
                parse_date_key(raw).map(Some).ok_or_else(|| CodecError {
                    expected: "date",
                    value: raw.to_string(),
                })
            }),
            stored_version: self.backend.get(keys::VERSION).filter(|v| !v.is_empty()),
            current_order: self.read(keys::CURRENT_ORDER, codec::decode_order),
            tries: self.read(keys::TRIES, codec::decode_count),
            drags: self.read(keys::DRAGS, codec::decode_count),
            hint_level: self.read(keys::HINT_LEVEL, codec::decode_count),
            solved: self.read(keys::SOLVED, codec::decode_flag),
            event_log: self
                .backend
                .get(keys::EVENT_LOG)
                .map(|raw| decode_log(&raw))
                .unwrap_or_default(),
            prior_days: self.read(keys::PRIORS, codec::decode_priors),
        };
        &self.state
    }

    fn read<T: Default>(&self, key: &str, decode: impl Fn(&str) -> Result<T, CodecError>) -> T {
        let Some(raw) = self.backend.get(key) else {
            return T::default();
        };
        decode(&raw).unwrap_or_else(|err| {
            tracing::warn!(key, %err, "discarding unreadable stored value");
            T::default()
        })
    }

    /// Wipe per-day progress when the stored day or catalog version differs
    ///
    /// Returns whether a reset happened. Run once per session start, before
    /// anything else is read.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend rejects a write.
    pub fn reset_if_stale(&mut self, version: &str, today: NaiveDate) -> Result<bool, StoreError> {
        let today_key = date_key(today);
        let stored_date = self.backend.get(keys::LAST_DATE).unwrap_or_default();
        let stored_version = self.backend.get(keys::VERSION).unwrap_or_default();

        if stored_date == today_key && stored_version == version {
            return Ok(false);
        }

        tracing::info!(
            from_date = %stored_date,
            from_version = %stored_version,
            to_date = %today_key,
            to_version = version,
            "starting a new day"
        );

        self.backend.set(keys::CURRENT_ORDER, codec::encode_order(None))?;
        self.backend.set(keys::HINT_LEVEL, codec::encode_count(0))?;
        self.backend.set(keys::DRAGS, codec::encode_count(0))?;
        self.backend.set(keys::TRIES, codec::encode_count(0))?;
        self.backend.set(keys::EVENT_LOG, String::new())?;
        self.backend.set(keys::SOLVED, codec::encode_flag(false))?;

        let mut priors = self.read(keys::PRIORS, codec::decode_priors);
        priors.push(PriorDay::new(today_key.clone(), false));
        self.backend.set(keys::PRIORS, codec::encode_priors(&priors))?;

        // Only a fully cleared day may be stamped as current
        self.backend.set(keys::VERSION, version.to_string())?;
        self.backend.set(keys::LAST_DATE, today_key)?;

        self.state = SessionState {
            last_played: Some(today),
            stored_version: Some(version.to_string()),
            prior_days: priors,
            ..SessionState::default()
        };
        Ok(true)
    }

    /// Persist the fields present in `patch`
    ///
    /// Fields are written one at a time; the cached state follows each
    /// successful write.
    ///
    /// # Errors
    ///
    /// Returns the first `StoreError`; fields written before it stay written.
    pub fn save(&mut self, patch: StatePatch) -> Result<(), StoreError> {
        if let Some(order) = patch.current_order {
            self.backend
                .set(keys::CURRENT_ORDER, codec::encode_order(Some(&order)))?;
            self.state.current_order = Some(order);
        }
        if let Some(drags) = patch.drags {
            self.backend.set(keys::DRAGS, codec::encode_count(drags))?;
            self.state.drags = drags;
        }
        if let Some(tries) = patch.tries {
            self.backend.set(keys::TRIES, codec::encode_count(tries))?;
            self.state.tries = tries;
        }
        if let Some(level) = patch.hint_level {
            self.backend.set(keys::HINT_LEVEL, codec::encode_count(level))?;
            self.state.hint_level = level;
        }
        if let Some(solved) = patch.solved {
            self.backend.set(keys::SOLVED, codec::encode_flag(solved))?;
            self.state.solved = solved;
        }
        if let Some(log) = patch.event_log {
            self.backend.set(keys::EVENT_LOG, encode_log(&log))?;
            self.state.event_log = log;
        }
        Ok(())
    }

    /// Record a win for `today` in the play history
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend rejects the write.
    pub fn mark_prior_solved(&mut self, today: NaiveDate) -> Result<(), StoreError> {
        let today_key = date_key(today);
        let mut priors = self.state.prior_days.clone();

        match priors.iter_mut().rev().find(|p| p.date == today_key) {
            Some(prior) => prior.solved = true,
            None => priors.push(PriorDay::new(today_key, true)),
        }

        self.backend.set(keys::PRIORS, codec::encode_priors(&priors))?;
        self.state.prior_days = priors;
        Ok(())
    }

    /// Stored working order, if it is a permutation of `len` items
    #[must_use]
    pub fn resumable_order(&self, len: usize) -> Option<&Order> {
        self.state
            .current_order
            .as_ref()
            .filter(|order| order.check(len).is_ok())
    }
}
