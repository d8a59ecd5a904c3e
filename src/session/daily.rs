//! Opening today's session
//!
//! Resolves today's puzzle, rolls the store over to a new day when needed, and
//! only then reads progress back. The order matters: reading before the reset
//! would resume yesterday's attempt on today's words.

use super::{PuzzleSession, SessionError};
use crate::catalog::Catalog;
use crate::config::GameOptions;
use crate::core::{Clock, resolve_day_index};
use crate::store::{KeyValueStore, SessionStore};

/// Open the session for the current day
///
/// # Errors
///
/// Returns `SessionError::Catalog` when today falls outside the catalog, and
/// `SessionError::Store` when the day rollover cannot be persisted.
pub fn open<S, C>(
    catalog: &Catalog,
    backend: S,
    clock: &C,
    options: GameOptions,
) -> Result<PuzzleSession<S>, SessionError>
where
    S: KeyValueStore,
    C: Clock + ?Sized,
{
    let now = clock.now();
    let today = now.date_naive();
    let index = resolve_day_index(now, catalog.start_date);
    let definition = catalog.day(index)?.clone();

    let mut store = SessionStore::new(backend);
    if store.reset_if_stale(&catalog.version, today)? {
        tracing::info!(day = index, version = %catalog.version, "fresh puzzle");
    } else {
        tracing::info!(day = index, "resuming puzzle");
    }

    let win_message = catalog.win_message(&mut rand::rng()).to_string();
    Ok(PuzzleSession::initialize(
        definition,
        store,
        options,
        today,
        win_message,
    ))
}
