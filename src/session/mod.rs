//! Puzzle session state machine
//!
//! A `PuzzleSession` owns one day's attempt. It starts `InProgress` and moves
//! to `Solved` on the first correct guess; nothing moves it back. All state
//! lives in the injected `SessionStore` and every action writes through before
//! returning.

pub mod daily;
pub mod reorder;
pub mod stats;

pub use daily::open;
pub use reorder::{DragUpdate, ListSurface, ReorderSurface};
pub use stats::PlayStats;

use crate::catalog::{CatalogError, PuzzleDefinition};
use crate::config::GameOptions;
use crate::core::{EventKind, Order, OrderError, render, share_text};
use crate::store::{KeyValueStore, SessionState, SessionStore, StatePatch, StoreError};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid reorder: {0}")]
    InvalidReorder(#[from] OrderError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Solved,
}

/// Result of a settled drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderOutcome {
    pub changed: bool,
}

/// Result of a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub correct: bool,
    /// Slots holding the wrong word; empty unless incorrect-guess
    /// highlighting is enabled
    pub wrong_positions: BTreeSet<usize>,
}

pub struct PuzzleSession<S> {
    definition: PuzzleDefinition,
    store: SessionStore<S>,
    options: GameOptions,
    today: NaiveDate,
    win_message: String,
    wrong_positions: BTreeSet<usize>,
}

impl<S: KeyValueStore> PuzzleSession<S> {
    /// Start or resume play on `definition`
    ///
    /// The store must already have been through `reset_if_stale` for `today`.
    /// A stored order is resumed only if it is a permutation of the day's
    /// words; otherwise play starts from the catalog order.
    pub fn initialize(
        definition: PuzzleDefinition,
        mut store: SessionStore<S>,
        options: GameOptions,
        today: NaiveDate,
        win_message: impl Into<String>,
    ) -> Self {
        let state = store.load();
        if let Some(order) = &state.current_order
            && let Err(err) = order.check(definition.len())
        {
            tracing::warn!(%order, %err, "stored order does not fit today's words, ignoring it");
        }

        tracing::debug!(
            day = definition.day_index,
            tries = state.tries,
            drags = state.drags,
            solved = state.solved,
            "session initialized"
        );

        Self {
            definition,
            store,
            options,
            today,
            win_message: win_message.into(),
            wrong_positions: BTreeSet::new(),
        }
    }

    /// Adopt a settled order from the drag surface
    ///
    /// Dropping an item back where it was is a no-op: nothing is counted,
    /// logged or written. After a solve every reorder is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidReorder` if `slots` is not a permutation
    /// of the day's words (state is left untouched), or `SessionError::Store`
    /// if persisting fails.
    pub fn apply_reorder(&mut self, slots: &[usize]) -> Result<ReorderOutcome, SessionError> {
        let new_order = Order::new(slots.to_vec(), self.definition.len())?;

        if self.status() == Status::Solved || new_order == self.order() {
            return Ok(ReorderOutcome { changed: false });
        }

        let state = self.store.state();
        let drags = state.drags.saturating_add(1);
        let event_log = appended(&state.event_log, EventKind::Drag);

        tracing::debug!(order = %new_order, drags, "reorder");
        self.store.save(StatePatch {
            current_order: Some(new_order),
            drags: Some(drags),
            event_log: Some(event_log),
            ..StatePatch::default()
        })?;
        self.wrong_positions.clear();

        Ok(ReorderOutcome { changed: true })
    }

    /// Check the working order against the solution
    ///
    /// Every guess counts as a try. A correct guess solves the puzzle for good;
    /// guesses after that are accepted and ignored.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Store` if persisting fails.
    pub fn submit_guess(&mut self) -> Result<GuessOutcome, SessionError> {
        if self.status() == Status::Solved {
            return Ok(GuessOutcome {
                correct: true,
                wrong_positions: BTreeSet::new(),
            });
        }

        let order = self.order();
        let correct = order.same_words(&self.definition.final_order, &self.definition.words);
        let state = self.store.state();
        let tries = state.tries.saturating_add(1);

        if correct {
            let event_log = appended(&state.event_log, EventKind::Solved);
            tracing::info!(day = self.definition.day_index, tries, "puzzle solved");

            self.store.save(StatePatch {
                tries: Some(tries),
                solved: Some(true),
                event_log: Some(event_log),
                ..StatePatch::default()
            })?;
            self.store.mark_prior_solved(self.today)?;
            self.wrong_positions.clear();

            return Ok(GuessOutcome {
                correct: true,
                wrong_positions: BTreeSet::new(),
            });
        }

        let event_log = appended(&state.event_log, EventKind::Try);
        let wrong_positions = if self.options.show_incorrect_guesses {
            order.wrong_positions(&self.definition.final_order, &self.definition.words)
        } else {
            BTreeSet::new()
        };

        tracing::debug!(tries, wrong = wrong_positions.len(), "wrong guess");
        self.store.save(StatePatch {
            tries: Some(tries),
            event_log: Some(event_log),
            ..StatePatch::default()
        })?;
        self.wrong_positions.clone_from(&wrong_positions);

        Ok(GuessOutcome {
            correct: false,
            wrong_positions,
        })
    }

    /// Reveal the next hint
    ///
    /// The stored hint level keeps counting past the number of hints so the
    /// share summary records every request; only the reveal is capped.
    /// Returns the new hint level.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Store` if persisting fails.
    pub fn request_hint(&mut self) -> Result<u32, SessionError> {
        let state = self.store.state();
        if state.solved {
            return Ok(state.hint_level);
        }

        let hint_level = state.hint_level.saturating_add(1);
        let event_log = appended(&state.event_log, EventKind::Hint);

        tracing::debug!(hint_level, "hint requested");
        self.store.save(StatePatch {
            hint_level: Some(hint_level),
            event_log: Some(event_log),
            ..StatePatch::default()
        })?;

        Ok(hint_level)
    }

    #[must_use]
    pub fn status(&self) -> Status {
        if self.store.state().solved {
            Status::Solved
        } else {
            Status::InProgress
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        self.store.state()
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    #[must_use]
    pub fn definition(&self) -> &PuzzleDefinition {
        &self.definition
    }

    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Working order: the stored one when it fits, otherwise catalog order
    #[must_use]
    pub fn order(&self) -> Order {
        self.store
            .resumable_order(self.definition.len())
            .cloned()
            .unwrap_or_else(|| Order::identity(self.definition.len()))
    }

    /// Words in working order
    #[must_use]
    pub fn display_words(&self) -> Vec<&str> {
        self.order().arrange(&self.definition.words)
    }

    /// Hints revealed so far
    #[must_use]
    pub fn revealed_hints(&self) -> &[String] {
        let hints = &self.definition.hints;
        let shown = (self.store.state().hint_level as usize).min(hints.len());
        &hints[..shown]
    }

    #[must_use]
    pub fn hints_remaining(&self) -> usize {
        self.definition.hints.len() - self.revealed_hints().len()
    }

    /// Slots flagged by the last failed guess; cleared by the next drag
    #[must_use]
    pub fn wrong_positions(&self) -> &BTreeSet<usize> {
        &self.wrong_positions
    }

    #[must_use]
    pub fn win_message(&self) -> &str {
        &self.win_message
    }

    /// Emoji summary of the day so far
    #[must_use]
    pub fn summary(&self) -> String {
        render(&self.store.state().event_log)
    }

    /// Clipboard text for sharing the day's result
    #[must_use]
    pub fn share_text(&self) -> String {
        share_text(
            &self.options.site,
            &self.options.puzzle_name,
            self.definition.day_index,
            &self.store.state().event_log,
        )
    }

    pub fn into_store(self) -> SessionStore<S> {
        self.store
    }
}

fn appended(log: &[EventKind], event: EventKind) -> Vec<EventKind> {
    let mut log = log.to_vec();
    log.push(event);
    log
}
