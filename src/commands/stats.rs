//! Play history summary

use crate::output::print_stats;
use crate::session::PlayStats;
use crate::store::{KeyValueStore, SessionStore};
use chrono::NaiveDate;

/// Load the history from `store` and print it
///
/// Reads only; the stored day is not rolled over.
pub fn show_stats<S: KeyValueStore>(store: &mut SessionStore<S>, today: NaiveDate) -> PlayStats {
    let stats = PlayStats::from_priors(&store.load().prior_days, today);
    print_stats(&stats);
    stats
}
