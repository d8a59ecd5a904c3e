//! Play history statistics

use crate::store::PriorDay;
use chrono::NaiveDate;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayStats {
    pub played: usize,
    pub solved: usize,
    /// Consecutive solved days ending today (or yesterday, if today is
    /// still open)
    pub current_streak: usize,
    pub best_streak: usize,
}

impl PlayStats {
    /// Summarize the play history as of `today`
    ///
    /// Entries whose date does not parse count towards `played` and `solved`
    /// but break streaks. Repeated entries for one date (after a catalog
    /// version bump) count once, solved if any of them was.
    #[must_use]
    pub fn from_priors(priors: &[PriorDay], today: NaiveDate) -> Self {
        let mut days: Vec<(NaiveDate, bool)> = Vec::new();
        for prior in priors {
            let Some(date) = prior.day() else { continue };
            match days.iter_mut().find(|(d, _)| *d == date) {
                Some((_, solved)) => *solved |= prior.solved,
                None => days.push((date, prior.solved)),
            }
        }
        days.sort_unstable_by_key(|(date, _)| *date);

        let unparsed = priors.iter().filter(|p| p.day().is_none());
        let played = days.len() + unparsed.clone().count();
        let solved =
            days.iter().filter(|(_, s)| *s).count() + unparsed.filter(|p| p.solved).count();

        let mut best_streak = 0;
        let mut run = 0;
        let mut previous: Option<NaiveDate> = None;
        for &(date, won) in &days {
            let consecutive = previous.is_some_and(|p| p.succ_opt() == Some(date));
            run = match (won, consecutive) {
                (false, _) => 0,
                (true, true) => run + 1,
                (true, false) => 1,
            };
            best_streak = best_streak.max(run);
            previous = Some(date);
        }

        let current_streak = current_streak(&days, today);

        Self {
            played,
            solved,
            current_streak,
            best_streak,
        }
    }

    /// Percentage of played days that were solved
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.solved as f64 / self.played as f64 * 100.0
        }
    }
}

fn current_streak(days: &[(NaiveDate, bool)], today: NaiveDate) -> usize {
    let yesterday = today.pred_opt();
    let mut expected: Option<NaiveDate> = None;
    let mut streak = 0;

    for &(date, won) in days.iter().rev() {
        if date > today {
            continue;
        }
        match expected {
            None => {
                // Today is still open; the streak may continue from yesterday
                if date == today && !won {
                    expected = yesterday;
                    continue;
                }
                if !won || (date != today && Some(date) != yesterday) {
                    break;
                }
            }
            Some(day) => {
                if date != day || !won {
                    break;
                }
            }
        }
        streak += 1;
        expected = date.pred_opt();
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prior(m: u32, d: u32, solved: bool) -> PriorDay {
        PriorDay::new(format!("{m}/{d}/2024"), solved)
    }

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn empty_history() {
        let stats = PlayStats::from_priors(&[], day(1, 1));
        assert_eq!(stats, PlayStats::default());
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn counts_and_streaks() {
        let priors = [
            prior(1, 1, true),
            prior(1, 2, true),
            prior(1, 3, true),
            prior(1, 4, false),
            prior(1, 5, true),
            prior(1, 6, true),
        ];
        let stats = PlayStats::from_priors(&priors, day(1, 6));

        assert_eq!(stats.played, 6);
        assert_eq!(stats.solved, 5);
        assert_eq!(stats.best_streak, 3);
        assert_eq!(stats.current_streak, 2);
    }

    #[test]
    fn open_today_keeps_yesterdays_streak() {
        let priors = [prior(1, 1, true), prior(1, 2, true), prior(1, 3, false)];
        let stats = PlayStats::from_priors(&priors, day(1, 3));
        assert_eq!(stats.current_streak, 2);
    }

    #[test]
    fn gap_breaks_streak() {
        let priors = [prior(1, 1, true), prior(1, 3, true)];
        let stats = PlayStats::from_priors(&priors, day(1, 3));
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_streak, 1);
    }

    #[test]
    fn missed_days_end_current_streak() {
        let priors = [prior(1, 1, true), prior(1, 2, true)];
        let stats = PlayStats::from_priors(&priors, day(1, 9));
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_streak, 2);
    }

    #[test]
    fn version_bump_duplicates_count_once() {
        let priors = [prior(1, 1, false), prior(1, 1, true)];
        let stats = PlayStats::from_priors(&priors, day(1, 1));
        assert_eq!(stats.played, 1);
        assert_eq!(stats.solved, 1);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn win_rate_percentage() {
        let priors = [prior(1, 1, true), prior(1, 2, false)];
        let stats = PlayStats::from_priors(&priors, day(1, 2));
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }
}
