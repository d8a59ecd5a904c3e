//! Daily rotation
//!
//! Puzzle selection works on UTC calendar days so that the time of day never
//! changes which puzzle is active. The first calendar day after the catalog
//! start date is day 0.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Current UTC calendar date
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Clock frozen at noon UTC on `date`
    #[must_use]
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_hms_opt(12, 0, 0).unwrap_or_default().and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Day index for the instant `now`
///
/// May be negative or past the end of the catalog; the catalog decides
/// whether the index is playable.
///
/// # Examples
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use draggin::core::resolve_day_index;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let now = Utc.with_ymd_and_hms(2024, 1, 3, 23, 59, 0).unwrap();
/// assert_eq!(resolve_day_index(now, start), 1);
/// ```
#[must_use]
pub fn resolve_day_index(now: DateTime<Utc>, start_date: NaiveDate) -> i64 {
    day_index_on(now.date_naive(), start_date)
}

/// Day index for a calendar date
#[must_use]
pub fn day_index_on(today: NaiveDate, start_date: NaiveDate) -> i64 {
    (today - start_date).num_days() - 1
}

/// Stored form of a calendar date: month/day/year without padding
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use draggin::core::date_key;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(date_key(date), "3/7/2024");
/// ```
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Parse the stored `month/day/year` form
#[must_use]
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let mut parts = key.trim().split('/');
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    let year = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn two_days_after_start_is_day_one() {
        assert_eq!(day_index_on(date(2024, 1, 3), date(2024, 1, 1)), 1);
    }

    #[test]
    fn first_day_after_start_is_day_zero() {
        assert_eq!(day_index_on(date(2024, 1, 2), date(2024, 1, 1)), 0);
    }

    #[test]
    fn start_date_itself_is_before_the_first_puzzle() {
        assert_eq!(day_index_on(date(2024, 1, 1), date(2024, 1, 1)), -1);
    }

    #[test]
    fn time_of_day_does_not_matter() {
        let start = date(2024, 1, 1);
        let early = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 1).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 1, 3, 23, 59, 59).unwrap();
        assert_eq!(resolve_day_index(early, start), 1);
        assert_eq!(resolve_day_index(late, start), 1);
    }

    #[test]
    fn crosses_month_and_leap_day() {
        assert_eq!(day_index_on(date(2024, 3, 1), date(2024, 2, 27)), 2);
    }

    #[test]
    fn fixed_clock_today() {
        let clock = FixedClock::on(date(2025, 6, 30));
        assert_eq!(clock.today(), date(2025, 6, 30));
    }

    #[test]
    fn date_key_round_trip() {
        let d = date(2024, 12, 31);
        assert_eq!(date_key(d), "12/31/2024");
        assert_eq!(parse_date_key(&date_key(d)), Some(d));
    }

    #[test]
    fn parse_date_key_rejects_garbage() {
        assert_eq!(parse_date_key(""), None);
        assert_eq!(parse_date_key("2024-01-01"), None);
        assert_eq!(parse_date_key("13/1/2024"), None);
        assert_eq!(parse_date_key("1/1/2024/5"), None);
    }
}
