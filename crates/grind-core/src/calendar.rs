//! Calendar-day arithmetic and the clock seam.
//!
//! All streak math works on `NaiveDate` values in the local timezone, so a
//! day-gap is always an exact whole number of days.

use chrono::{DateTime, Duration, Local, NaiveDate};

/// Source of "today" for streak calculations.
pub trait Clock {
    /// The current local calendar day.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed day. Used by tests and replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    day: NaiveDate,
}

impl FixedClock {
    pub fn new(day: NaiveDate) -> Self {
        Self { day }
    }

    pub fn set(&mut self, day: NaiveDate) {
        self.day = day;
    }

    /// Move the clock forward (or backward, for negative values) by whole days.
    pub fn advance_days(&mut self, days: i64) {
        self.day += Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.day
    }
}

/// Whole calendar days from `earlier` to `later`. Negative if `later` precedes `earlier`.
pub fn day_gap(later: NaiveDate, earlier: NaiveDate) -> i64 {
    later.signed_duration_since(earlier).num_days()
}

/// Parse a calendar day from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps are normalized to the local calendar day. Returns `None` for
/// anything else.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(day);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|ts| ts.with_timezone(&Local).date_naive())
}

/// Serde adapter for `Option<NaiveDate>` written as `YYYY-MM-DD`.
///
/// Deserialization accepts anything [`parse_day`] accepts and rejects the rest.
pub mod serde_day {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(day) => serializer.serialize_str(&day.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(value) => super::parse_day(&value)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid calendar day: {}", value))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_gap_across_month() {
        assert_eq!(day_gap(day(2024, 3, 1), day(2024, 2, 28)), 2);
        assert_eq!(day_gap(day(2024, 2, 28), day(2024, 3, 1)), -2);
        assert_eq!(day_gap(day(2024, 3, 1), day(2024, 3, 1)), 0);
    }

    #[test]
    fn test_parse_day_plain_date() {
        assert_eq!(parse_day("2024-05-06"), Some(day(2024, 5, 6)));
        assert_eq!(parse_day("  2024-05-06 "), Some(day(2024, 5, 6)));
    }

    #[test]
    fn test_parse_day_timestamp_normalizes() {
        let parsed = parse_day("2024-05-06T12:00:00Z").unwrap();
        let expected = DateTime::parse_from_rfc3339("2024-05-06T12:00:00Z")
            .unwrap()
            .with_timezone(&Local)
            .date_naive();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_day_rejects_garbage() {
        assert_eq!(parse_day(""), None);
        assert_eq!(parse_day("yesterday"), None);
        assert_eq!(parse_day("2024-13-45"), None);
    }

    #[test]
    fn test_fixed_clock_advance() {
        let mut clock = FixedClock::new(day(2024, 1, 31));
        clock.advance_days(1);
        assert_eq!(clock.today(), day(2024, 2, 1));
        clock.advance_days(-2);
        assert_eq!(clock.today(), day(2024, 1, 30));
    }
}
