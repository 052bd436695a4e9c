use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Serialize;

/// Day range for the likes aggregation. Both bounds are calendar days
/// normalized to UTC midnight; the range covers `from` through the
/// whole of `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateRange {
    pub(crate) from: NaiveDate,
    pub(crate) to: NaiveDate,
}

impl DateRange {
    /// Parses the two raw query fields with strict `%Y-%m-%d`. Any
    /// missing field or parse failure yields `None`.
    ///
    /// A reversed range is deliberately not rejected here; it simply
    /// aggregates to an empty result.
    pub(crate) fn parse(date_from: Option<&str>, date_to: Option<&str>) -> Option<Self> {
        let from = NaiveDate::parse_from_str(date_from?, "%Y-%m-%d").ok()?;
        let to = NaiveDate::parse_from_str(date_to?, "%Y-%m-%d").ok()?;
        // `%Y` also accepts signed extended years up to the calendar
        // limit; an end day with no successor has no exclusive bound
        // and is rejected like any other unparseable input.
        to.checked_add_days(Days::new(1))?;
        Some(Self { from, to })
    }

    pub(crate) fn start(&self) -> DateTime<Utc> {
        midnight_utc(self.from)
    }

    /// Exclusive upper bound: midnight of the day after `to`, so likes
    /// created anywhere within the end day are included. Saturates at
    /// the calendar limit instead of panicking.
    pub(crate) fn end_exclusive(&self) -> DateTime<Utc> {
        let next = self
            .to
            .checked_add_days(Days::new(1))
            .unwrap_or(NaiveDate::MAX);
        midnight_utc(next)
    }
}

fn midnight_utc(day: NaiveDate) -> DateTime<Utc> {
    day.and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc()
}

/// One row of the analytics response: a day and how many likes were
/// created on it. Days with zero likes are never materialized.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub(crate) struct DayLikes {
    pub(crate) date: NaiveDate,
    pub(crate) likes: i64,
}

/// Aggregate row counts for the statistic endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct Statistic {
    pub(crate) users: i64,
    pub(crate) posts: i64,
    pub(crate) likes: i64,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::DateRange;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn parse_accepts_strict_format() {
        let range =
            DateRange::parse(Some("2024-02-01"), Some("2024-02-29")).expect("must parse");
        assert_eq!(range.from, day(2024, 2, 1));
        assert_eq!(range.to, day(2024, 2, 29));
    }

    #[test]
    fn parse_rejects_missing_fields() {
        assert!(DateRange::parse(None, Some("2024-02-01")).is_none());
        assert!(DateRange::parse(Some("2024-02-01"), None).is_none());
        assert!(DateRange::parse(None, None).is_none());
    }

    #[test]
    fn parse_rejects_malformed_dates() {
        assert!(DateRange::parse(Some("2024/02/01"), Some("2024-02-02")).is_none());
        assert!(DateRange::parse(Some("2024-02-30"), Some("2024-03-01")).is_none());
        assert!(DateRange::parse(Some("01-02-2024"), Some("2024-03-01")).is_none());
        assert!(DateRange::parse(Some(""), Some("2024-03-01")).is_none());
    }

    #[test]
    fn parse_rejects_end_day_without_successor() {
        // %Y accepts extended years; the last representable day has no
        // day after it and must not produce a range.
        assert!(DateRange::parse(Some("2024-01-01"), Some("+262142-12-31")).is_none());
    }

    #[test]
    fn end_exclusive_saturates_at_calendar_limit() {
        let range = DateRange {
            from: day(2024, 1, 1),
            to: chrono::NaiveDate::MAX,
        };
        // Must not panic; the bound clamps to the last day's midnight.
        assert_eq!(
            range.end_exclusive(),
            chrono::NaiveDate::MAX
                .and_hms_opt(0, 0, 0)
                .expect("valid time")
                .and_utc()
        );
    }

    #[test]
    fn parse_keeps_reversed_ranges() {
        let range =
            DateRange::parse(Some("2024-03-01"), Some("2024-02-01")).expect("must parse");
        // Reversed bounds give an empty filter window.
        assert!(range.end_exclusive() < range.start());
    }

    #[test]
    fn bounds_are_utc_midnights_and_end_day_is_included() {
        let range =
            DateRange::parse(Some("2024-02-01"), Some("2024-02-02")).expect("must parse");
        assert_eq!(range.start().to_rfc3339(), "2024-02-01T00:00:00+00:00");
        assert_eq!(
            range.end_exclusive().to_rfc3339(),
            "2024-02-03T00:00:00+00:00"
        );
    }
}
