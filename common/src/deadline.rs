//! Deadline label and urgency helpers used by every listing card.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Day counts at or below this value are flagged as urgent.
pub const URGENT_DAYS: i64 = 3;

/// Human readable distance between a deadline and now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineLabel {
    /// Missing or unparsable deadline.
    NotAvailable,
    Passed,
    LastDay,
    Tomorrow,
    DaysLeft(i64),
}

impl DeadlineLabel {
    pub fn is_urgent(&self) -> bool {
        match self {
            DeadlineLabel::LastDay | DeadlineLabel::Tomorrow => true,
            DeadlineLabel::DaysLeft(days) => is_urgent_days(*days),
            DeadlineLabel::Passed | DeadlineLabel::NotAvailable => false,
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, DeadlineLabel::Passed)
    }
}

impl fmt::Display for DeadlineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeadlineLabel::NotAvailable => f.write_str("N/A"),
            DeadlineLabel::Passed => f.write_str("Deadline Passed"),
            DeadlineLabel::LastDay => f.write_str("Last Day"),
            DeadlineLabel::Tomorrow => f.write_str("Tomorrow"),
            DeadlineLabel::DaysLeft(days) => write!(f, "{} Days Left", days),
        }
    }
}

pub fn is_urgent_days(days: i64) -> bool {
    days <= URGENT_DAYS
}

/// Computes the label for a raw deadline relative to `now`.
///
/// The remaining time is rounded up to whole days, so 36 hours left reads
/// "2 Days Left". Rounding up also applies after the deadline: less than a
/// full day past it still reads "Last Day".
pub fn days_until_deadline(raw: Option<&str>, now: DateTime<Utc>) -> DeadlineLabel {
    match raw.and_then(parse_timestamp) {
        Some(deadline) => label_for(deadline, now),
        None => DeadlineLabel::NotAvailable,
    }
}

pub fn label_for(deadline: DateTime<Utc>, now: DateTime<Utc>) -> DeadlineLabel {
    let remaining_ms = (deadline - now).num_milliseconds();
    // Integer division truncates toward zero, which is the ceiling for
    // negative values.
    let days = if remaining_ms > 0 {
        (remaining_ms + DAY_MS - 1) / DAY_MS
    } else {
        remaining_ms / DAY_MS
    };

    match days {
        days if days < 0 => DeadlineLabel::Passed,
        0 => DeadlineLabel::LastDay,
        1 => DeadlineLabel::Tomorrow,
        days => DeadlineLabel::DaysLeft(days),
    }
}

/// Parses the timestamp shapes the remote store and the admin form produce.
/// Values without an offset are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"] {
        if let Ok(parsed) = DateTime::parse_from_str(raw, format) {
            return Some(parsed.with_timezone(&Utc));
        }
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    fn label_in(offset: Duration) -> String {
        let deadline = (now() + offset).to_rfc3339();
        days_until_deadline(Some(&deadline), now()).to_string()
    }

    #[test]
    fn missing_or_invalid_input_is_not_available() {
        assert_eq!(days_until_deadline(None, now()).to_string(), "N/A");
        assert_eq!(days_until_deadline(Some(""), now()).to_string(), "N/A");
        assert_eq!(days_until_deadline(Some("soon"), now()).to_string(), "N/A");
        assert_eq!(days_until_deadline(Some("2025-13-40"), now()).to_string(), "N/A");
    }

    #[test]
    fn ceiling_not_rounding_down() {
        assert_eq!(label_in(Duration::hours(36)), "2 Days Left");
        assert_eq!(label_in(Duration::hours(49)), "3 Days Left");
        assert_eq!(label_in(Duration::days(10)), "10 Days Left");
    }

    #[test]
    fn within_a_day_is_tomorrow_and_exact_now_is_last_day() {
        assert_eq!(label_in(Duration::hours(10)), "Tomorrow");
        assert_eq!(label_in(Duration::hours(24)), "Tomorrow");
        assert_eq!(label_in(Duration::zero()), "Last Day");
    }

    #[test]
    fn less_than_a_day_past_is_still_last_day() {
        assert_eq!(label_in(Duration::milliseconds(-1)), "Last Day");
        assert_eq!(label_in(Duration::hours(-10)), "Last Day");
        assert_eq!(label_in(Duration::hours(-23)), "Last Day");
    }

    #[test]
    fn a_full_day_past_has_passed() {
        assert_eq!(label_in(Duration::hours(-24)), "Deadline Passed");
        assert_eq!(label_in(Duration::hours(-30)), "Deadline Passed");
        assert_eq!(label_in(Duration::days(-30)), "Deadline Passed");
    }

    #[test]
    fn date_only_deadline_reads_last_day_during_that_day() {
        let noon = Utc.with_ymd_and_hms(2025, 3, 12, 12, 0, 0).unwrap();
        assert_eq!(
            days_until_deadline(Some("2025-03-12"), noon).to_string(),
            "Last Day"
        );
        let next_day = Utc.with_ymd_and_hms(2025, 3, 13, 0, 0, 0).unwrap();
        assert_eq!(
            days_until_deadline(Some("2025-03-12"), next_day).to_string(),
            "Deadline Passed"
        );
    }

    #[test]
    fn accepts_remote_and_form_timestamp_shapes() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 12, 9, 30, 0).unwrap();
        for raw in [
            "2025-03-12T09:30:00+00:00",
            "2025-03-12T09:30:00Z",
            "2025-03-12T09:30:00.000Z",
            "2025-03-12 09:30:00+00",
            "2025-03-12T11:30:00+02:00",
            "2025-03-12T09:30:00",
            "2025-03-12T09:30",
        ] {
            assert_eq!(parse_timestamp(raw), Some(expected), "{raw}");
        }
        assert_eq!(
            parse_timestamp("2025-03-12"),
            Some(Utc.with_ymd_and_hms(2025, 3, 12, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn urgency_follows_label() {
        assert!(DeadlineLabel::LastDay.is_urgent());
        assert!(DeadlineLabel::Tomorrow.is_urgent());
        assert!(DeadlineLabel::DaysLeft(2).is_urgent());
        assert!(DeadlineLabel::DaysLeft(3).is_urgent());
        assert!(!DeadlineLabel::DaysLeft(4).is_urgent());
        assert!(!DeadlineLabel::Passed.is_urgent());
        assert!(!DeadlineLabel::NotAvailable.is_urgent());
    }
}
