use chrono::{DateTime, NaiveDateTime, Utc};

pub const UNKNOWN_AGE: &str = "Unknown";

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse an upstream publication date. Offsets are honoured; zone-less
/// values are taken as UTC. Anything else yields `None`.
pub fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Coarse relative age of `published` as seen at `now`.
///
/// Under an hour (future dates included) is "Just now", then whole hours,
/// then whole days from 24 hours on. A missing date is "Unknown".
pub fn relative_age(published: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(published) = published else {
        return UNKNOWN_AGE.to_string();
    };

    let hours = (now - published).num_hours();

    match hours {
        h if h < 1 => "Just now".to_string(),
        1 => "1 hour ago".to_string(),
        h if h < 24 => format!("{} hours ago", h),
        h => format!("{} days ago", h / 24),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 14, 12, 0, 0).unwrap()
    }

    fn age(minutes_ago: i64) -> String {
        relative_age(Some(now() - Duration::minutes(minutes_ago)), now())
    }

    #[test]
    fn test_thirty_minutes_is_just_now() {
        assert_eq!(age(30), "Just now");
    }

    #[test]
    fn test_exactly_one_hour() {
        assert_eq!(age(60), "1 hour ago");
    }

    #[test]
    fn test_ninety_minutes_is_one_hour() {
        assert_eq!(age(90), "1 hour ago");
    }

    #[test]
    fn test_hours_are_floored() {
        assert_eq!(age(5 * 60 + 59), "5 hours ago");
        assert_eq!(age(23 * 60 + 59), "23 hours ago");
    }

    #[test]
    fn test_twenty_four_hours_switches_to_days() {
        assert_eq!(age(24 * 60), "1 days ago");
    }

    #[test]
    fn test_fifty_hours_is_two_days() {
        assert_eq!(age(50 * 60), "2 days ago");
    }

    #[test]
    fn test_future_date_is_just_now() {
        assert_eq!(age(-120), "Just now");
    }

    #[test]
    fn test_missing_date_is_unknown() {
        assert_eq!(relative_age(None, now()), UNKNOWN_AGE);
    }

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_published("2025-05-14T10:30:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 5, 14, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_published("2025-05-14T15:30:00+05:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 5, 14, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_formats() {
        let expected = Utc.with_ymd_and_hms(2025, 5, 14, 10, 30, 0).unwrap();
        assert_eq!(parse_published("2025-05-14 10:30:00"), Some(expected));
        assert_eq!(parse_published("2025-05-14T10:30:00"), Some(expected));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_published(""), None);
        assert_eq!(parse_published("yesterday"), None);
        assert_eq!(parse_published("2025-13-45T99:00:00Z"), None);
    }
}
