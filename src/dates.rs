//! Lenient date parsing for record values

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse the calendar date in `value`, or `None` if it isn't one
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Date and time of day in `value`, only when it carries a time. Offsets are
/// converted to local time.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
}

/// US-style short date, e.g. `9/1/2025`
pub fn short_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 9, 1);
        assert_eq!(parse_date("2025-09-01"), expected);
        assert_eq!(parse_date("09/01/2025"), expected);
        assert_eq!(parse_date("2025-09-01T10:30:00"), expected);
        assert_eq!(parse_date("2025-09-01T10:30:00+02:00"), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("next week"), None);
    }

    #[test]
    fn date_time_needs_a_time_of_day() {
        let expected = NaiveDate::from_ymd_opt(2025, 9, 1).and_then(|d| d.and_hms_opt(10, 30, 0));
        assert_eq!(parse_date_time("2025-09-01T10:30:00"), expected);
        assert_eq!(parse_date_time("2025-09-01 10:30"), expected);
        assert_eq!(parse_date_time("2025-09-01"), None);
        assert_eq!(parse_date_time("soon"), None);
    }

    #[test]
    fn short_date_strips_leading_zeros() {
        assert_eq!(short_date("2025-09-01"), "9/1/2025");
        assert_eq!(short_date("TBD"), "Invalid Date");
    }
}
