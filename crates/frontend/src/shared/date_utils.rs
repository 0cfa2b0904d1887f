/// Utilities for date and time formatting
///
/// Record timestamps arrive as ISO 8601 strings in UTC; tables show them in
/// the browser's local time.
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Utc};
use contracts::shared::query::DateRange;

use super::api_utils::api_config;

/// Current date in the business time zone
pub fn business_today() -> NaiveDate {
    Utc::now().with_timezone(&api_config().time_zone).date_naive()
}

/// Format ISO datetime string to YYYY-MM-DD HH:MM in local time
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15 10:02" (in UTC-4)
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}

/// Format ISO date string to YYYY-MM-DD, without time zone conversion
/// Example: "2024-03-15T14:02:26Z" -> "2024-03-15"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Value of an `<input type="date">`; blank or malformed input is unset
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Quick picks of the date-range filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePreset {
    Today,
    Yesterday,
    ThisWeek,
    ThisMonth,
}

impl DatePreset {
    pub fn all() -> [DatePreset; 4] {
        [
            DatePreset::Today,
            DatePreset::Yesterday,
            DatePreset::ThisWeek,
            DatePreset::ThisMonth,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatePreset::Today => "Today",
            DatePreset::Yesterday => "Yesterday",
            DatePreset::ThisWeek => "This week",
            DatePreset::ThisMonth => "This month",
        }
    }

    /// Weeks start on Sunday
    pub fn range_from(&self, today: NaiveDate) -> DateRange {
        let (from, to) = match self {
            DatePreset::Today => (today, today),
            DatePreset::Yesterday => {
                let day = today - Duration::days(1);
                (day, day)
            }
            DatePreset::ThisWeek => {
                let start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
                (start, start + Duration::days(6))
            }
            DatePreset::ThisMonth => {
                let start = today.with_day(1).unwrap_or(today);
                let next_month = if start.month() == 12 {
                    NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
                };
                let end = next_month.map(|d| d - Duration::days(1)).unwrap_or(today);
                (start, end)
            }
        };
        DateRange::new(Some(from), Some(to))
    }

    pub fn range(&self) -> DateRange {
        self.range_from(business_today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "2024-03-15");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "2024-03-15");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_date_input() {
        assert_eq!(parse_date_input("2024-03-15"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(date_input_value(Some(ymd(2024, 3, 5))), "2024-03-05");
        assert_eq!(date_input_value(None), "");
    }

    #[test]
    fn test_presets() {
        // Friday
        let today = ymd(2024, 3, 15);
        assert_eq!(
            DatePreset::Yesterday.range_from(today),
            DateRange::new(Some(ymd(2024, 3, 14)), Some(ymd(2024, 3, 14)))
        );
        assert_eq!(
            DatePreset::ThisWeek.range_from(today),
            DateRange::new(Some(ymd(2024, 3, 10)), Some(ymd(2024, 3, 16)))
        );
        assert_eq!(
            DatePreset::ThisMonth.range_from(ymd(2024, 12, 9)),
            DateRange::new(Some(ymd(2024, 12, 1)), Some(ymd(2024, 12, 31)))
        );
        assert_eq!(
            DatePreset::Today.range_from(today),
            DateRange::new(Some(today), Some(today))
        );
    }

    #[test]
    fn test_today_is_sent_as_whole_business_day() {
        let wire = DatePreset::Today.range_from(ymd(2024, 3, 15)).to_instants();
        let from = wire.from.unwrap();
        let to = wire.to.unwrap();
        assert_eq!(from.to_rfc3339(), "2024-03-15T04:00:00+00:00");
        assert_eq!((to - from).num_milliseconds(), 24 * 3_600_000 - 1);
    }
}
