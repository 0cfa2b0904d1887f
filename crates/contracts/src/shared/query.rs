//! Building blocks of the list query filters.
//!
//! An unset value never constrains the query: `None` bounds, empty lists and
//! empty ranges are skipped when the filter is serialized.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::serde_utils::iso_millis;

/// Zone the business day is counted in. Date filters, presets and the
/// daily histogram all follow it, whatever the browser's zone.
pub const BUSINESS_TZ: Tz = chrono_tz::America::Toronto;

/// Filter form state for one record type
///
/// The form keeps raw user input (e.g. the keyword text); `to_query`
/// produces the exact body sent as `filter` in a page request.
pub trait QueryFilter: Clone + Default + PartialEq {
    type Query: Serialize + Clone;

    fn to_query(&self) -> Self::Query;

    /// Number of fields that currently constrain the query
    fn active_count(&self) -> usize;

    /// Back to the all-wildcard default
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Numeric bound predicate, serialized as `{gte, lt, lte}` with unset bounds omitted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<T>,
}

impl<T> Default for RangeFilter<T> {
    fn default() -> Self {
        Self {
            gte: None,
            lt: None,
            lte: None,
        }
    }
}

impl<T> RangeFilter<T> {
    pub fn is_empty(&self) -> bool {
        self.gte.is_none() && self.lt.is_none() && self.lte.is_none()
    }
}

/// Calendar date range picked in the filter panel, both ends inclusive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Start of the first day to the last millisecond of the last day, in
    /// [`BUSINESS_TZ`]
    pub fn to_instants(&self) -> TimeRange {
        TimeRange {
            from: self
                .from
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .and_then(|at| zoned(at, true)),
            to: self
                .to
                .and_then(|d| d.and_hms_milli_opt(23, 59, 59, 999))
                .and_then(|at| zoned(at, false)),
        }
    }
}

/// Local wall time in [`BUSINESS_TZ`] as UTC. An ambiguous time resolves to
/// the edge that keeps the range widest.
fn zoned(local: NaiveDateTime, start: bool) -> Option<DateTime<Utc>> {
    let mapped = BUSINESS_TZ.from_local_datetime(&local);
    let at = if start { mapped.earliest() } else { mapped.latest() };
    at.map(|t| t.with_timezone(&Utc))
}

/// Wire form of a [`DateRange`]: `{from, to}` instants, unset ends omitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(default, serialize_with = "iso_millis", skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    #[serde(default, serialize_with = "iso_millis", skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
}

impl TimeRange {
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Split free text into keyword tokens.
///
/// Tokens are whitespace delimited and never empty; the server ORs them.
/// Blank input gives no tokens, i.e. no keyword constraint.
pub fn tokenize_keywords(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keywords() {
        assert_eq!(tokenize_keywords("  red   shoes "), vec!["red", "shoes"]);
        assert_eq!(tokenize_keywords("a\tb\nc"), vec!["a", "b", "c"]);
        assert!(tokenize_keywords("").is_empty());
        assert!(tokenize_keywords("   \t ").is_empty());
    }

    #[test]
    fn test_keywords_keep_case() {
        assert_eq!(tokenize_keywords("Red red"), vec!["Red", "red"]);
    }

    #[test]
    fn test_range_filter_skips_unset_bounds() {
        let range = RangeFilter {
            gte: Some(10.5),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&range).unwrap(), r#"{"gte":10.5}"#);
        assert!(RangeFilter::<i64>::default().is_empty());
        assert!(!range.is_empty());
    }

    #[test]
    fn test_single_day_spans_business_day() {
        // EDT, UTC-4
        let day = NaiveDate::from_ymd_opt(2024, 3, 15);
        let range = DateRange::new(day, day).to_instants();
        assert_eq!(
            serde_json::to_value(range).unwrap(),
            serde_json::json!({
                "from": "2024-03-15T04:00:00.000Z",
                "to": "2024-03-16T03:59:59.999Z"
            })
        );
    }

    #[test]
    fn test_open_range_in_winter() {
        // EST, UTC-5
        let range = DateRange::new(NaiveDate::from_ymd_opt(2024, 1, 2), None).to_instants();
        assert_eq!(
            serde_json::to_string(&range).unwrap(),
            r#"{"from":"2024-01-02T05:00:00.000Z"}"#
        );
        assert!(DateRange::default().to_instants().is_empty());
        assert!(DateRange::default().is_empty());
    }
}
