use chrono::{Duration, NaiveDate};
use contracts::shared::page::ChartPoint;

use super::date_utils::business_today;

/// Day label used by the server histogram, e.g. `Oct 18`
pub const DAY_LABEL_FORMAT: &str = "%b %d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub label: String,
    pub count: u64,
}

/// Spread `points` over the trailing `window_days` ending today in the
/// business time zone.
pub fn bucketize(points: &[ChartPoint], window_days: usize) -> Vec<Bucket> {
    bucketize_from(points, window_days, business_today())
}

/// One bucket per day in the window, oldest first, zero when the server sent
/// nothing for that day. No points gives no buckets.
pub fn bucketize_from(points: &[ChartPoint], window_days: usize, today: NaiveDate) -> Vec<Bucket> {
    if points.is_empty() {
        return Vec::new();
    }
    let mut buckets: Vec<Bucket> = (0..window_days)
        .map(|offset| Bucket {
            label: (today - Duration::days(offset as i64))
                .format(DAY_LABEL_FORMAT)
                .to_string(),
            count: 0,
        })
        .collect();
    for point in points {
        if let Some(bucket) = buckets.iter_mut().find(|b| b.label == point.date) {
            bucket.count = point.count;
        }
    }
    buckets.reverse();
    buckets
}

/// Largest bucket count, used to scale the bars
pub fn peak(buckets: &[Bucket]) -> u64 {
    buckets.iter().map(|b| b.count).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn point(date: &str, count: u64) -> ChartPoint {
        ChartPoint {
            date: date.to_string(),
            count,
        }
    }

    #[test]
    fn test_no_points_no_buckets() {
        assert!(bucketize_from(&[], 10, today()).is_empty());
    }

    #[test]
    fn test_single_point_today() {
        let buckets = bucketize_from(&[point("Mar 15", 5)], 10, today());
        assert_eq!(buckets.len(), 10);
        assert_eq!(buckets[0].label, "Mar 06");
        assert_eq!(buckets[9], Bucket { label: "Mar 15".to_string(), count: 5 });
        assert!(buckets[..9].iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_window_crosses_month() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let buckets = bucketize_from(&[point("Feb 28", 3), point("Jan 01", 9)], 7, today);
        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Feb 25", "Feb 26", "Feb 27", "Feb 28", "Feb 29", "Mar 01", "Mar 02"]
        );
        assert_eq!(buckets[3].count, 3);
        assert_eq!(peak(&buckets), 3);
    }
}
