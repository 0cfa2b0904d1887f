use serde::{Deserialize, Serialize};

use super::serde_utils::null_as_default;

/// Sort options accepted by the inventory list endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingMethod {
    /// Ascending by record time when set, newest first otherwise
    pub time: bool,
}

/// Body of a `...ByPage` list request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest<Q> {
    pub page: usize,
    pub items_per_page: usize,
    pub filter: Q,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<SortingMethod>,
}

/// One day of the recorded-items histogram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Day label in `%b %d` format, e.g. `Mar 05`
    pub date: String,
    #[serde(alias = "Recorded Invenotry", alias = "Recorded Inventory")]
    pub count: u64,
}

/// Body of a `...ByPage` list response
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PageResponse<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub arr: Vec<T>,
    /// Total number of records matching the filter, across all pages
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: usize,
    #[serde(default, rename = "chartData")]
    pub chart_data: Option<Vec<ChartPoint>>,
}

impl<T> Default for PageResponse<T> {
    fn default() -> Self {
        Self {
            arr: Vec::new(),
            count: 0,
            chart_data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_shape() {
        let req = PageRequest {
            page: 2,
            items_per_page: 20,
            filter: serde_json::json!({}),
            sorting: Some(SortingMethod { time: true }),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "page": 2,
                "itemsPerPage": 20,
                "filter": {},
                "sorting": { "time": true }
            })
        );
    }

    #[test]
    fn test_page_request_without_sorting() {
        let req = PageRequest {
            page: 0,
            items_per_page: 10,
            filter: serde_json::json!({}),
            sorting: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("sorting").is_none());
    }

    #[test]
    fn test_page_response_tolerates_nulls() {
        let resp: PageResponse<i64> =
            serde_json::from_str(r#"{"arr": null, "count": null}"#).unwrap();
        assert!(resp.arr.is_empty());
        assert_eq!(resp.count, 0);
        assert!(resp.chart_data.is_none());
    }

    #[test]
    fn test_chart_point_legacy_key() {
        let resp: PageResponse<i64> = serde_json::from_str(
            r#"{"arr": [1, 2], "count": 45, "chartData": [{"date": "Mar 05", "Recorded Invenotry": 7}]}"#,
        )
        .unwrap();
        assert_eq!(resp.arr, vec![1, 2]);
        assert_eq!(resp.count, 45);
        assert_eq!(
            resp.chart_data,
            Some(vec![ChartPoint {
                date: "Mar 05".to_string(),
                count: 7
            }])
        );
    }
}
