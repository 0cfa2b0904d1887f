use serde::{Deserialize, Serialize};

use crate::enums::{Condition, Marketplace, Platform, StockStatus};
use crate::shared::query::{tokenize_keywords, DateRange, QueryFilter, RangeFilter, TimeRange};

/// Inventory filter panel state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstockQueryFilter {
    pub target_sku: Option<i64>,
    /// Uses `gte`/`lte`
    pub sku: RangeFilter<i64>,
    pub stock: Option<StockStatus>,
    pub condition: Option<Condition>,
    pub platform: Option<Platform>,
    pub marketplace: Option<Marketplace>,
    /// Uses `gte`/`lt`
    pub msrp: RangeFilter<f64>,
    /// Raw keyword text, tokenized on `to_query`
    pub keyword: String,
    pub admin_names: Vec<String>,
    pub qa_names: Vec<String>,
    pub shelf_locations: Vec<String>,
    pub admin_time: DateRange,
    /// Starting hour (0-23) applied to the first day of `admin_time`
    pub admin_hour: Option<u8>,
    pub qa_time: DateRange,
}

/// Wire form of [`InstockQueryFilter`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstockQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_sku: Option<i64>,
    #[serde(default, skip_serializing_if = "RangeFilter::is_empty")]
    pub sku: RangeFilter<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instock_filter: Option<StockStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_filter: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_filter: Option<Platform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketplace_filter: Option<Marketplace>,
    #[serde(default, skip_serializing_if = "RangeFilter::is_empty")]
    pub msrp_filter: RangeFilter<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keyword_filter: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub admin_filter: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qa_filter: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shelf_location_filter: Vec<String>,
    #[serde(default, skip_serializing_if = "TimeRange::is_empty")]
    pub time_range_filter: TimeRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_hour: Option<u8>,
    #[serde(default, skip_serializing_if = "TimeRange::is_empty")]
    pub qa_time: TimeRange,
}

impl QueryFilter for InstockQueryFilter {
    type Query = InstockQuery;

    fn to_query(&self) -> InstockQuery {
        InstockQuery {
            target_sku: self.target_sku,
            sku: self.sku,
            instock_filter: self.stock,
            condition_filter: self.condition,
            platform_filter: self.platform,
            marketplace_filter: self.marketplace,
            msrp_filter: self.msrp,
            keyword_filter: tokenize_keywords(&self.keyword),
            admin_filter: self.admin_names.clone(),
            qa_filter: self.qa_names.clone(),
            shelf_location_filter: self.shelf_locations.clone(),
            time_range_filter: self.admin_time.to_instants(),
            // the hour only refines an admin time range
            admin_hour: if self.admin_time.is_empty() {
                None
            } else {
                self.admin_hour
            },
            qa_time: self.qa_time.to_instants(),
        }
    }

    fn active_count(&self) -> usize {
        [
            self.target_sku.is_some(),
            !self.sku.is_empty(),
            self.stock.is_some(),
            self.condition.is_some(),
            self.platform.is_some(),
            self.marketplace.is_some(),
            !self.msrp.is_empty(),
            !tokenize_keywords(&self.keyword).is_empty(),
            !self.admin_names.is_empty(),
            !self.qa_names.is_empty(),
            !self.shelf_locations.is_empty(),
            !self.admin_time.is_empty(),
            !self.qa_time.is_empty(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default_filter_has_no_constraints() {
        let filter = InstockQueryFilter::default();
        assert_eq!(
            serde_json::to_value(filter.to_query()).unwrap(),
            serde_json::json!({})
        );
        assert_eq!(filter.active_count(), 0);
    }

    #[test]
    fn test_blank_keyword_is_wildcard() {
        let filter = InstockQueryFilter {
            keyword: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(filter.to_query()).unwrap(),
            serde_json::json!({})
        );
        assert_eq!(filter.active_count(), 0);
    }

    #[test]
    fn test_to_query_wire_shape() {
        let filter = InstockQueryFilter {
            stock: Some(StockStatus::In),
            condition: Some(Condition::AsIs),
            marketplace: Some(Marketplace::Ebay),
            msrp: RangeFilter {
                gte: Some(10.0),
                lt: Some(99.5),
                lte: None,
            },
            sku: RangeFilter {
                gte: Some(100),
                lt: None,
                lte: Some(200),
            },
            keyword: " usb  hub ".to_string(),
            qa_names: vec!["Lee".to_string()],
            admin_time: DateRange::new(NaiveDate::from_ymd_opt(2024, 3, 1), None),
            admin_hour: Some(9),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(filter.to_query()).unwrap(),
            serde_json::json!({
                "sku": { "gte": 100, "lte": 200 },
                "instockFilter": "in",
                "conditionFilter": "As Is",
                "marketplaceFilter": "eBay",
                "msrpFilter": { "gte": 10.0, "lt": 99.5 },
                "keywordFilter": ["usb", "hub"],
                "qaFilter": ["Lee"],
                "timeRangeFilter": { "from": "2024-03-01T05:00:00.000Z" },
                "adminHour": 9
            })
        );
        assert_eq!(filter.active_count(), 8);
    }

    #[test]
    fn test_admin_hour_without_range_is_dropped() {
        let filter = InstockQueryFilter {
            admin_hour: Some(7),
            ..Default::default()
        };
        assert_eq!(filter.to_query().admin_hour, None);
    }

    #[test]
    fn test_reset_restores_default() {
        let mut filter = InstockQueryFilter {
            target_sku: Some(42),
            keyword: "lamp".to_string(),
            shelf_locations: vec!["A1".to_string()],
            ..Default::default()
        };
        filter.reset();
        assert_eq!(filter, InstockQueryFilter::default());
    }
}
