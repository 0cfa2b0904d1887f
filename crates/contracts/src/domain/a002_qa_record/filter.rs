use serde::{Deserialize, Serialize};

use crate::enums::{Condition, Marketplace, Platform};
use crate::shared::query::{tokenize_keywords, DateRange, QueryFilter, TimeRange};

/// QA records filter panel state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QaQueryFilter {
    pub time_range: DateRange,
    pub condition: Option<Condition>,
    pub platform: Option<Platform>,
    pub marketplace: Option<Marketplace>,
    pub qa_names: Vec<String>,
    pub shelf_locations: Vec<String>,
    pub keyword: String,
}

/// Wire form of [`QaQueryFilter`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaQuery {
    #[serde(default, skip_serializing_if = "TimeRange::is_empty")]
    pub time_range_filter: TimeRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_filter: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_filter: Option<Platform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketplace_filter: Option<Marketplace>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qa_filter: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shelf_location_filter: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keyword_filter: Vec<String>,
}

impl QueryFilter for QaQueryFilter {
    type Query = QaQuery;

    fn to_query(&self) -> QaQuery {
        QaQuery {
            time_range_filter: self.time_range.to_instants(),
            condition_filter: self.condition,
            platform_filter: self.platform,
            marketplace_filter: self.marketplace,
            qa_filter: self.qa_names.clone(),
            shelf_location_filter: self.shelf_locations.clone(),
            keyword_filter: tokenize_keywords(&self.keyword),
        }
    }

    fn active_count(&self) -> usize {
        [
            !self.time_range.is_empty(),
            self.condition.is_some(),
            self.platform.is_some(),
            self.marketplace.is_some(),
            !self.qa_names.is_empty(),
            !self.shelf_locations.is_empty(),
            !tokenize_keywords(&self.keyword).is_empty(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_has_no_constraints() {
        let filter = QaQueryFilter::default();
        assert_eq!(
            serde_json::to_value(filter.to_query()).unwrap(),
            serde_json::json!({})
        );
    }

    #[test]
    fn test_to_query_wire_shape() {
        let filter = QaQueryFilter {
            platform: Some(Platform::OfficialWebsite),
            keyword: "red   shoes".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(filter.to_query()).unwrap(),
            serde_json::json!({
                "platformFilter": "Official Website",
                "keywordFilter": ["red", "shoes"]
            })
        );
        assert_eq!(filter.active_count(), 2);
    }
}
