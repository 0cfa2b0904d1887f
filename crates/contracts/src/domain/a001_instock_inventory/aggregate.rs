use serde::{Deserialize, Serialize};

use super::filter::InstockQuery;
use crate::enums::{Condition, Marketplace, Platform};
use crate::shared::serde_utils::{empty_as_none, null_as_default};

// ============================================================================
// Aggregate
// ============================================================================

/// Inventory item that passed QA and sits on a shelf
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstockInventory {
    /// Server assigned, stable
    pub sku: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub msrp: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shelf_location: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub condition: Option<Condition>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lead: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub platform: Option<Platform>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub marketplace: Option<Marketplace>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity_instock: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity_sold: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub admin_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub qa_name: String,
    /// Time the item was recorded into inventory (ISO 8601)
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qa_time: Option<String>,
}

impl InstockInventory {
    /// Marketplace shown in the table; unassigned items go to auction
    pub fn marketplace_or_default(&self) -> Marketplace {
        self.marketplace.unwrap_or(Marketplace::Hibid)
    }
}

// ============================================================================
// Related DTOs
// ============================================================================

/// Product data pulled from the source listing for a SKU
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub msrp: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub currency: String,
}

/// Stage every item matching the filter into an auction lot
#[derive(Debug, Clone, Serialize)]
pub struct AuctionSelectionRequest {
    pub filter: InstockQuery,
    pub lot: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sparse_record() {
        let json = r#"{
            "sku": 10231,
            "msrp": 59.99,
            "shelfLocation": "B12",
            "condition": "Used Like New",
            "comment": null,
            "platform": "Amazon",
            "marketplace": "",
            "quantityInstock": 1,
            "adminName": "Kim",
            "qaName": "Lee",
            "time": "2024-03-15T14:02:26.123Z"
        }"#;
        let item: InstockInventory = serde_json::from_str(json).unwrap();
        assert_eq!(item.sku, 10231);
        assert_eq!(item.condition, Some(Condition::UsedLikeNew));
        assert_eq!(item.platform, Some(Platform::Amazon));
        assert_eq!(item.marketplace, None);
        assert_eq!(item.marketplace_or_default(), Marketplace::Hibid);
        assert_eq!(item.comment, "");
        assert_eq!(item.quantity_sold, 0);
        assert!(item.qa_time.is_none());
    }

    #[test]
    fn test_unknown_condition_is_none() {
        let item: InstockInventory =
            serde_json::from_str(r#"{"sku": 1, "condition": "Refurbished"}"#).unwrap();
        assert_eq!(item.condition, None);
    }
}
