use serde::{Deserialize, Serialize};

use crate::enums::{Condition, Marketplace, Platform};
use crate::shared::serde_utils::{empty_as_none, null_as_default};

/// Intake item waiting for QA review before it becomes inventory
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaRecord {
    pub sku: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub item_condition: Option<Condition>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub platform: Option<Platform>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub marketplace: Option<Marketplace>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shelf_location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: i64,
    /// QA person who took the record
    #[serde(default, deserialize_with = "null_as_default")]
    pub owner_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub problem: bool,
    /// Already pushed into inventory
    #[serde(default, deserialize_with = "null_as_default")]
    pub recorded: bool,
}

/// Input-length guards of the QA recording form
pub mod limits {
    pub const SHELF_LOCATION_MAX: usize = 4;
    pub const AMOUNT_MAX_DIGITS: usize = 2;
    pub const COMMENT_MAX: usize = 99;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_qa_record() {
        let json = r#"{
            "sku": 5012,
            "time": "2024-03-15T09:00:00Z",
            "itemCondition": "New",
            "comment": "box dented",
            "link": "see https://www.amazon.ca/dp/B000 for details",
            "platform": "Amazon",
            "shelfLocation": "C3",
            "amount": 2,
            "ownerName": "Lee",
            "problem": true
        }"#;
        let record: QaRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.sku, 5012);
        assert_eq!(record.item_condition, Some(Condition::New));
        assert_eq!(record.marketplace, None);
        assert!(record.problem);
        assert!(!record.recorded);
    }
}
