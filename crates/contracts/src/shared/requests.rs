use serde::{Deserialize, Serialize};

/// Ask the server for the distinct values of one record field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistinctRequest {
    pub distinct: String,
}

impl DistinctRequest {
    pub fn new(field: &str) -> Self {
        Self {
            distinct: field.to_string(),
        }
    }
}

/// Fields with a distinct-values lookup
pub mod distinct_fields {
    pub const ADMIN_NAME: &str = "adminName";
    pub const QA_NAME: &str = "qaName";
    pub const SHELF_LOCATION: &str = "shelfLocation";
}

/// Request keyed by SKU only (image urls, enrichment)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkuRequest {
    pub sku: String,
}

impl SkuRequest {
    pub fn new(sku: i64) -> Self {
        Self {
            sku: sku.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProblemFlagRequest {
    #[serde(rename = "isProblem")]
    pub is_problem: bool,
}
