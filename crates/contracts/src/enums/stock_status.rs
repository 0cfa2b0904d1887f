use serde::{Deserialize, Serialize};

/// Stock filter for the inventory list. Absence of a value means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    In,
    Out,
}

impl StockStatus {
    pub fn code(&self) -> &'static str {
        match self {
            StockStatus::In => "in",
            StockStatus::Out => "out",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockStatus::In => "In Stock",
            StockStatus::Out => "Out of Stock",
        }
    }

    pub fn all() -> Vec<StockStatus> {
        vec![StockStatus::In, StockStatus::Out]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "in" => Some(StockStatus::In),
            "out" => Some(StockStatus::Out),
            _ => None,
        }
    }
}
