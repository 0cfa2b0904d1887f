use serde::{Deserialize, Serialize};

/// Platform the item was originally sourced from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Amazon,
    #[serde(rename = "eBay")]
    Ebay,
    AliExpress,
    HomeDepot,
    Walmart,
    BestBuy,
    #[serde(rename = "Official Website")]
    OfficialWebsite,
    Other,
}

impl Platform {
    pub fn code(&self) -> &'static str {
        match self {
            Platform::Amazon => "Amazon",
            Platform::Ebay => "eBay",
            Platform::AliExpress => "AliExpress",
            Platform::HomeDepot => "HomeDepot",
            Platform::Walmart => "Walmart",
            Platform::BestBuy => "BestBuy",
            Platform::OfficialWebsite => "Official Website",
            Platform::Other => "Other",
        }
    }

    pub fn all() -> Vec<Platform> {
        vec![
            Platform::Amazon,
            Platform::Ebay,
            Platform::AliExpress,
            Platform::HomeDepot,
            Platform::Walmart,
            Platform::BestBuy,
            Platform::OfficialWebsite,
            Platform::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.code() == code)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Channel an item is distributed through after intake.
/// Items without a marketplace go to Hibid auctions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marketplace {
    Hibid,
    #[serde(rename = "eBay")]
    Ebay,
    Facebook,
    Wholesale,
    Retail,
    Kijiji,
    Other,
}

impl Marketplace {
    pub fn code(&self) -> &'static str {
        match self {
            Marketplace::Hibid => "Hibid",
            Marketplace::Ebay => "eBay",
            Marketplace::Facebook => "Facebook",
            Marketplace::Wholesale => "Wholesale",
            Marketplace::Retail => "Retail",
            Marketplace::Kijiji => "Kijiji",
            Marketplace::Other => "Other",
        }
    }

    pub fn all() -> Vec<Marketplace> {
        vec![
            Marketplace::Hibid,
            Marketplace::Ebay,
            Marketplace::Facebook,
            Marketplace::Wholesale,
            Marketplace::Retail,
            Marketplace::Kijiji,
            Marketplace::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.code() == code)
    }
}

impl std::fmt::Display for Marketplace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ebay_spelling() {
        assert_eq!(serde_json::to_string(&Platform::Ebay).unwrap(), "\"eBay\"");
        assert_eq!(
            serde_json::to_string(&Marketplace::Ebay).unwrap(),
            "\"eBay\""
        );
    }

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for p in Platform::all() {
            assert_eq!(Platform::from_code(p.code()), Some(p));
        }
        for m in Marketplace::all() {
            assert_eq!(Marketplace::from_code(m.code()), Some(m));
        }
        assert_eq!(Marketplace::from_code("Amazon"), None);
    }
}
