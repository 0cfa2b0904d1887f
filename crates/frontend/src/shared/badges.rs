//! Badge colors for enum cells.
//!
//! Returned strings are modifiers of the `badge` CSS class, e.g.
//! `badge badge--warning`.

use contracts::enums::{Condition, Marketplace, Platform};

pub fn platform_badge(platform: Option<Platform>) -> &'static str {
    match platform {
        Some(Platform::Amazon) => "warning",
        Some(Platform::Ebay) => "primary",
        Some(Platform::AliExpress) => "error",
        Some(Platform::HomeDepot) => "orange",
        Some(Platform::Walmart) => "info",
        Some(Platform::BestBuy) => "info",
        Some(Platform::OfficialWebsite) => "success",
        Some(Platform::Other) | None => "neutral",
    }
}

pub fn marketplace_badge(marketplace: Marketplace) -> &'static str {
    match marketplace {
        Marketplace::Hibid => "primary",
        Marketplace::Ebay => "info",
        Marketplace::Facebook => "info",
        Marketplace::Wholesale => "warning",
        Marketplace::Retail => "success",
        Marketplace::Kijiji => "orange",
        Marketplace::Other => "neutral",
    }
}

pub fn condition_badge(condition: Option<Condition>) -> &'static str {
    match condition {
        Some(Condition::New) | Some(Condition::Sealed) => "success",
        Some(Condition::UsedLikeNew) => "primary",
        Some(Condition::Used) => "warning",
        Some(Condition::Damaged) | Some(Condition::AsIs) => "error",
        None => "neutral",
    }
}

pub fn badge_class(modifier: &str) -> String {
    format!("badge badge--{}", modifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_colors() {
        assert_eq!(condition_badge(Some(Condition::Sealed)), "success");
        assert_eq!(condition_badge(Some(Condition::AsIs)), "error");
        assert_eq!(condition_badge(None), "neutral");
    }

    #[test]
    fn test_every_platform_has_a_color() {
        for platform in Platform::all() {
            assert!(!platform_badge(Some(platform)).is_empty());
        }
        assert_eq!(platform_badge(None), "neutral");
    }

    #[test]
    fn test_badge_class() {
        assert_eq!(badge_class(marketplace_badge(Marketplace::Hibid)), "badge badge--primary");
    }
}
