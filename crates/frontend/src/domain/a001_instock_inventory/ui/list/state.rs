use contracts::domain::a001_instock_inventory::{InstockInventory, InstockQueryFilter};
use contracts::shared::page::SortingMethod;
use leptos::prelude::*;

use crate::shared::record_browser::RecordBrowser;

pub type InstockBrowser = RecordBrowser<InstockQueryFilter, InstockInventory>;

/// Newest first until the user flips the time column
pub fn create_state() -> RwSignal<InstockBrowser> {
    RwSignal::new(RecordBrowser::new(Some(SortingMethod { time: false })))
}

/// Optional numeric input; blank or unparsable means "no bound"
pub fn parse_bound<T: std::str::FromStr>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse().ok()
    }
}

pub fn bound_value<T: ToString>(bound: Option<T>) -> String {
    bound.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bound() {
        assert_eq!(parse_bound::<i64>(" 10231 "), Some(10231));
        assert_eq!(parse_bound::<i64>(""), None);
        assert_eq!(parse_bound::<i64>("abc"), None);
        assert_eq!(parse_bound::<f64>("59.99"), Some(59.99));
    }

    #[test]
    fn test_initial_sort_is_newest_first() {
        let browser = InstockBrowser::new(Some(SortingMethod { time: false }));
        assert_eq!(browser.sorting(), Some(SortingMethod { time: false }));
        assert!(!browser.is_loaded());
        assert!(!browser.bulk_actions_enabled());
    }
}
