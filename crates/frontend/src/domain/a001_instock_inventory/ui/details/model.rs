use std::str::FromStr;

use contracts::domain::a001_instock_inventory::InstockInventory;

use crate::domain::a001_instock_inventory::api;
use crate::shared::http::notify_error;

/// Send the working copy; failures are alerted and returned for the form
pub async fn save(record: &InstockInventory) -> Result<(), String> {
    api::update_record(record).await.map_err(|e| {
        notify_error("Saving item", &e);
        e.to_string()
    })
}

/// Numeric form input; blank means zero, garbage is rejected
pub fn parse_number<T: FromStr + Default>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(T::default());
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<f64>("24.5"), Some(24.5));
        assert_eq!(parse_number::<f64>("  "), Some(0.0));
        assert_eq!(parse_number::<i64>("3"), Some(3));
        assert_eq!(parse_number::<i64>("3.5"), None);
        assert_eq!(parse_number::<i64>("-"), None);
    }
}
