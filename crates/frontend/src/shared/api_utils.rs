//! API URL helpers
//!
//! All endpoints live under controller prefixes of the remote API, e.g.
//! `/inventoryController/getInstockByPage`.

use once_cell::sync::OnceCell;

use super::config::ApiConfig;

static CONFIG: OnceCell<ApiConfig> = OnceCell::new();

/// Resolved once per page load
pub fn api_config() -> &'static ApiConfig {
    CONFIG.get_or_init(ApiConfig::from_env)
}

pub fn api_base() -> &'static str {
    &api_config().base_url
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/adminController/getProblemRecords");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Path with a trailing SKU segment, e.g. `/adminController/setProblematicBySku/5012`
pub fn sku_path(prefix: &str, sku: i64) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), sku)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sku_path() {
        assert_eq!(
            sku_path("/adminController/setProblematicBySku", 5012),
            "/adminController/setProblematicBySku/5012"
        );
        assert_eq!(
            sku_path("/inventoryController/updateInstockBySku/", 7),
            "/inventoryController/updateInstockBySku/7"
        );
    }
}
