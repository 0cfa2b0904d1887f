//! Client configuration.
//!
//! The API server can be pinned at build time through the `APP_SERVER`
//! environment variable; otherwise requests go to the page host on port 3000.

use chrono_tz::Tz;
use contracts::shared::query::BUSINESS_TZ;

/// Listing and update requests
pub const DEFAULT_TIMEOUT_MS: u32 = 8_000;
/// Enrichment scrape against the source listing
pub const SCRAPE_TIMEOUT_MS: u32 = 12_000;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

pub const INVENTORY_CHART_DAYS: usize = 10;
pub const QA_CHART_DAYS: usize = 7;

const API_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u32,
    pub scrape_timeout_ms: u32,
    /// Business day zone (`America/Toronto`): "today" for date presets and
    /// the daily histogram. Filter ranges are sent as instants in this zone.
    pub time_zone: Tz,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url = match option_env!("APP_SERVER") {
            Some(server) if !server.trim().is_empty() => normalize_base(server),
            _ => window_origin_base(),
        };
        Self {
            base_url,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            scrape_timeout_ms: SCRAPE_TIMEOUT_MS,
            time_zone: BUSINESS_TZ,
        }
    }
}

fn normalize_base(server: &str) -> String {
    server.trim().trim_end_matches('/').to_string()
}

fn window_origin_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(
            normalize_base(" https://api.example.com/ "),
            "https://api.example.com"
        );
        assert_eq!(normalize_base("http://localhost:3000"), "http://localhost:3000");
    }

    #[test]
    fn test_default_page_size_is_offered() {
        assert!(PAGE_SIZE_OPTIONS.contains(&DEFAULT_PAGE_SIZE));
    }
}
