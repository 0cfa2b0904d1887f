use contracts::domain::a002_qa_record::aggregate::limits::{AMOUNT_MAX_DIGITS, COMMENT_MAX, SHELF_LOCATION_MAX};
use contracts::domain::a002_qa_record::QaRecord;

use crate::domain::a002_qa_record::api;
use crate::shared::http::notify_error;

pub async fn save(record: &QaRecord) -> Result<(), String> {
    api::update_record(record).await.map_err(|e| {
        notify_error("Saving QA record", &e);
        e.to_string()
    })
}

pub async fn set_problem_flag(sku: i64, is_problem: bool) -> Result<(), String> {
    api::set_problematic(sku, is_problem).await.map_err(|e| {
        let action = if is_problem { "Marking problem" } else { "Resolving problem" };
        notify_error(action, &e);
        e.to_string()
    })
}

pub fn accept_shelf(raw: &str) -> bool {
    raw.chars().count() <= SHELF_LOCATION_MAX
}

/// Amount input: digits only, blank counts as zero
pub fn accept_amount(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    if trimmed.len() > AMOUNT_MAX_DIGITS || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

pub fn accept_comment(raw: &str) -> bool {
    raw.chars().count() <= COMMENT_MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shelf_location_up_to_four_chars() {
        assert!(accept_shelf("B12"));
        assert!(accept_shelf("B12A"));
        assert!(!accept_shelf("B12AB"));
    }

    #[test]
    fn test_amount_up_to_two_digits() {
        assert_eq!(accept_amount("7"), Some(7));
        assert_eq!(accept_amount("99"), Some(99));
        assert_eq!(accept_amount(""), Some(0));
        assert_eq!(accept_amount("100"), None);
        assert_eq!(accept_amount("-1"), None);
        assert_eq!(accept_amount("1a"), None);
    }

    #[test]
    fn test_comment_limit() {
        assert!(accept_comment(&"x".repeat(99)));
        assert!(!accept_comment(&"x".repeat(100)));
    }
}
