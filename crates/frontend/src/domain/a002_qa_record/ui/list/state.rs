use contracts::domain::a002_qa_record::{QaQueryFilter, QaRecord};
use leptos::prelude::*;

use crate::shared::record_browser::RecordBrowser;

pub type QaBrowser = RecordBrowser<QaQueryFilter, QaRecord>;

/// The QA endpoint takes no sorting
pub fn create_state() -> RwSignal<QaBrowser> {
    RwSignal::new(RecordBrowser::new(None))
}

/// Record next to `sku` within the visible page, `None` at either end
pub fn step_from(records: &[QaRecord], sku: i64, forward: bool) -> Option<QaRecord> {
    let index = records.iter().position(|r| r.sku == sku)?;
    let target = if forward {
        index.checked_add(1)?
    } else {
        index.checked_sub(1)?
    };
    records.get(target).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(skus: &[i64]) -> Vec<QaRecord> {
        skus.iter()
            .map(|&sku| QaRecord {
                sku,
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_step_within_page() {
        let page = records(&[11, 12, 13]);
        assert_eq!(step_from(&page, 12, true).map(|r| r.sku), Some(13));
        assert_eq!(step_from(&page, 12, false).map(|r| r.sku), Some(11));
    }

    #[test]
    fn test_step_stops_at_page_edges() {
        let page = records(&[11, 12, 13]);
        assert!(step_from(&page, 13, true).is_none());
        assert!(step_from(&page, 11, false).is_none());
        assert!(step_from(&page, 99, true).is_none());
    }
}
