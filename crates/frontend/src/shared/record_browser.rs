//! Filter-driven, server-paginated record browser.
//!
//! Shared state machine behind the Inventory and QA Records lists. Every
//! operation that needs data returns a [`PendingFetch`]; the view sends
//! `pending.request()` and hands the response back to [`RecordBrowser::apply`].
//! Displayed rows and the page index only change inside `apply`.

use std::future::Future;

use contracts::shared::page::{ChartPoint, PageRequest, PageResponse, SortingMethod};
use contracts::shared::query::QueryFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::http::{notify_error, ApiError};
use super::pagination::Pagination;
use super::request_seq::RequestSeq;
use crate::layout::global_context::AppGlobalContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// New filter, sort or page size: page 0, everything replaced
    Refresh,
    /// Page move with the applied filter; empty pages are ignored
    Navigate,
    /// Same page again after an edit was saved
    Reload,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingFetch<F> {
    pub seq: u64,
    pub kind: FetchKind,
    pub page: usize,
    pub page_size: usize,
    pub filter: F,
    pub sorting: Option<SortingMethod>,
}

impl<F: QueryFilter> PendingFetch<F> {
    pub fn request(&self) -> PageRequest<F::Query> {
        PageRequest {
            page: self.page,
            items_per_page: self.page_size,
            filter: self.filter.to_query(),
            sorting: self.sorting,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordBrowser<F, R> {
    /// Filter panel state, edited freely until submitted
    pub filter: F,
    applied: F,
    sorting: Option<SortingMethod>,
    pagination: Pagination,
    records: Vec<R>,
    chart_points: Option<Vec<ChartPoint>>,
    changed: bool,
    is_loaded: bool,
    seq: RequestSeq,
}

impl<F: QueryFilter, R: Clone> Default for RecordBrowser<F, R> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<F: QueryFilter, R: Clone> RecordBrowser<F, R> {
    pub fn new(sorting: Option<SortingMethod>) -> Self {
        Self {
            filter: F::default(),
            applied: F::default(),
            sorting,
            pagination: Pagination::default(),
            records: Vec::new(),
            chart_points: None,
            changed: false,
            is_loaded: false,
            seq: RequestSeq::default(),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn chart_points(&self) -> Option<&[ChartPoint]> {
        self.chart_points.as_deref()
    }

    pub fn sorting(&self) -> Option<SortingMethod> {
        self.sorting
    }

    /// Filter the visible rows were fetched with
    pub fn applied_filter(&self) -> &F {
        &self.applied
    }

    /// Filter was edited but not submitted yet
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    /// Actions over "everything matching the filter" need the rows on screen
    /// to match the filter panel.
    pub fn bulk_actions_enabled(&self) -> bool {
        self.is_loaded && !self.changed
    }

    pub fn edit_filter(&mut self, edit: impl FnOnce(&mut F)) {
        edit(&mut self.filter);
        self.changed = self.filter != self.applied;
    }

    fn pending(&mut self, kind: FetchKind, page: usize, filter: F) -> PendingFetch<F> {
        PendingFetch {
            seq: self.seq.issue(),
            kind,
            page,
            page_size: self.pagination.page_size,
            filter,
            sorting: self.sorting,
        }
    }

    pub fn submit(&mut self) -> PendingFetch<F> {
        let filter = self.filter.clone();
        self.pending(FetchKind::Refresh, 0, filter)
    }

    pub fn reset_filters(&mut self) -> PendingFetch<F> {
        self.filter.reset();
        self.submit()
    }

    /// Flip ascending/descending time order; lists without sorting start ascending
    pub fn toggle_time_sort(&mut self) -> PendingFetch<F> {
        let time = self.sorting.map(|s| !s.time).unwrap_or(true);
        self.sorting = Some(SortingMethod { time });
        let filter = self.applied.clone();
        self.pending(FetchKind::Refresh, 0, filter)
    }

    /// The new size only takes effect once the first page is applied.
    pub fn set_page_size(&mut self, page_size: usize) -> PendingFetch<F> {
        let filter = self.applied.clone();
        let mut pending = self.pending(FetchKind::Refresh, 0, filter);
        pending.page_size = page_size.max(1);
        pending
    }

    fn navigate(&mut self, target: Option<usize>) -> Option<PendingFetch<F>> {
        let page = target?;
        let filter = self.applied.clone();
        Some(self.pending(FetchKind::Navigate, page, filter))
    }

    pub fn next(&mut self) -> Option<PendingFetch<F>> {
        let target = self.pagination.next_target();
        self.navigate(target)
    }

    pub fn prev(&mut self) -> Option<PendingFetch<F>> {
        let target = self.pagination.prev_target();
        self.navigate(target)
    }

    pub fn first(&mut self) -> Option<PendingFetch<F>> {
        let target = self.pagination.first_target();
        self.navigate(target)
    }

    pub fn last(&mut self) -> Option<PendingFetch<F>> {
        let target = self.pagination.last_target();
        self.navigate(target)
    }

    pub fn goto(&mut self, page: usize) -> Option<PendingFetch<F>> {
        let target = self.pagination.goto_target(page);
        self.navigate(target)
    }

    pub fn refresh_current(&mut self) -> PendingFetch<F> {
        let filter = self.applied.clone();
        let page = self.pagination.current_page;
        self.pending(FetchKind::Reload, page, filter)
    }

    /// Apply a completed fetch. Returns `false` when the response was
    /// discarded (superseded, or an empty page on navigation).
    pub fn apply(&mut self, pending: PendingFetch<F>, response: PageResponse<R>) -> bool {
        if !self.seq.is_latest(pending.seq) {
            log::debug!(
                "discarding stale page response #{} (latest #{})",
                pending.seq,
                self.seq.latest()
            );
            return false;
        }
        match pending.kind {
            FetchKind::Refresh => {
                self.pagination.current_page = 0;
                self.pagination.page_size = pending.page_size;
                self.applied = pending.filter;
                self.changed = self.filter != self.applied;
            }
            FetchKind::Navigate => {
                if response.arr.is_empty() {
                    return false;
                }
                self.pagination.current_page = pending.page;
            }
            FetchKind::Reload => {}
        }
        self.records = response.arr;
        self.pagination.total_count = response.count;
        if response.chart_data.is_some() || pending.kind == FetchKind::Refresh {
            self.chart_points = response.chart_data;
        }
        self.is_loaded = true;
        true
    }
}

/// Send `pending` (if any) through `fetch` and apply the response to `state`.
///
/// Failures alert the user; the rows on screen stay as they were.
pub fn spawn_fetch<F, R, G, Fut>(
    ctx: AppGlobalContext,
    state: RwSignal<RecordBrowser<F, R>>,
    pending: Option<PendingFetch<F>>,
    action: &'static str,
    fetch: G,
) where
    F: QueryFilter + Send + Sync + 'static,
    F::Query: 'static,
    R: Clone + Send + Sync + 'static,
    G: FnOnce(PageRequest<F::Query>) -> Fut + 'static,
    Fut: Future<Output = Result<PageResponse<R>, ApiError>> + 'static,
{
    let Some(pending) = pending else {
        return;
    };
    let request = pending.request();
    spawn_local(async move {
        match ctx.track(fetch(request)).await {
            Ok(response) => state.update(|s| {
                s.apply(pending, response);
            }),
            Err(e) => notify_error(action, &e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_qa_record::QaQueryFilter;
    use contracts::enums::Platform;

    type Browser = RecordBrowser<QaQueryFilter, i64>;

    fn page(arr: Vec<i64>, count: usize) -> PageResponse<i64> {
        PageResponse {
            arr,
            count,
            chart_data: None,
        }
    }

    fn loaded(count: usize) -> Browser {
        let mut browser = Browser::default();
        let pending = browser.submit();
        assert!(browser.apply(pending, page(vec![1, 2], count)));
        browser
    }

    #[test]
    fn test_submit_starts_at_page_zero() {
        let mut browser = Browser::default();
        let pending = browser.submit();
        assert_eq!(pending.page, 0);
        assert_eq!(pending.page_size, 20);
        assert_eq!(pending.kind, FetchKind::Refresh);
        let body = serde_json::to_value(pending.request()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"page": 0, "itemsPerPage": 20, "filter": {}})
        );
    }

    #[test]
    fn test_stale_response_is_rejected() {
        let mut browser = Browser::default();
        let older = browser.submit();
        let newer = browser.submit();
        assert!(!browser.apply(older, page(vec![9], 1)));
        assert!(browser.records().is_empty());
        assert!(browser.apply(newer, page(vec![1, 2], 2)));
        assert_eq!(browser.records(), &[1, 2]);
    }

    #[test]
    fn test_next_walks_to_last_page_then_stops() {
        let mut browser = loaded(45);
        for _ in 0..3 {
            if let Some(pending) = browser.next() {
                assert!(browser.apply(pending, page(vec![3], 45)));
            }
        }
        assert_eq!(browser.pagination().current_page, 2);
        assert!(browser.next().is_none());
    }

    #[test]
    fn test_empty_navigation_keeps_rows() {
        let mut browser = loaded(45);
        let pending = browser.next().unwrap();
        assert!(!browser.apply(pending, page(vec![], 45)));
        assert_eq!(browser.pagination().current_page, 0);
        assert_eq!(browser.records(), &[1, 2]);
    }

    #[test]
    fn test_zero_items_navigation_is_noop() {
        let mut browser = Browser::default();
        let pending = browser.submit();
        assert!(browser.apply(pending, page(vec![], 0)));
        assert_eq!(browser.pagination().total_pages(), -1);
        assert!(browser.next().is_none());
        assert!(browser.prev().is_none());
        assert!(browser.last().is_none());
    }

    #[test]
    fn test_navigation_uses_applied_filter() {
        let mut browser = loaded(45);
        browser.edit_filter(|f| f.platform = Some(Platform::Amazon));
        assert!(browser.is_changed());
        assert!(!browser.bulk_actions_enabled());
        let pending = browser.next().unwrap();
        assert_eq!(pending.filter, QaQueryFilter::default());
    }

    #[test]
    fn test_submit_clears_changed() {
        let mut browser = loaded(45);
        browser.edit_filter(|f| f.keyword = "drill".to_string());
        let pending = browser.submit();
        assert!(browser.apply(pending, page(vec![7], 1)));
        assert!(!browser.is_changed());
        assert!(browser.bulk_actions_enabled());
        assert_eq!(browser.applied_filter().keyword, "drill");
    }

    #[test]
    fn test_edit_back_to_applied_is_unchanged() {
        let mut browser = loaded(45);
        browser.edit_filter(|f| f.keyword = "x".to_string());
        browser.edit_filter(|f| f.keyword.clear());
        assert!(!browser.is_changed());
    }

    #[test]
    fn test_page_size_resets_to_first_page() {
        let mut browser = loaded(45);
        let pending = browser.next().unwrap();
        browser.apply(pending, page(vec![3], 45));
        let pending = browser.set_page_size(50);
        assert_eq!(pending.page, 0);
        assert_eq!(pending.page_size, 50);
        assert!(browser.apply(pending, page(vec![1], 45)));
        assert_eq!(browser.pagination().current_page, 0);
        assert_eq!(browser.pagination().total_pages(), 0);
    }

    #[test]
    fn test_unapplied_page_size_keeps_pagination() {
        let mut browser = loaded(45);
        let pending = browser.last().unwrap();
        assert!(browser.apply(pending, page(vec![5], 45)));
        let _failed = browser.set_page_size(50);
        let p = browser.pagination();
        assert_eq!(p.page_size, 20);
        assert_eq!(p.current_page, 2);
        assert!(p.current_page as i64 <= p.total_pages());
        assert!(browser.last().is_none());
        assert_eq!(browser.prev().map(|f| f.page), Some(1));
    }

    #[test]
    fn test_goto_page() {
        let mut browser = loaded(45);
        assert!(browser.goto(0).is_none());
        assert!(browser.goto(3).is_none());
        let pending = browser.goto(2).unwrap();
        assert_eq!(pending.kind, FetchKind::Navigate);
        assert!(browser.apply(pending, page(vec![5], 45)));
        assert_eq!(browser.pagination().current_page, 2);
    }

    #[test]
    fn test_toggle_time_sort() {
        let mut browser: Browser = RecordBrowser::new(Some(SortingMethod { time: false }));
        let pending = browser.toggle_time_sort();
        assert_eq!(pending.sorting, Some(SortingMethod { time: true }));
        assert_eq!(pending.page, 0);
        let pending = browser.toggle_time_sort();
        assert_eq!(pending.sorting, Some(SortingMethod { time: false }));
    }

    #[test]
    fn test_reload_keeps_page_and_accepts_empty() {
        let mut browser = loaded(45);
        let pending = browser.next().unwrap();
        browser.apply(pending, page(vec![3], 45));
        let pending = browser.refresh_current();
        assert_eq!(pending.page, 1);
        assert!(browser.apply(pending, page(vec![], 20)));
        assert!(browser.records().is_empty());
        assert_eq!(browser.pagination().current_page, 1);
    }

    #[test]
    fn test_reset_filters() {
        let mut browser = loaded(45);
        browser.edit_filter(|f| f.platform = Some(Platform::Walmart));
        let pending = browser.reset_filters();
        assert_eq!(pending.filter, QaQueryFilter::default());
        assert_eq!(browser.filter, QaQueryFilter::default());
    }
}
