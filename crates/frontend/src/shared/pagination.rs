use super::config::DEFAULT_PAGE_SIZE;

/// Page bookkeeping of a server-paginated list.
///
/// Navigation methods only compute the target page; `current_page` moves
/// when the fetched page is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: usize,
    pub total_count: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_count: 0,
        }
    }
}

impl Pagination {
    /// Zero-based index of the last page, `-1` when there are no items
    pub fn total_pages(&self) -> i64 {
        if self.page_size == 0 {
            return -1;
        }
        self.total_count.div_ceil(self.page_size) as i64 - 1
    }

    /// Number of pages for display, at least 1
    pub fn page_count(&self) -> usize {
        (self.total_pages() + 1).max(1) as usize
    }

    pub fn next_target(&self) -> Option<usize> {
        let next = self.current_page + 1;
        if next as i64 > self.total_pages() {
            None
        } else {
            Some(next)
        }
    }

    pub fn prev_target(&self) -> Option<usize> {
        self.current_page.checked_sub(1)
    }

    pub fn first_target(&self) -> Option<usize> {
        if self.current_page == 0 {
            None
        } else {
            Some(0)
        }
    }

    pub fn last_target(&self) -> Option<usize> {
        let last = self.total_pages();
        if last < 0 || self.current_page as i64 == last {
            None
        } else {
            Some(last as usize)
        }
    }

    /// Any valid page other than the current one
    pub fn goto_target(&self, page: usize) -> Option<usize> {
        if page == self.current_page || page as i64 > self.total_pages() {
            None
        } else {
            Some(page)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(total_count: usize, page_size: usize) -> Pagination {
        Pagination {
            current_page: 0,
            page_size,
            total_count,
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(pages(45, 20).total_pages(), 2);
        assert_eq!(pages(40, 20).total_pages(), 1);
        assert_eq!(pages(1, 20).total_pages(), 0);
        assert_eq!(pages(0, 20).total_pages(), -1);
        assert_eq!(pages(0, 20).page_count(), 1);
        assert_eq!(pages(45, 20).page_count(), 3);
    }

    #[test]
    fn test_empty_list_navigation_is_noop() {
        let p = pages(0, 20);
        assert_eq!(p.next_target(), None);
        assert_eq!(p.prev_target(), None);
        assert_eq!(p.first_target(), None);
        assert_eq!(p.last_target(), None);
    }

    #[test]
    fn test_walk_to_last_page() {
        let mut p = pages(45, 20);
        for expected in [1, 2] {
            let target = p.next_target().unwrap();
            assert_eq!(target, expected);
            p.current_page = target;
        }
        assert_eq!(p.next_target(), None);
        assert_eq!(p.last_target(), None);
        assert_eq!(p.prev_target(), Some(1));
        assert_eq!(p.first_target(), Some(0));
    }

    #[test]
    fn test_last_and_goto() {
        let p = pages(45, 20);
        assert_eq!(p.last_target(), Some(2));
        assert_eq!(p.goto_target(2), Some(2));
        assert_eq!(p.goto_target(3), None);
        assert_eq!(p.goto_target(0), None);
    }
}
