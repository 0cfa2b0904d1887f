use crate::shared::config::PAGE_SIZE_OPTIONS;
use crate::shared::icons::icon;
use crate::shared::pagination::Pagination;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    First,
    Prev,
    Next,
    Last,
    /// Zero-based page index
    Goto(usize),
}

/// Page typed by the user (1-based) as a zero-based index
pub fn parse_page_input(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()?.checked_sub(1)
}

/// First/prev/next/last buttons plus the page size select.
///
/// Buttons only report the move; the list decides whether it fetches.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    pagination: Signal<Pagination>,

    on_move: Callback<PageMove>,

    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let at_start = move || pagination.get().current_page == 0;
    let at_end = move || pagination.get().next_target().is_none();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_move.run(PageMove::First)
                disabled=at_start
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_move.run(PageMove::Prev)
                disabled=at_start
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <input
                class="pagination-page-input"
                type="number"
                min="1"
                title="Go to page"
                prop:value=move || (pagination.get().current_page + 1).to_string()
                on:change=move |ev| {
                    match parse_page_input(&event_target_value(&ev)) {
                        Some(page) => on_move.run(PageMove::Goto(page)),
                        None => event_target::<HtmlInputElement>(&ev)
                            .set_value(&(pagination.get_untracked().current_page + 1).to_string()),
                    }
                }
            />
            <span class="pagination-info">
                {move || {
                    let p = pagination.get();
                    format!("/ {} ({})", p.page_count(), p.total_count)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_move.run(PageMove::Next)
                disabled=at_end
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_move.run(PageMove::Last)
                disabled=at_end
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || pagination.get().page_size.to_string()
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || pagination.get().page_size == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_input() {
        assert_eq!(parse_page_input("3"), Some(2));
        assert_eq!(parse_page_input(" 1 "), Some(0));
        assert_eq!(parse_page_input("0"), None);
        assert_eq!(parse_page_input("abc"), None);
    }
}
