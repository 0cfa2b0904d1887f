use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter panel; the header carries the pagination controls
/// and a badge with the number of active filters.
#[component]
pub fn FilterPanel(
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    #[prop(into)]
    active_filters_count: Signal<usize>,

    #[prop(into)]
    pagination_controls: ViewFn,

    #[prop(into)]
    filter_content: ViewFn,

    /// Shown under the form while the edited filter differs from the applied one
    #[prop(into)]
    changed: Signal<bool>,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class=move || {
                            if is_expanded.get() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        }
                    >
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.run()}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content.run()}
                    <Show when=move || changed.get()>
                        <div class="filter-panel__hint">
                            {icon("alert-triangle")}
                            " Filters changed. Press Search to apply them."
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
