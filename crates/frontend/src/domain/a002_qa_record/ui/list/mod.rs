mod filters;
pub mod state;

use contracts::domain::a002_qa_record::{QaQueryFilter, QaRecord};
use contracts::shared::query::QueryFilter;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

use self::filters::QaFilterForm;
use self::state::{create_state, step_from};
use crate::domain::a002_qa_record::api;
use crate::domain::a002_qa_record::ui::details::QaRecordPanel;
use crate::domain::a002_qa_record::ui::problem_panel::ProblemPanel;
use crate::layout::global_context::use_app_context;
use crate::shared::badges::{badge_class, condition_badge, marketplace_badge, platform_badge};
use crate::shared::chart::bucketize;
use crate::shared::components::bar_chart::BarChart;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::{PageMove, PaginationControls};
use crate::shared::config::QA_CHART_DAYS;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::record_browser::{spawn_fetch, PendingFetch};

/// QA records table with the recording panel and problem list beside it
#[component]
pub fn QaRecordsList() -> impl IntoView {
    let ctx = use_app_context();
    let state = create_state();
    let filters_expanded = RwSignal::new(false);
    let selected = RwSignal::new(None::<QaRecord>);
    let problems_tick = RwSignal::new(0u32);

    let run = move |pending: Option<PendingFetch<QaQueryFilter>>| {
        spawn_fetch(ctx, state, pending, "Loading QA records", api::fetch_page);
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded()) {
            log!("Loading QA records...");
            run(state.try_update(|s| s.submit()));
        }
    });

    let on_search = Callback::new(move |_: ()| run(state.try_update(|s| s.submit())));
    let on_reset = Callback::new(move |_: ()| run(state.try_update(|s| s.reset_filters())));
    let on_move = Callback::new(move |step: PageMove| {
        let pending = state
            .try_update(|s| match step {
                PageMove::First => s.first(),
                PageMove::Prev => s.prev(),
                PageMove::Next => s.next(),
                PageMove::Last => s.last(),
                PageMove::Goto(page) => s.goto(page),
            })
            .flatten();
        run(pending);
    });
    let on_page_size_change =
        Callback::new(move |size: usize| run(state.try_update(|s| s.set_page_size(size))));
    let reload = move || run(state.try_update(|s| s.refresh_current()));

    let select = Callback::new(move |record: QaRecord| selected.set(Some(record)));
    let on_step = Callback::new(move |forward: bool| {
        let Some(sku) = selected.with_untracked(|r| r.as_ref().map(|r| r.sku)) else {
            return;
        };
        if let Some(next) = state.with_untracked(|s| step_from(s.records(), sku, forward)) {
            selected.set(Some(next));
        }
    });
    let on_saved = Callback::new(move |_: ()| {
        reload();
        problems_tick.update(|t| *t += 1);
    });
    let on_flagged = Callback::new(move |_: ()| {
        selected.set(None);
        reload();
        problems_tick.update(|t| *t += 1);
    });

    let active_filters_count = Signal::derive(move || state.with(|s| s.applied_filter().active_count()));
    let changed = Signal::derive(move || state.with(|s| s.is_changed()));
    let buckets = Signal::derive(move || {
        state.with(|s| {
            s.chart_points()
                .map(|points| bucketize(points, QA_CHART_DAYS))
                .unwrap_or_default()
        })
    });
    let selected_sku = move || selected.with(|r| r.as_ref().map(|r| r.sku));

    view! {
        <PageFrame page_id="a002_qa_record--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("clipboard-check")}
                    <h1 class="page__title">"QA Records"</h1>
                    <Badge>{move || state.with(|s| s.pagination().total_count.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| reload()>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content qa-layout">
                <div class="qa-layout__main">
                    <FilterPanel
                        is_expanded=filters_expanded
                        active_filters_count=active_filters_count
                        changed=changed
                        pagination_controls=move || view! {
                            <PaginationControls
                                pagination=Signal::derive(move || state.with(|s| s.pagination()))
                                on_move=on_move
                                on_page_size_change=on_page_size_change
                            />
                        }
                        filter_content=move || view! {
                            <QaFilterForm state=state on_search=on_search on_reset=on_reset />
                        }
                    />

                    <Show when=move || state.with(|s| s.chart_points().is_some_and(|p| !p.is_empty()))>
                        <BarChart title="QA overview, last 7 days" buckets=buckets />
                    </Show>

                    <div class="table-wrapper">
                        <Table attr:style="width: 100%; min-width: 900px;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell min_width=80.0>"SKU"</TableHeaderCell>
                                    <TableHeaderCell min_width=140.0>"Time"</TableHeaderCell>
                                    <TableHeaderCell min_width=110.0>"Condition"</TableHeaderCell>
                                    <TableHeaderCell min_width=100.0>"Platform"</TableHeaderCell>
                                    <TableHeaderCell min_width=100.0>"Marketplace"</TableHeaderCell>
                                    <TableHeaderCell min_width=70.0>"Shelf"</TableHeaderCell>
                                    <TableHeaderCell min_width=60.0>"Amount"</TableHeaderCell>
                                    <TableHeaderCell min_width=200.0>"Comment"</TableHeaderCell>
                                    <TableHeaderCell min_width=90.0>"Owner"</TableHeaderCell>
                                    <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    let records = state.with(|s| s.records().to_vec());
                                    if records.is_empty() && state.with(|s| s.is_loaded()) {
                                        return view! {
                                            <TableRow>
                                                <TableCell attr:colspan="10">
                                                    <div class="table__empty">"No QA records match the filter"</div>
                                                </TableCell>
                                            </TableRow>
                                        }
                                        .into_any();
                                    }
                                    records
                                        .into_iter()
                                        .map(|record| qa_row(record, selected_sku, select))
                                        .collect_view()
                                        .into_any()
                                }}
                            </TableBody>
                        </Table>
                    </div>
                </div>

                <div class="qa-layout__side">
                    {move || match selected.get() {
                        Some(record) => view! {
                            <QaRecordPanel
                                record=record
                                on_saved=on_saved
                                on_flagged=on_flagged
                                on_step=on_step
                            />
                        }
                        .into_any(),
                        None => view! {
                            <div class="qa-layout__placeholder">"Select a record to review it"</div>
                        }
                        .into_any(),
                    }}
                    <ProblemPanel reload=problems_tick on_select=select />
                </div>
            </div>
        </PageFrame>
    }
}

fn status_badge(record: &QaRecord) -> (&'static str, &'static str) {
    match (record.problem, record.recorded) {
        (true, _) => ("error", "Problem"),
        (false, true) => ("success", "Recorded"),
        (false, false) => ("neutral", "Pending"),
    }
}

fn qa_row(
    record: QaRecord,
    selected_sku: impl Fn() -> Option<i64> + Copy + Send + Sync + 'static,
    select: Callback<QaRecord>,
) -> impl IntoView {
    let sku = record.sku;
    let (status_color, status_text) = status_badge(&record);
    let row = record.clone();

    view! {
        <TableRow
            class:table__row--selected=move || selected_sku() == Some(sku)
            on:click=move |_| select.run(row.clone())
        >
            <TableCell>
                <TableCellLayout>
                    <span style="font-family: monospace;">{record.sku}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{format_datetime(&record.time)}</TableCellLayout>
            </TableCell>
            <TableCell>
                <span class=badge_class(condition_badge(record.item_condition))>
                    {record.item_condition.map(|c| c.code()).unwrap_or("-")}
                </span>
            </TableCell>
            <TableCell>
                <span class=badge_class(platform_badge(record.platform))>
                    {record.platform.map(|p| p.code()).unwrap_or("-")}
                </span>
            </TableCell>
            <TableCell>
                {record.marketplace.map(|m| view! {
                    <span class=badge_class(marketplace_badge(m))>{m.code()}</span>
                })}
            </TableCell>
            <TableCell>
                <TableCellLayout>{record.shelf_location.clone()}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{record.amount}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{record.comment.clone()}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{record.owner_name.clone()}</TableCellLayout>
            </TableCell>
            <TableCell>
                <span class=badge_class(status_color)>{status_text}</span>
            </TableCell>
        </TableRow>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_wins_over_recorded() {
        let record = QaRecord {
            problem: true,
            recorded: true,
            ..Default::default()
        };
        assert_eq!(status_badge(&record), ("error", "Problem"));
        assert_eq!(status_badge(&QaRecord::default()), ("neutral", "Pending"));
    }
}
