mod filters;
pub mod state;

use contracts::domain::a001_instock_inventory::{InstockInventory, InstockQueryFilter};
use contracts::shared::query::QueryFilter;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

use self::filters::InstockFilterForm;
use self::state::create_state;
use crate::domain::a001_instock_inventory::api;
use crate::domain::a001_instock_inventory::ui::auction::AuctionModal;
use crate::domain::a001_instock_inventory::ui::details::InstockDetails;
use crate::layout::global_context::use_app_context;
use crate::shared::badges::{badge_class, condition_badge, marketplace_badge, platform_badge};
use crate::shared::chart::bucketize;
use crate::shared::components::bar_chart::BarChart;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::{PageMove, PaginationControls};
use crate::shared::config::INVENTORY_CHART_DAYS;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::link_utils::open_link;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::record_browser::{spawn_fetch, PendingFetch};

#[component]
pub fn InstockInventoryList() -> impl IntoView {
    let ctx = use_app_context();
    let state = create_state();
    let filters_expanded = RwSignal::new(false);
    let editing = RwSignal::new(None::<InstockInventory>);
    let details_open = RwSignal::new(false);
    let auction_open = RwSignal::new(false);

    let run = move |pending: Option<PendingFetch<InstockQueryFilter>>| {
        spawn_fetch(ctx, state, pending, "Loading inventory", api::fetch_page);
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded()) {
            log!("Loading inventory...");
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
    let toggle_sort = move |_| run(state.try_update(|s| s.toggle_time_sort()));
    let reload = move || run(state.try_update(|s| s.refresh_current()));

    let open_details = move |record: InstockInventory| {
        editing.set(Some(record));
        details_open.set(true);
    };
    let on_saved = Callback::new(move |_: ()| {
        details_open.set(false);
        reload();
    });
    let on_close = Callback::new(move |_: ()| details_open.set(false));

    let active_filters_count = Signal::derive(move || state.with(|s| s.applied_filter().active_count()));
    let changed = Signal::derive(move || state.with(|s| s.is_changed()));
    let bulk_disabled = Signal::derive(move || !state.with(|s| s.bulk_actions_enabled()));
    let buckets = Signal::derive(move || {
        state.with(|s| {
            s.chart_points()
                .map(|points| bucketize(points, INVENTORY_CHART_DAYS))
                .unwrap_or_default()
        })
    });
    let sort_indicator = move || match state.with(|s| s.sorting()) {
        Some(sorting) if sorting.time => "▲",
        _ => "▼",
    };

    view! {
        <PageFrame page_id="a001_instock_inventory--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("inventory")}
                    <h1 class="page__title">"Inventory"</h1>
                    <Badge>{move || state.with(|s| s.pagination().total_count.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload()
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=bulk_disabled
                        on_click=move |_| auction_open.set(true)
                    >
                        {icon("tag")}
                        " Add to auction"
                    </Button>
                </div>
            </div>

            <div class="page__content">
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
                        <InstockFilterForm state=state on_search=on_search on_reset=on_reset />
                    }
                />

                <BarChart title="Recorded in the last 10 days" buckets=buckets />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1100px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=80.0>"SKU"</TableHeaderCell>
                                <TableHeaderCell min_width=260.0>"Lead"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"MSRP"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Shelf"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Condition"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Platform"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Marketplace"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"In stock"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Sold"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Admin / QA"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>
                                    <div class="table__sortable-header" style="cursor: pointer;" on:click=toggle_sort>
                                        "Time "
                                        <span class="table__sort-indicator">{sort_indicator}</span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=80.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let records = state.with(|s| s.records().to_vec());
                                if records.is_empty() && state.with(|s| s.is_loaded()) {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="12">
                                                <div class="table__empty">"No items match the filter"</div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                records
                                    .into_iter()
                                    .map(|item| inventory_row(item, open_details))
                                    .collect_view()
                                    .into_any()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>

            <Dialog open=details_open>
                <DialogSurface>
                    {move || editing.get().map(|record| view! {
                        <InstockDetails record=record on_saved=on_saved on_close=on_close />
                    })}
                </DialogSurface>
            </Dialog>

            <AuctionModal open=auction_open state=state />
        </PageFrame>
    }
}

fn inventory_row(
    item: InstockInventory,
    open_details: impl Fn(InstockInventory) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let url = item.url.clone();
    let has_link = url.contains("http");
    let sku = item.sku;
    let lead = item.lead.clone();
    let description = item.description.clone();
    let msrp = format!("{:.2}", item.msrp);
    let shelf = item.shelf_location.clone();
    let condition = item.condition;
    let platform = item.platform;
    let marketplace = item.marketplace_or_default();
    let in_stock = item.quantity_instock;
    let sold = item.quantity_sold;
    let people = format!("{} / {}", item.admin_name, item.qa_name);
    let time = format_datetime(&item.time);

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout>
                    <span style="font-family: monospace;">{sku}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <span title=description>{lead}</span>
                    {has_link.then(|| view! {
                        <button
                            class="table__link-btn"
                            title="Open listing"
                            on:click=move |_| open_link(&url)
                        >
                            {icon("external-link")}
                        </button>
                    })}
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{msrp}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{shelf}</TableCellLayout>
            </TableCell>
            <TableCell>
                <span class=badge_class(condition_badge(condition))>
                    {condition.map(|c| c.code()).unwrap_or("-")}
                </span>
            </TableCell>
            <TableCell>
                <span class=badge_class(platform_badge(platform))>
                    {platform.map(|p| p.code()).unwrap_or("-")}
                </span>
            </TableCell>
            <TableCell>
                <span class=badge_class(marketplace_badge(marketplace))>
                    {marketplace.code()}
                </span>
            </TableCell>
            <TableCell>
                <TableCellLayout>{in_stock}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{sold}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{people}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{time}</TableCellLayout>
            </TableCell>
            <TableCell>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| open_details(item.clone())
                >
                    {icon("edit")}
                </Button>
            </TableCell>
        </TableRow>
    }
}
