use contracts::domain::a001_instock_inventory::InstockQueryFilter;
use contracts::enums::{Condition, Marketplace, Platform, StockStatus};
use contracts::shared::query::DateRange;
use contracts::shared::requests::distinct_fields;
use leptos::prelude::*;
use thaw::*;

use super::state::{bound_value, parse_bound, InstockBrowser};
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::enum_select::EnumSelect;
use crate::shared::components::name_multi_select::NameMultiSelect;

fn edit_filter(state: RwSignal<InstockBrowser>, change: impl FnOnce(&mut InstockQueryFilter)) {
    state.update(|s| s.edit_filter(change));
}

/// Inventory filter form; edits stay local until `on_search`
#[component]
pub fn InstockFilterForm(
    state: RwSignal<InstockBrowser>,
    on_search: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let read = move |f: fn(&InstockQueryFilter) -> String| move || state.with(|s| f(&s.filter));

    let numeric_input = move |label: &'static str,
                              value: fn(&InstockQueryFilter) -> String,
                              apply: fn(&mut InstockQueryFilter, &str)| {
        view! {
            <div class="form__group">
                <Label>{label}</Label>
                <input
                    class="form__input"
                    type="number"
                    prop:value=read(value)
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        edit_filter(state, move |f| apply(f, &raw));
                    }
                />
            </div>
        }
    };

    let condition_options = Condition::all().into_iter().map(|c| (c, c.code())).collect::<Vec<_>>();
    let platform_options = Platform::all().into_iter().map(|p| (p, p.code())).collect::<Vec<_>>();
    let marketplace_options = Marketplace::all().into_iter().map(|m| (m, m.code())).collect::<Vec<_>>();
    let stock_options = StockStatus::all()
        .into_iter()
        .map(|s| (s, s.display_name()))
        .collect::<Vec<_>>();

    view! {
        <div class="filter-form">
            <Flex gap=FlexGap::Small align=FlexAlign::End attr:style="flex-wrap: wrap;">
                {numeric_input("Target SKU", |f| bound_value(f.target_sku), |f, raw| f.target_sku = parse_bound(raw))}
                {numeric_input("SKU from", |f| bound_value(f.sku.gte), |f, raw| f.sku.gte = parse_bound(raw))}
                {numeric_input("SKU to", |f| bound_value(f.sku.lte), |f, raw| f.sku.lte = parse_bound(raw))}
                {numeric_input("MSRP from", |f| bound_value(f.msrp.gte), |f, raw| f.msrp.gte = parse_bound(raw))}
                {numeric_input("MSRP below", |f| bound_value(f.msrp.lt), |f, raw| f.msrp.lt = parse_bound(raw))}

                <div class="form__group" style="flex: 1; min-width: 200px;">
                    <Label>"Keywords"</Label>
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Words in lead or description"
                        prop:value=read(|f| f.keyword.clone())
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            edit_filter(state, move |f| f.keyword = raw);
                        }
                    />
                </div>
            </Flex>

            <Flex gap=FlexGap::Small align=FlexAlign::End attr:style="flex-wrap: wrap;">
                <EnumSelect
                    label="Stock"
                    options=stock_options
                    value=Signal::derive(move || state.with(|s| s.filter.stock))
                    on_change=Callback::new(move |v: Option<StockStatus>| edit_filter(state, move |f| f.stock = v))
                />
                <EnumSelect
                    label="Condition"
                    options=condition_options
                    value=Signal::derive(move || state.with(|s| s.filter.condition))
                    on_change=Callback::new(move |v: Option<Condition>| edit_filter(state, move |f| f.condition = v))
                />
                <EnumSelect
                    label="Platform"
                    options=platform_options
                    value=Signal::derive(move || state.with(|s| s.filter.platform))
                    on_change=Callback::new(move |v: Option<Platform>| edit_filter(state, move |f| f.platform = v))
                />
                <EnumSelect
                    label="Marketplace"
                    options=marketplace_options
                    value=Signal::derive(move || state.with(|s| s.filter.marketplace))
                    on_change=Callback::new(move |v: Option<Marketplace>| edit_filter(state, move |f| f.marketplace = v))
                />
                <NameMultiSelect
                    label="Admin"
                    field=distinct_fields::ADMIN_NAME
                    selected=Signal::derive(move || state.with(|s| s.filter.admin_names.clone()))
                    on_change=Callback::new(move |v| edit_filter(state, move |f| f.admin_names = v))
                />
                <NameMultiSelect
                    label="QA"
                    field=distinct_fields::QA_NAME
                    selected=Signal::derive(move || state.with(|s| s.filter.qa_names.clone()))
                    on_change=Callback::new(move |v| edit_filter(state, move |f| f.qa_names = v))
                />
                <NameMultiSelect
                    label="Shelf"
                    field=distinct_fields::SHELF_LOCATION
                    selected=Signal::derive(move || state.with(|s| s.filter.shelf_locations.clone()))
                    on_change=Callback::new(move |v| edit_filter(state, move |f| f.shelf_locations = v))
                />
            </Flex>

            <Flex gap=FlexGap::Small align=FlexAlign::End attr:style="flex-wrap: wrap;">
                <DateRangePicker
                    label="Recorded"
                    value=Signal::derive(move || state.with(|s| s.filter.admin_time))
                    on_change=Callback::new(move |range: DateRange| {
                        edit_filter(state, move |f| {
                            f.admin_time = range;
                            if range.is_empty() {
                                f.admin_hour = None;
                            }
                        })
                    })
                />
                <div class="form__group">
                    <Label>"From hour"</Label>
                    <select
                        class="form__select"
                        disabled=move || state.with(|s| s.filter.admin_time.is_empty())
                        prop:value=read(|f| bound_value(f.admin_hour))
                        on:change=move |ev| {
                            let raw = event_target_value(&ev);
                            edit_filter(state, move |f| f.admin_hour = parse_bound::<u8>(&raw).filter(|h| *h < 24));
                        }
                    >
                        <option value="">"Any"</option>
                        {(0u8..24).map(|h| view! {
                            <option value=h.to_string()>{format!("{:02}:00", h)}</option>
                        }).collect_view()}
                    </select>
                </div>
                <DateRangePicker
                    label="QA time"
                    value=Signal::derive(move || state.with(|s| s.filter.qa_time))
                    on_change=Callback::new(move |range: DateRange| edit_filter(state, move |f| f.qa_time = range))
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_search.run(())
                >
                    "Search"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_reset.run(())
                >
                    "Reset"
                </Button>
            </Flex>
        </div>
    }
}
