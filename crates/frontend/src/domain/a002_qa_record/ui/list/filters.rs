use contracts::domain::a002_qa_record::QaQueryFilter;
use contracts::enums::{Condition, Marketplace, Platform};
use contracts::shared::query::DateRange;
use contracts::shared::requests::distinct_fields;
use leptos::prelude::*;
use thaw::*;

use super::state::QaBrowser;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::enum_select::EnumSelect;
use crate::shared::components::name_multi_select::NameMultiSelect;

fn edit_filter(state: RwSignal<QaBrowser>, change: impl FnOnce(&mut QaQueryFilter)) {
    state.update(|s| s.edit_filter(change));
}

#[component]
pub fn QaFilterForm(
    state: RwSignal<QaBrowser>,
    on_search: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let condition_options = Condition::all().into_iter().map(|c| (c, c.code())).collect::<Vec<_>>();
    let platform_options = Platform::all().into_iter().map(|p| (p, p.code())).collect::<Vec<_>>();
    let marketplace_options = Marketplace::all().into_iter().map(|m| (m, m.code())).collect::<Vec<_>>();

    view! {
        <div class="filter-form">
            <Flex gap=FlexGap::Small align=FlexAlign::End attr:style="flex-wrap: wrap;">
                <DateRangePicker
                    label="QA time"
                    value=Signal::derive(move || state.with(|s| s.filter.time_range))
                    on_change=Callback::new(move |range: DateRange| edit_filter(state, move |f| f.time_range = range))
                />
                <div class="form__group" style="flex: 1; min-width: 200px;">
                    <Label>"Keywords"</Label>
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Words in comment or link"
                        prop:value=move || state.with(|s| s.filter.keyword.clone())
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            edit_filter(state, move |f| f.keyword = raw);
                        }
                    />
                </div>
            </Flex>

            <Flex gap=FlexGap::Small align=FlexAlign::End attr:style="flex-wrap: wrap;">
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
                    label="QA"
                    field=distinct_fields::QA_NAME
                    selected=Signal::derive(move || state.with(|s| s.filter.qa_names.clone()))
                    on_change=Callback::new(move |v: Vec<String>| edit_filter(state, move |f| f.qa_names = v))
                />
                <NameMultiSelect
                    label="Shelf"
                    field=distinct_fields::SHELF_LOCATION
                    selected=Signal::derive(move || state.with(|s| s.filter.shelf_locations.clone()))
                    on_change=Callback::new(move |v: Vec<String>| edit_filter(state, move |f| f.shelf_locations = v))
                />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_search.run(())>
                    "Search"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_reset.run(())>
                    "Reset"
                </Button>
            </Flex>
        </div>
    }
}
