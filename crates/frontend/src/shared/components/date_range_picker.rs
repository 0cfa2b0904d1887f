use contracts::shared::query::DateRange;
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::{date_input_value, parse_date_input, DatePreset};

/// Two date inputs with quick picks (today, yesterday, this week, this
/// month) and a clear button. An empty input leaves that end open.
#[component]
pub fn DateRangePicker(
    #[prop(into)]
    value: Signal<DateRange>,

    on_change: Callback<DateRange>,

    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let on_from_input = move |raw: String| {
        let current = value.get_untracked();
        on_change.run(DateRange::new(parse_date_input(&raw), current.to));
    };

    let on_to_input = move |raw: String| {
        let current = value.get_untracked();
        on_change.run(DateRange::new(current.from, parse_date_input(&raw)));
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! { <Label>{l}</Label> })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=move || date_input_value(value.get().from)
                    on:input=move |ev| on_from_input(event_target_value(&ev))
                />
                <div>"–"</div>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=move || date_input_value(value.get().to)
                    on:input=move |ev| on_to_input(event_target_value(&ev))
                />
                <div class="date-range-picker-compact">
                    <ButtonGroup>
                        {DatePreset::all().into_iter().map(|preset| view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| on_change.run(preset.range())
                            >
                                {preset.label()}
                            </Button>
                        }).collect_view()}
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| on_change.run(DateRange::default())
                            disabled=Signal::derive(move || value.get().is_empty())
                        >
                            "Clear"
                        </Button>
                    </ButtonGroup>
                </div>
            </Flex>
        </Flex>
    }
}
