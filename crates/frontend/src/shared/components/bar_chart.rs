use leptos::prelude::*;

use crate::shared::chart::{peak, Bucket};

/// Daily bar chart of recorded items.
#[component]
pub fn BarChart(
    title: &'static str,

    #[prop(into)]
    buckets: Signal<Vec<Bucket>>,
) -> impl IntoView {
    view! {
        <div class="bar-chart">
            <div class="bar-chart__title">{title}</div>
            {move || {
                let data = buckets.get();
                if data.is_empty() {
                    return view! { <div class="bar-chart__empty">"No data"</div> }.into_any();
                }
                let max = peak(&data).max(1);
                view! {
                    <div class="bar-chart__bars">
                        {data.into_iter().map(|bucket| {
                            let height = bucket.count * 100 / max;
                            let title = format!("{}: {}", bucket.label, bucket.count);
                            view! {
                                <div class="bar-chart__column" title=title>
                                    <span class="bar-chart__value">{bucket.count}</span>
                                    <div class="bar-chart__bar" style:height=format!("{}%", height)></div>
                                    <span class="bar-chart__label">{bucket.label}</span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
