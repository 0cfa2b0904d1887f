use contracts::domain::a002_qa_record::QaRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_qa_record::api;
use crate::layout::global_context::use_app_context;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::request_seq::RequestSeq;

/// Records flagged problematic. Refetched whenever `reload` ticks.
#[component]
pub fn ProblemPanel(
    #[prop(into)]
    reload: Signal<u32>,

    on_select: Callback<QaRecord>,
) -> impl IntoView {
    let ctx = use_app_context();
    let records = RwSignal::new(Vec::<QaRecord>::new());
    let error = RwSignal::new(None::<String>);
    let seq = StoredValue::new(RequestSeq::default());

    Effect::new(move |_| {
        reload.track();
        let mut next = seq.get_value();
        let issued = next.issue();
        seq.set_value(next);
        spawn_local(async move {
            let result = ctx.track(api::fetch_problem_records()).await;
            if !seq.with_value(|s| s.is_latest(issued)) {
                return;
            }
            match result {
                Ok(found) => {
                    records.set(found);
                    error.set(None);
                }
                Err(e) => {
                    log::warn!("problem records unavailable: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    });

    view! {
        <div class="problem-panel">
            <div class="problem-panel__header">
                {icon("alert-triangle")}
                <span class="problem-panel__title">"Problem records"</span>
                <Badge>{move || records.with(|r| r.len().to_string())}</Badge>
            </div>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <ul class="problem-panel__list">
                {move || records.get().into_iter().map(|record| {
                    let label = format!(
                        "#{} · {} · {}",
                        record.sku,
                        format_date(&record.time),
                        record.comment
                    );
                    view! {
                        <li class="problem-panel__item" on:click=move |_| on_select.run(record.clone())>
                            {label}
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}
