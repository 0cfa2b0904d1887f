use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_instock_inventory::api::fetch_distinct;

/// Multi-select over the distinct values the server knows for `field`
/// (admin names, QA names, shelf locations). Nothing selected = any value.
#[component]
pub fn NameMultiSelect(
    label: &'static str,

    /// Distinct-lookup field, see `contracts::shared::requests::distinct_fields`
    field: &'static str,

    #[prop(into)]
    selected: Signal<Vec<String>>,

    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    let options: RwSignal<Vec<String>> = RwSignal::new(Vec::new());
    let (failed, set_failed) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_distinct(field).await {
                Ok(mut values) => {
                    values.retain(|v| !v.trim().is_empty());
                    values.sort();
                    options.set(values);
                }
                Err(e) => {
                    log::warn!("distinct {} unavailable: {}", field, e);
                    set_failed.set(true);
                }
            }
        });
    });

    let toggle = move |value: String, checked: bool| {
        let mut current = selected.get_untracked();
        if checked {
            if !current.contains(&value) {
                current.push(value);
            }
        } else {
            current.retain(|v| v != &value);
        }
        on_change.run(current);
    };

    view! {
        <div class="form__group">
            <Label>{label}</Label>
            <details class="multi-select">
                <summary class="multi-select__summary">
                    {move || {
                        let chosen = selected.get();
                        if chosen.is_empty() {
                            "Any".to_string()
                        } else {
                            chosen.join(", ")
                        }
                    }}
                </summary>
                <div class="multi-select__options">
                    {move || failed.get().then(|| view! {
                        <span class="multi-select__empty">"Unavailable"</span>
                    })}
                    <For
                        each=move || options.get()
                        key=|value| value.clone()
                        children=move |value| {
                            let value_for_check = value.clone();
                            let value_for_toggle = value.clone();
                            view! {
                                <label class="multi-select__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selected.get().contains(&value_for_check)
                                        on:change=move |ev| toggle(value_for_toggle.clone(), event_target_checked(&ev))
                                    />
                                    {value}
                                </label>
                            }
                        }
                    />
                </div>
            </details>
        </div>
    }
}
