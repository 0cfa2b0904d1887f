use leptos::prelude::*;
use thaw::*;

/// Select over a fixed option list with a leading "All" entry.
///
/// Options are `(code, label)` pairs; the "All" entry maps to `None`.
#[component]
pub fn EnumSelect<T>(
    label: &'static str,

    options: Vec<(T, &'static str)>,

    #[prop(into)]
    value: Signal<Option<T>>,

    on_change: Callback<Option<T>>,

    /// Text of the unset entry
    #[prop(optional)]
    all_label: Option<&'static str>,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    let options = StoredValue::new(options);
    let selected_index = move || {
        value
            .get()
            .and_then(|v| options.with_value(|opts| opts.iter().position(|(o, _)| *o == v)))
            .map(|i| i.to_string())
            .unwrap_or_default()
    };

    view! {
        <div class="form__group">
            <Label>{label}</Label>
            <select
                class="form__select"
                prop:value=selected_index
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    let picked = raw
                        .parse::<usize>()
                        .ok()
                        .and_then(|i| options.with_value(|opts| opts.get(i).map(|(o, _)| *o)));
                    on_change.run(picked);
                }
            >
                <option value="">{all_label.unwrap_or("All")}</option>
                {options.get_value().into_iter().enumerate().map(|(i, (_, text))| view! {
                    <option value=i.to_string()>{text}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
