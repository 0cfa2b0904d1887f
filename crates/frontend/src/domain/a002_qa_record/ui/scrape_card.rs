use contracts::domain::a001_instock_inventory::ScrapedData;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_instock_inventory::api::scrape_by_sku;
use crate::layout::global_context::use_app_context;
use crate::shared::http::notify_error;
use crate::shared::icons::icon;
use crate::shared::link_utils::copy_link;

/// Text put on the clipboard for pasting into a listing
pub fn listing_text(title: &str, msrp: &str, currency: &str) -> String {
    let price = msrp.trim();
    if price.is_empty() {
        return title.trim().to_string();
    }
    format!("{} | MSRP {} {}", title.trim(), price, currency.trim())
        .trim_end()
        .to_string()
}

/// Title and price pulled from the source listing. Values stay editable
/// before they are copied.
#[component]
pub fn ScrapeCard(sku: i64) -> impl IntoView {
    let ctx = use_app_context();
    let loading = RwSignal::new(false);
    let loaded = RwSignal::new(false);
    let title = RwSignal::new(String::new());
    let msrp = RwSignal::new(String::new());
    let currency = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());

    let fill = move |data: ScrapedData| {
        title.set(data.title);
        msrp.set(if data.msrp > 0.0 { format!("{:.2}", data.msrp) } else { String::new() });
        currency.set(data.currency);
        image_url.set(data.image_url);
        loaded.set(true);
    };

    let scrape = move |_| {
        loading.set(true);
        spawn_local(async move {
            let result = ctx.track(scrape_by_sku(sku)).await;
            loading.set(false);
            match result {
                Ok(data) => fill(data),
                Err(e) => notify_error("Fetching listing info", &e),
            }
        });
    };

    let copy = move |_| {
        let text = listing_text(&title.get_untracked(), &msrp.get_untracked(), &currency.get_untracked());
        copy_link(&text);
    };

    view! {
        <div class="scrape-card">
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <span class="scrape-card__title">{icon("search")}" Listing info"</span>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    disabled=Signal::derive(move || loading.get())
                    on_click=scrape
                >
                    {move || if loading.get() { "Fetching..." } else { "Fetch" }}
                </Button>
            </Flex>
            <Show when=move || loaded.get()>
                <div class="scrape-card__body">
                    {move || {
                        let src = image_url.get();
                        (!src.is_empty()).then(|| view! { <img class="scrape-card__image" src=src /> })
                    }}
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Title"</Label>
                        <Input value=title />
                        <Flex gap=FlexGap::Small>
                            <div>
                                <Label>"MSRP"</Label>
                                <Input value=msrp />
                            </div>
                            <div>
                                <Label>"Currency"</Label>
                                <Input value=currency />
                            </div>
                        </Flex>
                        <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=copy>
                            {icon("copy")}
                            " Copy"
                        </Button>
                    </Flex>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_text() {
        assert_eq!(
            listing_text(" Cordless Drill ", "89.99", "CAD"),
            "Cordless Drill | MSRP 89.99 CAD"
        );
        assert_eq!(listing_text("Drill", "", "CAD"), "Drill");
        assert_eq!(listing_text("Drill", "10.00", ""), "Drill | MSRP 10.00");
    }
}
