use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_qa_record::api;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::link_utils::open_link;

/// Next/previous image index, wrapping at both ends
pub fn step_index(len: usize, current: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

/// Photos of one SKU. Loads on its own; a failure only leaves the strip empty.
#[component]
pub fn ImageGallery(sku: i64) -> impl IntoView {
    let ctx = use_app_context();
    let urls = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(true);
    let popup_open = RwSignal::new(false);
    let current = RwSignal::new(0usize);

    spawn_local(async move {
        match ctx.track(api::fetch_image_urls(sku)).await {
            Ok(found) => urls.set(found),
            Err(e) => log::warn!("images for SKU {} unavailable: {}", sku, e),
        }
        loading.set(false);
    });

    let step = move |forward: bool| {
        let len = urls.with_untracked(|u| u.len());
        current.update(|i| *i = step_index(len, *i, forward));
    };
    let current_url = move || urls.with(|u| u.get(current.get()).cloned().unwrap_or_default());

    view! {
        <div class="image-gallery">
            <div class="image-gallery__title">{icon("image")}" Photos"</div>
            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                let list = urls.get();
                if list.is_empty() {
                    return view! { <div class="image-gallery__empty">"No images"</div> }.into_any();
                }
                view! {
                    <div class="image-gallery__strip">
                        {list.into_iter().enumerate().map(|(index, url)| view! {
                            <img
                                class="image-gallery__thumb"
                                src=url
                                loading="lazy"
                                on:click=move |_| {
                                    current.set(index);
                                    popup_open.set(true);
                                }
                            />
                        }).collect_view()}
                    </div>
                }
                .into_any()
            }}

            <Dialog open=popup_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>
                            {move || format!("SKU {} · {} / {}", sku, current.get() + 1, urls.with(|u| u.len()))}
                        </DialogTitle>
                        <DialogContent>
                            <img class="image-gallery__full" src=current_url />
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| step(false)>
                                {icon("chevron-left")}
                            </Button>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| step(true)>
                                {icon("chevron-right")}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| open_link(&current_url())
                            >
                                {icon("external-link")}
                                " Open"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_index_wraps() {
        assert_eq!(step_index(3, 2, true), 0);
        assert_eq!(step_index(3, 0, false), 2);
        assert_eq!(step_index(3, 1, true), 2);
        assert_eq!(step_index(0, 0, true), 0);
    }
}
