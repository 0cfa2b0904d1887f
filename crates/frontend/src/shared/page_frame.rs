//! PageFrame: root wrapper of every view rendered in the center area.
//!
//! Sets `id="{view}--{category}"` and `data-page-category` on the root
//! element, e.g. `a001_instock_inventory--list`.

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_SYSTEM: &str = "system";

#[component]
pub fn PageFrame(
    page_id: &'static str,
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    view! {
        <div id=page_id data-page-category=category class=class>
            {children()}
        </div>
    }
}
