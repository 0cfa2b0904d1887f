//! Sidebar with one entry per dashboard view

use crate::layout::center::{view_label, VIEW_INVENTORY, VIEW_QA_RECORDS};
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    id: &'static str,
    icon: &'static str,
}

fn get_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: VIEW_INVENTORY,
            icon: "inventory",
        },
        MenuItem {
            id: VIEW_QA_RECORDS,
            icon: "clipboard-check",
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="app-sidebar__content">
            {get_menu_items().into_iter().map(|MenuItem { id, icon: icon_name }| {
                let is_active = move || ctx.active.with(|a| a.as_deref() == Some(id));
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=is_active
                        style:padding-left="12px"
                        on:click=move |_| ctx.open_view(id)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(icon_name)}
                            <span>{view_label(id)}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
