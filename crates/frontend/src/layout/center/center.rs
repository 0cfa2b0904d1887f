use crate::domain::a001_instock_inventory::ui::list::InstockInventoryList;
use crate::domain::a002_qa_record::ui::list::QaRecordsList;
use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

pub const VIEW_INVENTORY: &str = "a001_instock_inventory";
pub const VIEW_QA_RECORDS: &str = "a002_qa_record";

pub fn view_label(key: &str) -> &'static str {
    match key {
        VIEW_INVENTORY => "Inventory",
        VIEW_QA_RECORDS => "QA Records",
        _ => "Unknown view",
    }
}

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}

/// The view selected in the sidebar
#[component]
pub fn ActiveView() -> impl IntoView {
    let ctx = use_app_context();

    move || match ctx.active.get().as_deref() {
        Some(VIEW_INVENTORY) => view! { <InstockInventoryList /> }.into_any(),
        Some(VIEW_QA_RECORDS) => view! { <QaRecordsList /> }.into_any(),
        Some(other) => {
            let message = format!("Unknown view '{}'", other);
            view! { <div class="alert alert--error">{message}</div> }.into_any()
        }
        None => view! { <></> }.into_any(),
    }
}
