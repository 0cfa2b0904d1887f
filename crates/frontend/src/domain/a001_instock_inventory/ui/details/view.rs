use std::fmt::Display;
use std::str::FromStr;

use contracts::domain::a001_instock_inventory::InstockInventory;
use contracts::enums::{Condition, Marketplace, Platform};
use leptos::prelude::*;
use thaw::*;

use super::model::parse_number;
use super::view_model::InstockDetailsVm;
use crate::layout::global_context::use_app_context;
use crate::shared::components::enum_select::EnumSelect;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::link_utils::{copy_link, open_link};

fn text_field(
    vm: InstockDetailsVm,
    label: &'static str,
    read: fn(&InstockInventory) -> String,
    write: fn(&mut InstockInventory, String),
) -> impl IntoView {
    view! {
        <div class="form__group">
            <Label>{label}</Label>
            <input
                class="form__input"
                type="text"
                prop:value=move || vm.field(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.edit(move |r| write(r, value));
                }
            />
        </div>
    }
}

/// Unchanged numbers are not written back, so "12." stays in the box while typing
fn number_field<T>(
    vm: InstockDetailsVm,
    label: &'static str,
    read: fn(&InstockInventory) -> T,
    write: fn(&mut InstockInventory, T),
) -> impl IntoView
where
    T: FromStr + Default + PartialEq + Display + Send + Sync + 'static,
{
    view! {
        <div class="form__group">
            <Label>{label}</Label>
            <input
                class="form__input"
                type="number"
                prop:value=move || vm.field(read).to_string()
                on:input=move |ev| {
                    let Some(value) = parse_number::<T>(&event_target_value(&ev)) else {
                        return;
                    };
                    if vm.field_untracked(read) != value {
                        vm.edit(move |r| write(r, value));
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn InstockDetails(
    record: InstockInventory,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let sku = record.sku;
    let header = format!(
        "Admin {} · QA {} · recorded {}",
        record.admin_name,
        record.qa_name,
        format_datetime(&record.time)
    );
    let vm = InstockDetailsVm::new(record);

    let condition_options = Condition::all().into_iter().map(|c| (c, c.code())).collect::<Vec<_>>();
    let platform_options = Platform::all().into_iter().map(|p| (p, p.code())).collect::<Vec<_>>();
    let marketplace_options = Marketplace::all().into_iter().map(|m| (m, m.code())).collect::<Vec<_>>();

    view! {
        <DialogBody>
            <DialogTitle>{format!("Item #{}", sku)}</DialogTitle>
            <DialogContent>
                <div class="details-form">
                    <div class="details-form__meta">{header}</div>

                    {move || vm.error.get().map(|e| view! {
                        <div class="alert alert--error">{icon("alert-triangle")}" "{e}</div>
                    })}

                    {text_field(vm, "Lead", |r| r.lead.clone(), |r, v| r.lead = v)}
                    {text_field(vm, "Description", |r| r.description.clone(), |r, v| r.description = v)}

                    <div class="form__group">
                        <Label>"Link"</Label>
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <input
                                class="form__input"
                                type="text"
                                style="flex: 1;"
                                prop:value=move || vm.field(|r| r.url.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.edit(move |r| r.url = value);
                                }
                            />
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                on_click=move |_| open_link(&vm.field_untracked(|r| r.url.clone()))
                            >
                                {icon("external-link")}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                on_click=move |_| copy_link(&vm.field_untracked(|r| r.url.clone()))
                            >
                                {icon("copy")}
                            </Button>
                        </Flex>
                    </div>

                    <Flex gap=FlexGap::Small attr:style="flex-wrap: wrap;">
                        {number_field(vm, "MSRP", |r| r.msrp, |r, v| r.msrp = v)}
                        {text_field(vm, "Shelf", |r| r.shelf_location.clone(), |r, v| r.shelf_location = v)}
                        {number_field(vm, "In stock", |r| r.quantity_instock, |r, v| r.quantity_instock = v)}
                        {number_field(vm, "Sold", |r| r.quantity_sold, |r, v| r.quantity_sold = v)}
                    </Flex>

                    <Flex gap=FlexGap::Small attr:style="flex-wrap: wrap;">
                        <EnumSelect
                            label="Condition"
                            options=condition_options
                            value=Signal::derive(move || vm.field(|r| r.condition))
                            on_change=Callback::new(move |v: Option<Condition>| vm.edit(move |r| r.condition = v))
                            all_label="-"
                        />
                        <EnumSelect
                            label="Platform"
                            options=platform_options
                            value=Signal::derive(move || vm.field(|r| r.platform))
                            on_change=Callback::new(move |v: Option<Platform>| vm.edit(move |r| r.platform = v))
                            all_label="-"
                        />
                        <EnumSelect
                            label="Marketplace"
                            options=marketplace_options
                            value=Signal::derive(move || vm.field(|r| r.marketplace))
                            on_change=Callback::new(move |v: Option<Marketplace>| vm.edit(move |r| r.marketplace = v))
                            all_label="-"
                        />
                    </Flex>

                    <div class="form__group">
                        <Label>"Comment"</Label>
                        <textarea
                            class="form__textarea"
                            rows="3"
                            prop:value=move || vm.field(|r| r.comment.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.edit(move |r| r.comment = value);
                            }
                        />
                    </div>
                </div>
            </DialogContent>
            <DialogActions>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || !vm.is_dirty())
                    on_click=move |_| vm.reset()
                >
                    {icon("rotate-ccw")}
                    " Reset"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !vm.is_dirty() || vm.saving.get())
                    on_click=move |_| vm.save_command(ctx, on_saved)
                >
                    {icon("check")}
                    {move || if vm.saving.get() { " Saving..." } else { " Save" }}
                </Button>
            </DialogActions>
        </DialogBody>
    }
}
