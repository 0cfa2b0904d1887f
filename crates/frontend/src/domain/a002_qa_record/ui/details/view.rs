use contracts::domain::a002_qa_record::QaRecord;
use contracts::enums::{Condition, Marketplace, Platform};
use leptos::prelude::*;
use thaw::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use super::model::{accept_amount, accept_comment, accept_shelf};
use super::view_model::QaRecordVm;
use crate::domain::a002_qa_record::ui::image_gallery::ImageGallery;
use crate::domain::a002_qa_record::ui::scrape_card::ScrapeCard;
use crate::layout::global_context::use_app_context;
use crate::shared::components::enum_select::EnumSelect;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::link_utils::{copy_link, extracted_link, open_link};

/// Recording form for one QA record. Re-created for every selection, so
/// images and scraped data start empty each time.
#[component]
pub fn QaRecordPanel(
    record: QaRecord,
    on_saved: Callback<()>,
    on_flagged: Callback<()>,
    /// `true` for the next record on the page, `false` for the previous
    on_step: Callback<bool>,
) -> impl IntoView {
    let ctx = use_app_context();
    let sku = record.sku;
    let meta = format!(
        "{} · {}",
        format_datetime(&record.time),
        if record.owner_name.is_empty() { "-" } else { record.owner_name.as_str() }
    );
    let recorded = record.recorded;
    let vm = QaRecordVm::new(record);

    let condition_options = Condition::all().into_iter().map(|c| (c, c.code())).collect::<Vec<_>>();
    let platform_options = Platform::all().into_iter().map(|p| (p, p.code())).collect::<Vec<_>>();
    let marketplace_options = Marketplace::all().into_iter().map(|m| (m, m.code())).collect::<Vec<_>>();

    view! {
        <div class="qa-panel">
            <div class="qa-panel__header">
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| on_step.run(false)
                >
                    {icon("chevron-left")}
                </Button>
                <div class="qa-panel__title">
                    <h3>{format!("SKU {}", sku)}</h3>
                    <span class="qa-panel__meta">{meta}</span>
                </div>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| on_step.run(true)
                >
                    {icon("chevron-right")}
                </Button>
            </div>

            <Flex gap=FlexGap::Small>
                {recorded.then(|| view! { <span class="badge badge--success">"Recorded"</span> })}
                <Show when=move || vm.is_problem()>
                    <span class="badge badge--error">{icon("alert-triangle")}" Problem"</span>
                </Show>
            </Flex>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <EnumSelect
                    label="Condition"
                    options=condition_options
                    value=Signal::derive(move || vm.field(|r| r.item_condition))
                    on_change=Callback::new(move |v: Option<Condition>| vm.edit(move |r| r.item_condition = v))
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

                <Flex gap=FlexGap::Small>
                    <div class="form__group">
                        <Label>"Shelf"</Label>
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || vm.field(|r| r.shelf_location.clone())
                            on:input=move |ev| {
                                let raw = event_target_value(&ev);
                                if accept_shelf(&raw) {
                                    vm.edit(move |r| r.shelf_location = raw);
                                } else {
                                    event_target::<HtmlInputElement>(&ev)
                                        .set_value(&vm.field_untracked(|r| r.shelf_location.clone()));
                                }
                            }
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Amount"</Label>
                        <input
                            class="form__input"
                            type="text"
                            inputmode="numeric"
                            prop:value=move || vm.field(|r| r.amount).to_string()
                            on:input=move |ev| {
                                match accept_amount(&event_target_value(&ev)) {
                                    Some(amount) => {
                                        if vm.field_untracked(|r| r.amount) != amount {
                                            vm.edit(move |r| r.amount = amount);
                                        }
                                    }
                                    None => event_target::<HtmlInputElement>(&ev)
                                        .set_value(&vm.field_untracked(|r| r.amount).to_string()),
                                }
                            }
                        />
                    </div>
                </Flex>

                <div class="form__group">
                    <Label>"Comment"</Label>
                    <textarea
                        class="form__textarea"
                        rows="3"
                        prop:value=move || vm.field(|r| r.comment.clone())
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            if accept_comment(&raw) {
                                vm.edit(move |r| r.comment = raw);
                            } else {
                                event_target::<HtmlTextAreaElement>(&ev)
                                    .set_value(&vm.field_untracked(|r| r.comment.clone()));
                            }
                        }
                    />
                </div>

                <div class="form__group">
                    <Label>"Link"</Label>
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <input
                            class="form__input"
                            type="text"
                            style="flex: 1;"
                            prop:value=move || vm.field(|r| r.link.clone())
                            on:input=move |ev| {
                                let raw = event_target_value(&ev);
                                vm.edit(move |r| r.link = raw);
                            }
                        />
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| {
                                let link = vm.field_untracked(|r| r.link.clone());
                                let extracted = extracted_link(&link);
                                if extracted != link {
                                    vm.edit(move |r| r.link = extracted);
                                }
                            }
                        >
                            "Extract"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| open_link(&vm.field_untracked(|r| r.link.clone()))
                        >
                            {icon("external-link")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| copy_link(&vm.field_untracked(|r| r.link.clone()))
                        >
                            {icon("copy")}
                        </Button>
                    </Flex>
                </div>
            </div>

            <ButtonGroup>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || !vm.is_dirty())
                    on_click=move |_| vm.reset()
                >
                    {icon("rotate-ccw")}
                    " Reset"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !vm.is_dirty() || vm.busy.get())
                    on_click=move |_| vm.save_command(ctx, on_saved)
                >
                    {icon("check")}
                    " Save"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || vm.busy.get())
                    on_click=move |_| vm.toggle_problem_command(ctx, on_flagged)
                >
                    {icon("alert-triangle")}
                    {move || if vm.is_problem() { " Resolve" } else { " Mark problem" }}
                </Button>
            </ButtonGroup>

            <ImageGallery sku=sku />
            <ScrapeCard sku=sku />
        </div>
    }
}
