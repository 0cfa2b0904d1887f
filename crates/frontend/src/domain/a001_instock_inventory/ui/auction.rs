use contracts::domain::a001_instock_inventory::AuctionSelectionRequest;
use contracts::shared::query::QueryFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::list::state::InstockBrowser;
use crate::domain::a001_instock_inventory::api;
use crate::layout::global_context::use_app_context;
use crate::shared::http::notify_error;
use crate::shared::icons::icon;

/// Lot numbers start at 1
pub fn parse_lot(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|lot| *lot > 0)
}

/// Stage everything the applied filter matches into one auction lot.
///
/// Opened only while the visible rows match the filter panel.
#[component]
pub fn AuctionModal(open: RwSignal<bool>, state: RwSignal<InstockBrowser>) -> impl IntoView {
    let ctx = use_app_context();
    let lot_raw = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let lot = Signal::derive(move || parse_lot(&lot_raw.get()));
    let summary = move || {
        state.with(|s| {
            format!(
                "{} items matching {} active filter(s) will be added.",
                s.pagination().total_count,
                s.applied_filter().active_count()
            )
        })
    };

    let submit = move |_| {
        let Some(lot) = lot.get_untracked() else {
            return;
        };
        let request = AuctionSelectionRequest {
            filter: state.with_untracked(|s| s.applied_filter().to_query()),
            lot,
        };
        sending.set(true);
        spawn_local(async move {
            let result = ctx.track(api::add_selection_to_auction(&request)).await;
            sending.set(false);
            match result {
                Ok(()) => {
                    log::info!("selection staged into auction lot {}", lot);
                    lot_raw.set(String::new());
                    open.set(false);
                }
                Err(e) => notify_error("Adding to auction", &e),
            }
        });
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Add selection to auction"</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Small>
                            <div>{summary}</div>
                            <Label>"Lot number"</Label>
                            <Input value=lot_raw placeholder="e.g. 42" />
                            <Show when=move || !lot_raw.get().is_empty() && lot.get().is_none()>
                                <div class="form__error">"Lot must be a positive whole number"</div>
                            </Show>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || lot.get().is_none() || sending.get())
                            on_click=submit
                        >
                            {icon("tag")}
                            " Add"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lot() {
        assert_eq!(parse_lot(" 42 "), Some(42));
        assert_eq!(parse_lot("0"), None);
        assert_eq!(parse_lot("-3"), None);
        assert_eq!(parse_lot("lot"), None);
    }
}
