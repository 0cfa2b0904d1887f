use contracts::domain::a001_instock_inventory::InstockInventory;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::edit_session::{EditSession, EditState};

#[derive(Clone, Copy)]
pub struct InstockDetailsVm {
    pub session: RwSignal<EditSession<InstockInventory>>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl InstockDetailsVm {
    pub fn new(record: InstockInventory) -> Self {
        let mut session = EditSession::default();
        session.load(record);
        Self {
            session: RwSignal::new(session),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Read one field of the working copy (tracked)
    pub fn field<T: Default>(&self, read: impl Fn(&InstockInventory) -> T) -> T {
        self.session
            .with(|s| s.working().map(&read))
            .unwrap_or_default()
    }

    pub fn field_untracked<T: Default>(&self, read: impl Fn(&InstockInventory) -> T) -> T {
        self.session
            .with_untracked(|s| s.working().map(&read))
            .unwrap_or_default()
    }

    pub fn edit(&self, change: impl FnOnce(&mut InstockInventory)) {
        self.session.update(|s| s.edit(change));
    }

    pub fn is_dirty(&self) -> bool {
        self.session.with(|s| s.state() == EditState::Dirty)
    }

    pub fn reset(&self) {
        self.session.update(|s| s.reset_to_original());
        self.error.set(None);
    }

    /// PUT the working copy. The form stays as edited when the save fails.
    pub fn save_command(&self, ctx: AppGlobalContext, on_saved: Callback<()>) {
        let Some(record) = self.session.with_untracked(|s| s.working().cloned()) else {
            return;
        };
        let vm = *self;
        vm.saving.set(true);
        vm.error.set(None);
        spawn_local(async move {
            let result = ctx.track(model::save(&record)).await;
            vm.saving.set(false);
            match vm.session.try_update(|s| s.settle_save(result)) {
                Some(Ok(())) => {
                    log::info!("inventory item {} saved", record.sku);
                    on_saved.run(());
                }
                Some(Err(e)) => vm.error.set(Some(e)),
                None => {}
            }
        });
    }
}
