use contracts::domain::a002_qa_record::QaRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::edit_session::{EditSession, EditState};

#[derive(Clone, Copy)]
pub struct QaRecordVm {
    pub session: RwSignal<EditSession<QaRecord>>,
    pub busy: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl QaRecordVm {
    pub fn new(record: QaRecord) -> Self {
        let mut session = EditSession::default();
        session.load(record);
        Self {
            session: RwSignal::new(session),
            busy: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn field<T: Default>(&self, read: impl Fn(&QaRecord) -> T) -> T {
        self.session
            .with(|s| s.working().map(&read))
            .unwrap_or_default()
    }

    pub fn field_untracked<T: Default>(&self, read: impl Fn(&QaRecord) -> T) -> T {
        self.session
            .with_untracked(|s| s.working().map(&read))
            .unwrap_or_default()
    }

    /// Flag as stored on the server, not as edited
    pub fn is_problem(&self) -> bool {
        self.session
            .with(|s| s.original().map(|r| r.problem))
            .unwrap_or(false)
    }

    pub fn edit(&self, change: impl FnOnce(&mut QaRecord)) {
        self.session.update(|s| s.edit(change));
    }

    pub fn is_dirty(&self) -> bool {
        self.session.with(|s| s.state() == EditState::Dirty)
    }

    pub fn reset(&self) {
        self.session.update(|s| s.reset_to_original());
        self.error.set(None);
    }

    pub fn save_command(&self, ctx: AppGlobalContext, on_saved: Callback<()>) {
        let Some(record) = self.session.with_untracked(|s| s.working().cloned()) else {
            return;
        };
        let vm = *self;
        vm.busy.set(true);
        vm.error.set(None);
        spawn_local(async move {
            let result = ctx.track(model::save(&record)).await;
            vm.busy.set(false);
            match vm.session.try_update(|s| s.settle_save(result)) {
                Some(Ok(())) => {
                    log::info!("QA record {} saved", record.sku);
                    on_saved.run(());
                }
                Some(Err(e)) => vm.error.set(Some(e)),
                None => {}
            }
        });
    }

    /// Flip the problem flag after the user confirms
    pub fn toggle_problem_command(&self, ctx: AppGlobalContext, on_flagged: Callback<()>) {
        let Some(sku) = self.session.with_untracked(|s| s.original().map(|r| r.sku)) else {
            return;
        };
        let mark = !self.session.with_untracked(|s| s.original().is_some_and(|r| r.problem));
        let question = if mark {
            format!("Mark record {} as problematic?", sku)
        } else {
            format!("Mark the problem on record {} as resolved?", sku)
        };
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&question).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let vm = *self;
        vm.busy.set(true);
        spawn_local(async move {
            let result = ctx.track(model::set_problem_flag(sku, mark)).await;
            vm.busy.set(false);
            match result {
                Ok(()) => on_flagged.run(()),
                Err(e) => vm.error.set(Some(e)),
            }
        });
    }
}
