/// Where a detail form stands relative to the record it was loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Unselected,
    Clean,
    Dirty,
}

/// Editable copy of one record next to its original snapshot.
///
/// Edits only touch `working`; submitting sends `working` and, once the
/// server acknowledged it, [`EditSession::commit_saved`] makes it the new
/// original.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession<T> {
    original: Option<T>,
    working: Option<T>,
    dirty: bool,
}

impl<T> Default for EditSession<T> {
    fn default() -> Self {
        Self {
            original: None,
            working: None,
            dirty: false,
        }
    }
}

impl<T: Clone + PartialEq> EditSession<T> {
    pub fn load(&mut self, record: T) {
        self.working = Some(record.clone());
        self.original = Some(record);
        self.dirty = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn original(&self) -> Option<&T> {
        self.original.as_ref()
    }

    pub fn working(&self) -> Option<&T> {
        self.working.as_ref()
    }

    /// Apply a field edit; ignored while nothing is loaded
    pub fn edit(&mut self, change: impl FnOnce(&mut T)) {
        if let Some(working) = self.working.as_mut() {
            change(working);
            self.dirty = true;
        }
    }

    pub fn reset_to_original(&mut self) {
        self.working = self.original.clone();
        self.dirty = false;
    }

    pub fn commit_saved(&mut self) {
        self.original = self.working.clone();
        self.dirty = false;
    }

    /// Settle a submission of the working copy. A failure leaves the
    /// session exactly as it was, edits included.
    pub fn settle_save<E>(&mut self, result: Result<(), E>) -> Result<(), E> {
        if result.is_ok() {
            self.commit_saved();
        }
        result
    }

    pub fn state(&self) -> EditState {
        match (&self.working, self.dirty) {
            (None, _) => EditState::Unselected,
            (Some(_), false) => EditState::Clean,
            (Some(_), true) => EditState::Dirty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_qa_record::QaRecord;

    fn record() -> QaRecord {
        QaRecord {
            sku: 5012,
            comment: "box dented".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_unselected_by_default() {
        let mut session = EditSession::<QaRecord>::default();
        assert_eq!(session.state(), EditState::Unselected);
        session.edit(|r| r.comment.push('!'));
        assert_eq!(session.state(), EditState::Unselected);
    }

    #[test]
    fn test_comment_edit_then_reset() {
        let mut session = EditSession::default();
        session.load(record());
        assert_eq!(session.state(), EditState::Clean);

        session.edit(|r| r.comment = "missing charger".to_string());
        assert_eq!(session.state(), EditState::Dirty);
        assert_eq!(session.original().unwrap().comment, "box dented");

        session.reset_to_original();
        assert_eq!(session.state(), EditState::Clean);
        assert_eq!(session.working().unwrap().comment, "box dented");
    }

    #[test]
    fn test_failed_save_keeps_edits() {
        let mut session = EditSession::default();
        session.load(record());
        session.edit(|r| r.comment = "missing charger".to_string());

        let outcome = session.settle_save(Err("server responded 500: boom".to_string()));
        assert_eq!(outcome, Err("server responded 500: boom".to_string()));
        assert_eq!(session.state(), EditState::Dirty);
        assert_eq!(session.working().unwrap().comment, "missing charger");
        assert_eq!(session.original().unwrap().comment, "box dented");

        assert_eq!(session.settle_save::<String>(Ok(())), Ok(()));
        assert_eq!(session.state(), EditState::Clean);
        assert_eq!(session.original().unwrap().comment, "missing charger");
    }

    #[test]
    fn test_commit_saved() {
        let mut session = EditSession::default();
        session.load(record());
        session.edit(|r| r.amount = 3);
        session.commit_saved();
        assert_eq!(session.state(), EditState::Clean);
        assert_eq!(session.original().unwrap().amount, 3);
        session.clear();
        assert_eq!(session.state(), EditState::Unselected);
    }
}
