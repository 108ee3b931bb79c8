use flash_core::model::QuickCardDraft;
use services::QuickAddError;

/// One-line feedback shown after a save attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAddNotice {
    Saved,
    MissingTranslation,
    SaveFailed,
}

impl QuickAddNotice {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            QuickAddNotice::Saved => "Card saved!",
            QuickAddNotice::MissingTranslation => "Fill in the translation!",
            QuickAddNotice::SaveFailed => "Could not save the card.",
        }
    }
}

/// Quick-add modal: opened from a text selection, saves front + translation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuickAddVm {
    open: bool,
    front: String,
    back: String,
    saving: bool,
    notice: Option<QuickAddNotice>,
}

impl QuickAddVm {
    /// Open the modal for a fresh selection. Returns whether it opened.
    ///
    /// Ignored while the modal is already open or when the selection is blank.
    pub fn selection_changed(&mut self, selection: &str) -> bool {
        let selection = selection.trim();
        if selection.is_empty() || self.open {
            return false;
        }
        self.open = true;
        self.front = selection.to_string();
        self.back.clear();
        self.notice = None;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_front(&mut self, value: String) {
        self.front = value;
    }

    pub fn set_back(&mut self, value: String) {
        self.back = value;
    }

    /// Start saving. Returns the draft to submit, or `None` if a field is blank
    /// or a save is already running.
    pub fn begin_save(&mut self) -> Option<QuickCardDraft> {
        if self.saving {
            return None;
        }
        if self.front.trim().is_empty() || self.back.trim().is_empty() {
            self.notice = Some(QuickAddNotice::MissingTranslation);
            return None;
        }
        self.saving = true;
        self.notice = None;
        Some(QuickCardDraft::new(self.front.clone(), self.back.clone()))
    }

    pub fn finish_save(&mut self, result: &Result<(), QuickAddError>) {
        self.saving = false;
        self.notice = Some(match result {
            Ok(()) => {
                self.open = false;
                QuickAddNotice::Saved
            }
            Err(QuickAddError::Draft(_)) => QuickAddNotice::MissingTranslation,
            Err(_) => QuickAddNotice::SaveFailed,
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    #[must_use]
    pub fn front(&self) -> &str {
        &self.front
    }

    #[must_use]
    pub fn back(&self) -> &str {
        &self.back
    }

    #[must_use]
    pub fn notice(&self) -> Option<QuickAddNotice> {
        self.notice
    }

    #[must_use]
    pub fn save_label(&self) -> &'static str {
        if self.saving { "Saving..." } else { "Save" }
    }
}
