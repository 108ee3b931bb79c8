use std::sync::Arc;

use flash_core::model::QuickCardDraft;

use crate::error::QuickAddError;
use crate::sources::CardSink;

/// Saves cards created from selected text.
#[derive(Clone)]
pub struct QuickAddService {
    sink: Arc<dyn CardSink>,
}

impl QuickAddService {
    #[must_use]
    pub fn new(sink: Arc<dyn CardSink>) -> Self {
        Self { sink }
    }

    /// Validate the draft and post it.
    ///
    /// # Errors
    ///
    /// Returns `QuickAddError::Draft` without contacting the server when a side is
    /// blank, `Rejected` when the server reports failure, and `Api` for transport errors.
    pub async fn save(&self, draft: QuickCardDraft) -> Result<(), QuickAddError> {
        let card = draft.validate()?;
        let accepted = self.sink.save_quick_card(&card).await?;
        if !accepted {
            log::warn!("server rejected quick card {:?}", card.front());
            return Err(QuickAddError::Rejected);
        }
        log::info!("saved quick card {:?}", card.front());
        Ok(())
    }
}
