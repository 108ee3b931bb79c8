use std::sync::Arc;

use crate::error::ApiError;
use crate::sources::{ReviewCard, ReviewSource};

/// Fetches cards for the flip widget.
#[derive(Clone)]
pub struct ReviewService {
    source: Arc<dyn ReviewSource>,
}

impl ReviewService {
    #[must_use]
    pub fn new(source: Arc<dyn ReviewSource>) -> Self {
        Self { source }
    }

    /// Ask the backend for a random card.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport, status, or decode failures. An empty deck
    /// is not an error and comes back as `ReviewCard::Empty`.
    pub async fn next_card(&self) -> Result<ReviewCard, ApiError> {
        match self.source.fetch_review_card().await {
            Ok(card) => {
                if let ReviewCard::Empty(message) = &card {
                    log::info!("nothing to review: {message}");
                }
                Ok(card)
            }
            Err(err) => {
                log::error!("failed to load review card: {err}");
                Err(err)
            }
        }
    }
}
