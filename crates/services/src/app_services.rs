use std::sync::Arc;

use crate::api_client::{ApiClient, ApiConfig};
use crate::error::ConfigError;
use crate::quick_add_service::QuickAddService;
use crate::review_service::ReviewService;
use crate::sources::{CardSink, QuizSource, ReviewSource};

/// Assembles app-facing services around one backend client.
#[derive(Clone)]
pub struct AppServices {
    quiz_source: Arc<dyn QuizSource>,
    review: Arc<ReviewService>,
    quick_add: Arc<QuickAddService>,
}

impl AppServices {
    /// Build services backed by the HTTP API.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the HTTP client cannot be created.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ConfigError> {
        let client = Arc::new(ApiClient::new(config)?);
        log::info!("using flashcard backend at {}", config.base_url);
        Ok(Self::from_parts(client.clone(), client.clone(), client))
    }

    /// Build services from explicit collaborators (tests, alternative backends).
    #[must_use]
    pub fn from_parts(
        quiz_source: Arc<dyn QuizSource>,
        review_source: Arc<dyn ReviewSource>,
        card_sink: Arc<dyn CardSink>,
    ) -> Self {
        Self {
            quiz_source,
            review: Arc::new(ReviewService::new(review_source)),
            quick_add: Arc::new(QuickAddService::new(card_sink)),
        }
    }

    #[must_use]
    pub fn quiz_source(&self) -> Arc<dyn QuizSource> {
        Arc::clone(&self.quiz_source)
    }

    #[must_use]
    pub fn review(&self) -> Arc<ReviewService> {
        Arc::clone(&self.review)
    }

    #[must_use]
    pub fn quick_add(&self) -> Arc<QuickAddService> {
        Arc::clone(&self.quick_add)
    }
}
