use std::sync::Arc;

use services::{
    AppServices, QuickAddService, QuizController, QuizPresenter, QuizSource, ReviewService,
};

pub trait UiApp: Send + Sync {
    fn quiz_source(&self) -> Arc<dyn QuizSource>;
    fn review_service(&self) -> Arc<ReviewService>;
    fn quick_add_service(&self) -> Arc<QuickAddService>;
}

impl UiApp for AppServices {
    fn quiz_source(&self) -> Arc<dyn QuizSource> {
        AppServices::quiz_source(self)
    }

    fn review_service(&self) -> Arc<ReviewService> {
        self.review()
    }

    fn quick_add_service(&self) -> Arc<QuickAddService> {
        self.quick_add()
    }
}

#[derive(Clone)]
pub struct AppContext {
    quiz_source: Arc<dyn QuizSource>,
    review: Arc<ReviewService>,
    quick_add: Arc<QuickAddService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_source: app.quiz_source(),
            review: app.review_service(),
            quick_add: app.quick_add_service(),
        }
    }

    /// A controller for one quiz view, rendering into `presenter`.
    #[must_use]
    pub fn quiz_controller(&self, presenter: Arc<dyn QuizPresenter>) -> QuizController {
        QuizController::new(Arc::clone(&self.quiz_source), presenter)
    }

    #[must_use]
    pub fn review_service(&self) -> Arc<ReviewService> {
        Arc::clone(&self.review)
    }

    #[must_use]
    pub fn quick_add_service(&self) -> Arc<QuickAddService> {
        Arc::clone(&self.quick_add)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
