use std::sync::Mutex;

use flash_core::model::ChoiceMark;
use tokio::sync::mpsc::UnboundedSender;

/// Rendering instruction emitted by the quiz controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// A new session is fetching its batch: reset score, clear choices.
    Loading,
    Question {
        prompt: String,
        choices: Vec<String>,
    },
    ChoiceMarked {
        index: usize,
        mark: ChoiceMark,
    },
    Score(u32),
    Results {
        correct: u32,
        incorrect: u32,
    },
    /// The server declined to build a quiz; shown in the dedicated error view.
    Unavailable(String),
    /// Transport failure; shown in place of the prompt.
    ConnectionError(String),
}

/// Presentation seam for the quiz controller.
///
/// Called while the controller holds its session lock, so implementations must
/// not call back into the controller.
pub trait QuizPresenter: Send + Sync {
    fn present(&self, event: QuizEvent);
}

impl QuizPresenter for UnboundedSender<QuizEvent> {
    fn present(&self, event: QuizEvent) {
        // A closed receiver means the view is gone; nothing left to render.
        let _ = self.send(event);
    }
}

/// Presenter that keeps every event, for tests and diagnostics.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    events: Mutex<Vec<QuizEvent>>,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<QuizEvent> {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<QuizEvent> {
        self.events().pop()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clear();
    }
}

impl QuizPresenter for RecordingPresenter {
    fn present(&self, event: QuizEvent) {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(event);
    }
}
