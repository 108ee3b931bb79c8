use async_trait::async_trait;
use flash_core::model::{Flashcard, QuestionRecord, QuickCard};

use crate::error::{ApiError, QuizLoadError};

/// What `/revisar` handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewCard {
    Card(Flashcard),
    /// The server has nothing to review; carries its message.
    Empty(String),
}

/// Supplies the question batch for one quiz session.
#[async_trait]
pub trait QuizSource: Send + Sync {
    async fn fetch_questions(&self) -> Result<Vec<QuestionRecord>, QuizLoadError>;
}

/// Supplies a random card for the flip widget.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    async fn fetch_review_card(&self) -> Result<ReviewCard, ApiError>;
}

/// Accepts quick-add cards. Returns the server's success flag.
#[async_trait]
pub trait CardSink: Send + Sync {
    async fn save_quick_card(&self, card: &QuickCard) -> Result<bool, ApiError>;
}
