use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuickCardError {
    #[error("front text must not be empty")]
    EmptyFront,
    #[error("translation must not be empty")]
    EmptyBack,
}

/// Unvalidated input from the quick-add form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickCardDraft {
    pub front: String,
    pub back: String,
}

impl QuickCardDraft {
    #[must_use]
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    /// # Errors
    ///
    /// Returns `QuickCardError` when either side is blank.
    pub fn validate(self) -> Result<QuickCard, QuickCardError> {
        let front = self.front.trim();
        if front.is_empty() {
            return Err(QuickCardError::EmptyFront);
        }
        let back = self.back.trim();
        if back.is_empty() {
            return Err(QuickCardError::EmptyBack);
        }
        Ok(QuickCard {
            front: front.to_string(),
            back: back.to_string(),
        })
    }
}

/// A card ready to be posted to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickCard {
    #[serde(rename = "frente")]
    front: String,
    #[serde(rename = "verso")]
    back: String,
}

impl QuickCard {
    #[must_use]
    pub fn front(&self) -> &str {
        &self.front
    }

    #[must_use]
    pub fn back(&self) -> &str {
        &self.back
    }
}
