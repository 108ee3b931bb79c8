use serde::{Deserialize, Serialize};

const DEFAULT_LANGUAGE: &str = "Inglês";

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// A stored flashcard as served for review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(rename = "frente")]
    front: String,
    #[serde(rename = "verso")]
    back: String,
    #[serde(rename = "idioma", default = "default_language")]
    language: String,
}

impl Flashcard {
    #[must_use]
    pub fn new(
        front: impl Into<String>,
        back: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            language: language.into(),
        }
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
    pub fn language(&self) -> &str {
        &self.language
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardSide {
    #[default]
    Front,
    Back,
}

impl CardSide {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            CardSide::Front => CardSide::Back,
            CardSide::Back => CardSide::Front,
        }
    }
}

/// Which card is on the review table and which side faces up.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlipState {
    card: Option<Flashcard>,
    side: CardSide,
}

impl FlipState {
    #[must_use]
    pub fn card(&self) -> Option<&Flashcard> {
        self.card.as_ref()
    }

    #[must_use]
    pub fn side(&self) -> CardSide {
        self.side
    }

    /// Put a new card down front side up.
    pub fn show(&mut self, card: Flashcard) {
        self.card = Some(card);
        self.side = CardSide::Front;
    }

    /// Remove the current card and reset to the front side.
    pub fn clear(&mut self) {
        self.card = None;
        self.side = CardSide::Front;
    }

    /// Turn the card over. Returns `None` when there is no card to flip.
    pub fn flip(&mut self) -> Option<CardSide> {
        self.card.as_ref()?;
        self.side = self.side.flipped();
        Some(self.side)
    }
}
