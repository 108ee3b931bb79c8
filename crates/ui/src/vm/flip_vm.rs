use flash_core::model::{CardSide, FlipState, Flashcard};
use services::{ApiError, ReviewCard};

pub const LOADING_TEXT: &str = "Loading...";
pub const LOAD_FAILED_TEXT: &str = "Could not load the card.";
pub const NO_CARD_HINT: &str = "Click \"Next card\" to start!";

/// Flip widget state: which card, which side, and the texts on each face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlipCardVm {
    state: FlipState,
    front_text: String,
    back_text: String,
    language_label: String,
}

impl Default for FlipCardVm {
    fn default() -> Self {
        Self {
            state: FlipState::default(),
            front_text: LOADING_TEXT.to_string(),
            back_text: String::new(),
            language_label: String::new(),
        }
    }
}

impl FlipCardVm {
    /// Turn the card face up and show the loading text while the next card is fetched.
    pub fn begin_loading(&mut self) {
        self.state.clear();
        self.set_message(LOADING_TEXT);
    }

    pub fn apply(&mut self, result: Result<ReviewCard, ApiError>) {
        match result {
            Ok(ReviewCard::Card(card)) => self.card_loaded(card),
            Ok(ReviewCard::Empty(message)) => {
                self.state.clear();
                self.set_message(&message);
            }
            Err(_) => {
                self.state.clear();
                self.set_message(LOAD_FAILED_TEXT);
            }
        }
    }

    fn card_loaded(&mut self, card: Flashcard) {
        self.front_text = card.front().to_string();
        self.back_text = card.back().to_string();
        self.language_label = format!("Language: {}", card.language());
        self.state.show(card);
    }

    fn set_message(&mut self, message: &str) {
        self.front_text = message.to_string();
        self.back_text.clear();
        self.language_label.clear();
    }

    /// Turn the card over, or show a hint when nothing has been loaded.
    pub fn flip(&mut self) {
        if self.state.flip().is_none() {
            self.front_text = NO_CARD_HINT.to_string();
        }
    }

    #[must_use]
    pub fn side(&self) -> CardSide {
        self.state.side()
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.side() == CardSide::Back
    }

    #[must_use]
    pub fn front_text(&self) -> &str {
        &self.front_text
    }

    #[must_use]
    pub fn back_text(&self) -> &str {
        &self.back_text
    }

    #[must_use]
    pub fn language_label(&self) -> &str {
        &self.language_label
    }
}
