mod flashcard;
mod question;
mod quick_card;
mod session;

pub use flashcard::{CardSide, FlipState, Flashcard};
pub use question::QuestionRecord;
pub use quick_card::{QuickCard, QuickCardDraft, QuickCardError};
pub use session::{
    ChoiceMark, ScoredAnswer, SessionPhase, SessionSnapshot, SessionState, SessionStateError,
};
