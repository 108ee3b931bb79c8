mod controller;
mod presenter;

pub use controller::{ADVANCE_DELAY, CONNECTION_ERROR_MESSAGE, QuizController, SubmitOutcome};
pub use presenter::{QuizEvent, QuizPresenter, RecordingPresenter};
