mod flip_vm;
mod quick_add_vm;
mod quiz_vm;

pub use flip_vm::{FlipCardVm, LOAD_FAILED_TEXT, LOADING_TEXT, NO_CARD_HINT};
pub use quick_add_vm::{QuickAddNotice, QuickAddVm};
pub use quiz_vm::{ChoiceVm, LOADING_PROMPT, QuizPanel, QuizScreen};
