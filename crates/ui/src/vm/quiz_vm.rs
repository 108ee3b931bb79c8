use flash_core::model::ChoiceMark;
use services::QuizEvent;

pub const LOADING_PROMPT: &str = "Building your quiz...";

/// Which quiz container is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuizPanel {
    #[default]
    Quiz,
    Results,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub label: String,
    pub mark: Option<ChoiceMark>,
}

impl ChoiceVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.mark {
            None => "quiz-choice",
            Some(ChoiceMark::Correct) => "quiz-choice quiz-choice--correct",
            Some(ChoiceMark::Incorrect) => "quiz-choice quiz-choice--incorrect",
        }
    }
}

/// Everything the quiz page shows, rebuilt from controller events.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct QuizScreen {
    pub panel: QuizPanel,
    pub prompt: String,
    pub choices: Vec<ChoiceVm>,
    pub score: u32,
    pub dimmed: bool,
    pub final_correct: u32,
    pub final_incorrect: u32,
    pub error_message: String,
}

impl QuizScreen {
    pub fn apply(&mut self, event: QuizEvent) {
        match event {
            QuizEvent::Loading => {
                self.panel = QuizPanel::Quiz;
                self.prompt = LOADING_PROMPT.to_string();
                self.choices.clear();
                self.score = 0;
                self.dimmed = true;
                self.error_message.clear();
            }
            QuizEvent::Question { prompt, choices } => {
                self.dimmed = false;
                self.prompt = prompt;
                self.choices = choices
                    .into_iter()
                    .map(|label| ChoiceVm { label, mark: None })
                    .collect();
            }
            QuizEvent::ChoiceMarked { index, mark } => {
                if let Some(choice) = self.choices.get_mut(index) {
                    choice.mark = Some(mark);
                }
            }
            QuizEvent::Score(score) => self.score = score,
            QuizEvent::Results { correct, incorrect } => {
                self.panel = QuizPanel::Results;
                self.final_correct = correct;
                self.final_incorrect = incorrect;
            }
            QuizEvent::Unavailable(message) => {
                self.dimmed = false;
                self.panel = QuizPanel::Error;
                self.error_message = message;
            }
            QuizEvent::ConnectionError(message) => {
                self.prompt = message;
            }
        }
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_with(events: Vec<QuizEvent>) -> QuizScreen {
        let mut screen = QuizScreen::default();
        for event in events {
            screen.apply(event);
        }
        screen
    }

    fn question() -> QuizEvent {
        QuizEvent::Question {
            prompt: "dog".to_string(),
            choices: vec!["cão".to_string(), "gato".to_string()],
        }
    }

    #[test]
    fn loading_resets_and_dims() {
        let mut screen = screen_with(vec![question(), QuizEvent::Score(3)]);
        screen.apply(QuizEvent::Loading);
        assert_eq!(screen.prompt, LOADING_PROMPT);
        assert!(screen.choices.is_empty());
        assert!(screen.dimmed);
        assert_eq!(screen.score_label(), "Score: 0");
    }

    #[test]
    fn marks_apply_to_rendered_choices_only() {
        let screen = screen_with(vec![
            QuizEvent::Loading,
            question(),
            QuizEvent::ChoiceMarked { index: 1, mark: ChoiceMark::Incorrect },
            QuizEvent::ChoiceMarked { index: 9, mark: ChoiceMark::Correct },
        ]);
        assert_eq!(screen.choices[0].class(), "quiz-choice");
        assert_eq!(screen.choices[1].class(), "quiz-choice quiz-choice--incorrect");
    }

    #[test]
    fn results_switch_panel() {
        let screen = screen_with(vec![
            QuizEvent::Loading,
            question(),
            QuizEvent::Results { correct: 2, incorrect: 1 },
        ]);
        assert_eq!(screen.panel, QuizPanel::Results);
        assert_eq!((screen.final_correct, screen.final_incorrect), (2, 1));
    }

    #[test]
    fn unavailable_shows_error_panel_verbatim() {
        let screen = screen_with(vec![
            QuizEvent::Loading,
            QuizEvent::Unavailable("no questions".to_string()),
        ]);
        assert_eq!(screen.panel, QuizPanel::Error);
        assert_eq!(screen.error_message, "no questions");
    }

    #[test]
    fn connection_error_stays_in_prompt_area() {
        let screen = screen_with(vec![
            QuizEvent::Loading,
            QuizEvent::ConnectionError("Could not connect to the server.".to_string()),
        ]);
        assert_eq!(screen.panel, QuizPanel::Quiz);
        assert_eq!(screen.prompt, "Could not connect to the server.");
    }
}
