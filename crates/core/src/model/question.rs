use serde::{Deserialize, Serialize};

/// One multiple-choice question as supplied by the quiz backend.
///
/// The record is opaque to the client: choices are kept in server order, are not
/// deduplicated, and `correct_choice` is not required to appear among them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(rename = "pergunta")]
    prompt: String,
    #[serde(rename = "alternativas")]
    choices: Vec<String>,
    #[serde(rename = "resposta_correta")]
    correct_choice: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        choices: Vec<String>,
        correct_choice: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            choices,
            correct_choice: correct_choice.into(),
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn correct_choice(&self) -> &str {
        &self.correct_choice
    }

    #[must_use]
    pub fn choice(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(String::as_str)
    }

    /// Exact value comparison against the correct choice.
    #[must_use]
    pub fn is_correct(&self, value: &str) -> bool {
        value == self.correct_choice
    }

    /// Indices of every choice whose value equals the correct choice.
    ///
    /// Empty when the record is inconsistent (the correct value is not offered).
    #[must_use]
    pub fn correct_indices(&self) -> Vec<usize> {
        self.choices
            .iter()
            .enumerate()
            .filter(|(_, choice)| self.is_correct(choice))
            .map(|(index, _)| index)
            .collect()
    }
}
