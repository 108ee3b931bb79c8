use thiserror::Error;

use crate::model::QuestionRecord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionStateError {
    #[error("questions were already loaded for this session")]
    AlreadyLoaded,

    #[error("session is not accepting answers")]
    NotPlaying,

    #[error("question {index} was already answered")]
    Locked { index: usize },

    #[error("choice {choice} is out of range ({len} choices)")]
    ChoiceOutOfRange { choice: usize, len: usize },

    #[error("current question has not been answered")]
    NotAnswered,
}

/// Coarse lifecycle of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Playing,
    Results,
    Failed,
}

/// Feedback highlight applied to a rendered choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMark {
    Correct,
    Incorrect,
}

/// Outcome of scoring one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredAnswer {
    pub question_index: usize,
    pub chosen: usize,
    pub is_correct: bool,
    /// Choices revealed as correct after a wrong pick. Empty on a right pick or
    /// when the correct value is not among the choices.
    pub revealed: Vec<usize>,
    pub correct_count: u32,
}

impl ScoredAnswer {
    /// Highlights to apply, chosen element first.
    #[must_use]
    pub fn marks(&self) -> Vec<(usize, ChoiceMark)> {
        let chosen_mark = if self.is_correct {
            ChoiceMark::Correct
        } else {
            ChoiceMark::Incorrect
        };
        std::iter::once((self.chosen, chosen_mark))
            .chain(self.revealed.iter().map(|index| (*index, ChoiceMark::Correct)))
            .collect()
    }
}

/// Copyable view of the counters, for callers outside the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub current_index: usize,
    pub total: usize,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub answer_locked: bool,
}

/// In-memory state of one quiz playthrough.
///
/// `current_index` only moves forward, one step per answered question. While an
/// answer is locked the counters already include it, so
/// `correct + incorrect == current_index + 1`; after [`SessionState::advance`]
/// the sum equals `current_index` again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    questions: Vec<QuestionRecord>,
    current_index: usize,
    correct_count: u32,
    incorrect_count: u32,
    answer_locked: bool,
    phase: SessionPhase,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Fresh, zeroed session waiting for its question batch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            current_index: 0,
            correct_count: 0,
            incorrect_count: 0,
            answer_locked: false,
            phase: SessionPhase::Loading,
        }
    }

    /// Store the fetched batch. An empty batch finishes the session immediately.
    ///
    /// # Errors
    ///
    /// Returns `SessionStateError::AlreadyLoaded` unless the session is still loading.
    pub fn load(
        &mut self,
        questions: Vec<QuestionRecord>,
    ) -> Result<SessionPhase, SessionStateError> {
        if self.phase != SessionPhase::Loading {
            return Err(SessionStateError::AlreadyLoaded);
        }
        self.questions = questions;
        self.phase = if self.questions.is_empty() {
            SessionPhase::Results
        } else {
            SessionPhase::Playing
        };
        Ok(self.phase)
    }

    /// Mark the session as failed to load. Has no effect once questions are loaded.
    pub fn fail(&mut self) {
        if self.phase == SessionPhase::Loading {
            self.phase = SessionPhase::Failed;
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn incorrect_count(&self) -> u32 {
        self.incorrect_count
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.answer_locked
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Results
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        if self.phase == SessionPhase::Playing {
            self.questions.get(self.current_index)
        } else {
            None
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            current_index: self.current_index,
            total: self.questions.len(),
            correct_count: self.correct_count,
            incorrect_count: self.incorrect_count,
            answer_locked: self.answer_locked,
        }
    }

    /// Score the chosen choice of the current question and lock further input.
    ///
    /// # Errors
    ///
    /// Returns `SessionStateError::Locked` while a previous answer awaits its advance,
    /// `NotPlaying` outside the playing phase and `ChoiceOutOfRange` for a bad index.
    pub fn answer(&mut self, choice: usize) -> Result<ScoredAnswer, SessionStateError> {
        if self.answer_locked {
            return Err(SessionStateError::Locked {
                index: self.current_index,
            });
        }
        let question = self
            .current_question()
            .ok_or(SessionStateError::NotPlaying)?;
        let chosen_value = question
            .choice(choice)
            .ok_or(SessionStateError::ChoiceOutOfRange {
                choice,
                len: question.choices().len(),
            })?;

        let is_correct = question.is_correct(chosen_value);
        let revealed = if is_correct {
            Vec::new()
        } else {
            question.correct_indices()
        };

        self.answer_locked = true;
        if is_correct {
            self.correct_count = self.correct_count.saturating_add(1);
        } else {
            self.incorrect_count = self.incorrect_count.saturating_add(1);
        }

        Ok(ScoredAnswer {
            question_index: self.current_index,
            chosen: choice,
            is_correct,
            revealed,
            correct_count: self.correct_count,
        })
    }

    /// Move past the answered question and reopen input.
    ///
    /// # Errors
    ///
    /// Returns `SessionStateError::NotAnswered` if the current question is not locked.
    pub fn advance(&mut self) -> Result<SessionPhase, SessionStateError> {
        if !self.answer_locked || self.phase != SessionPhase::Playing {
            return Err(SessionStateError::NotAnswered);
        }
        self.current_index += 1;
        self.answer_locked = false;
        if self.current_index >= self.questions.len() {
            self.phase = SessionPhase::Results;
        }
        Ok(self.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: &str) -> QuestionRecord {
        QuestionRecord::new(
            "prompt",
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            correct,
        )
    }

    fn playing(correct_answers: &[&str]) -> SessionState {
        let mut state = SessionState::new();
        state
            .load(correct_answers.iter().map(|c| question(c)).collect())
            .unwrap();
        state
    }

    #[test]
    fn new_session_is_zeroed_and_loading() {
        let state = SessionState::new();
        assert_eq!(state.phase(), SessionPhase::Loading);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.correct_count(), 0);
        assert_eq!(state.incorrect_count(), 0);
        assert!(!state.is_locked());
        assert!(state.current_question().is_none());
    }

    #[test]
    fn empty_batch_goes_straight_to_results() {
        let mut state = SessionState::new();
        assert_eq!(state.load(Vec::new()).unwrap(), SessionPhase::Results);
        assert!(state.is_finished());
    }

    #[test]
    fn load_twice_is_rejected() {
        let mut state = playing(&["a"]);
        assert_eq!(
            state.load(vec![question("a")]).unwrap_err(),
            SessionStateError::AlreadyLoaded
        );
    }

    #[test]
    fn locked_answer_does_not_change_counters() {
        let mut state = playing(&["a", "b"]);
        state.answer(0).unwrap();
        for _ in 0..4 {
            assert_eq!(
                state.answer(1).unwrap_err(),
                SessionStateError::Locked { index: 0 }
            );
        }
        assert_eq!(state.correct_count() + state.incorrect_count(), 1);
    }

    #[test]
    fn wrong_answer_reveals_correct_choice() {
        let mut state = playing(&["b"]);
        let scored = state.answer(2).unwrap();
        assert!(!scored.is_correct);
        assert_eq!(
            scored.marks(),
            vec![(2, ChoiceMark::Incorrect), (1, ChoiceMark::Correct)]
        );
        assert_eq!(state.incorrect_count(), 1);
    }

    #[test]
    fn inconsistent_question_reveals_nothing() {
        let mut state = playing(&["zzz"]);
        let scored = state.answer(0).unwrap();
        assert!(!scored.is_correct);
        assert!(scored.revealed.is_empty());
        assert_eq!(state.advance().unwrap(), SessionPhase::Results);
    }

    #[test]
    fn counters_track_index_across_advances() {
        let mut state = playing(&["a", "b", "c"]);
        for (choice, expected_index) in [(0, 1), (0, 2), (2, 3)] {
            let before = state.current_index();
            state.answer(choice).unwrap();
            state.advance().unwrap();
            assert_eq!(state.current_index(), before + 1);
            assert_eq!(state.current_index(), expected_index);
            let answered = (state.correct_count() + state.incorrect_count()) as usize;
            assert_eq!(answered, state.current_index());
        }
        assert!(state.is_finished());
        assert_eq!(state.correct_count(), 2);
        assert_eq!(state.incorrect_count(), 1);
        assert_eq!(state.answer(0).unwrap_err(), SessionStateError::NotPlaying);
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut state = playing(&["a"]);
        assert_eq!(state.advance().unwrap_err(), SessionStateError::NotAnswered);
    }

    #[test]
    fn out_of_range_choice_is_rejected_without_locking() {
        let mut state = playing(&["a"]);
        assert_eq!(
            state.answer(9).unwrap_err(),
            SessionStateError::ChoiceOutOfRange { choice: 9, len: 3 }
        );
        assert!(!state.is_locked());
    }

    #[test]
    fn fail_only_applies_while_loading() {
        let mut state = SessionState::new();
        state.fail();
        assert_eq!(state.phase(), SessionPhase::Failed);

        let mut state = playing(&["a"]);
        state.fail();
        assert_eq!(state.phase(), SessionPhase::Playing);
    }
}
