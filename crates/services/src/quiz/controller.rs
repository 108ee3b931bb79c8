use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use flash_core::model::{QuestionRecord, ScoredAnswer, SessionSnapshot, SessionState};
use tokio::task::{AbortHandle, JoinHandle};

use super::presenter::{QuizEvent, QuizPresenter};
use crate::error::QuizLoadError;
use crate::sources::QuizSource;

/// Time the answer feedback stays on screen before the next question.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(1500);

pub const CONNECTION_ERROR_MESSAGE: &str = "Could not connect to the server.";

/// Result of a `submit_answer` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was not accepted: locked, not playing, or no such choice.
    Ignored,
    Answered(ScoredAnswer),
}

struct Inner {
    state: SessionState,
    generation: u64,
    torn_down: bool,
    pending_load: Option<AbortHandle>,
    pending_advance: Option<AbortHandle>,
}

impl Inner {
    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending_load.take() {
            handle.abort();
        }
        if let Some(handle) = self.pending_advance.take() {
            handle.abort();
        }
    }
}

/// Drives one quiz playthrough: fetch, render, score, advance, results.
///
/// Each session is tagged with a generation number. Restarting or tearing down
/// aborts the in-flight fetch and the pending advance, and bumps the generation
/// so a continuation that already woke up is discarded instead of touching the
/// new session.
///
/// Spawns onto the ambient tokio runtime; `start_session` and `submit_answer`
/// must be called from within one.
#[derive(Clone)]
pub struct QuizController {
    source: Arc<dyn QuizSource>,
    presenter: Arc<dyn QuizPresenter>,
    advance_delay: Duration,
    inner: Arc<Mutex<Inner>>,
}

impl QuizController {
    #[must_use]
    pub fn new(source: Arc<dyn QuizSource>, presenter: Arc<dyn QuizPresenter>) -> Self {
        Self {
            source,
            presenter,
            advance_delay: ADVANCE_DELAY,
            inner: Arc::new(Mutex::new(Inner {
                state: SessionState::new(),
                generation: 0,
                torn_down: false,
                pending_load: None,
                pending_advance: None,
            })),
        }
    }

    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reset to a fresh session and fetch its question batch.
    ///
    /// The returned handle completes once the batch has been applied (or the
    /// load was superseded). Awaiting it is optional.
    pub fn start_session(&self) -> JoinHandle<()> {
        let mut inner = self.lock();
        inner.cancel_pending();
        inner.generation += 1;
        inner.torn_down = false;
        inner.state = SessionState::new();
        let generation = inner.generation;
        log::info!("starting quiz session {generation}");
        self.presenter.present(QuizEvent::Loading);

        let controller = self.clone();
        let handle = tokio::spawn(async move {
            let result = controller.source.fetch_questions().await;
            controller.finish_load(generation, result);
        });
        inner.pending_load = Some(handle.abort_handle());
        handle
    }

    /// Score `choice` (an index into the current question's choices).
    ///
    /// Ignored while the previous answer is still on screen, so rapid repeated
    /// input counts once.
    pub fn submit_answer(&self, choice: usize) -> SubmitOutcome {
        let mut inner = self.lock();
        if inner.torn_down {
            log::debug!("answer ignored: session was torn down");
            return SubmitOutcome::Ignored;
        }
        let scored = match inner.state.answer(choice) {
            Ok(scored) => scored,
            Err(err) => {
                log::debug!("answer ignored: {err}");
                return SubmitOutcome::Ignored;
            }
        };

        if !scored.is_correct && scored.revealed.is_empty() {
            log::warn!(
                "question {} has no choice matching its correct answer",
                scored.question_index
            );
        }
        for (index, mark) in scored.marks() {
            self.presenter.present(QuizEvent::ChoiceMarked { index, mark });
        }
        self.presenter.present(QuizEvent::Score(scored.correct_count));

        let generation = inner.generation;
        let delay = self.advance_delay;
        let controller = self.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            controller.finish_advance(generation);
        });
        inner.pending_advance = Some(handle.abort_handle());

        SubmitOutcome::Answered(scored)
    }

    /// Cancel pending work; the session stops reacting to its continuations
    /// and to input until the next `start_session`.
    pub fn teardown(&self) {
        let mut inner = self.lock();
        inner.cancel_pending();
        inner.generation += 1;
        inner.torn_down = true;
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().state.snapshot()
    }

    fn finish_load(
        &self,
        generation: u64,
        result: Result<Vec<QuestionRecord>, QuizLoadError>,
    ) {
        let mut inner = self.lock();
        if inner.generation != generation {
            log::debug!("dropping stale quiz batch for session {generation}");
            return;
        }
        inner.pending_load = None;

        match result {
            Ok(questions) => {
                log::info!("quiz session {generation} loaded {} questions", questions.len());
                if let Err(err) = inner.state.load(questions) {
                    log::warn!("quiz batch not applied: {err}");
                    return;
                }
                self.render_current(&inner.state);
            }
            Err(QuizLoadError::Unavailable(message)) => {
                log::warn!("quiz unavailable: {message}");
                inner.state.fail();
                self.presenter.present(QuizEvent::Unavailable(message));
            }
            Err(QuizLoadError::Api(err)) => {
                log::error!("failed to load quiz: {err}");
                inner.state.fail();
                self.presenter.present(QuizEvent::ConnectionError(
                    CONNECTION_ERROR_MESSAGE.to_string(),
                ));
            }
        }
    }

    fn finish_advance(&self, generation: u64) {
        let mut inner = self.lock();
        if inner.generation != generation {
            return;
        }
        inner.pending_advance = None;
        match inner.state.advance() {
            Ok(_) => self.render_current(&inner.state),
            Err(err) => log::warn!("advance skipped: {err}"),
        }
    }

    fn render_current(&self, state: &SessionState) {
        if let Some(question) = state.current_question() {
            self.presenter.present(QuizEvent::Question {
                prompt: question.prompt().to_string(),
                choices: question.choices().to_vec(),
            });
        } else if state.is_finished() {
            log::info!(
                "quiz finished: {} correct, {} incorrect",
                state.correct_count(),
                state.incorrect_count()
            );
            self.presenter.present(QuizEvent::Results {
                correct: state.correct_count(),
                incorrect: state.incorrect_count(),
            });
        }
    }
}

impl fmt::Debug for QuizController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("QuizController")
            .field("advance_delay", &self.advance_delay)
            .field("generation", &inner.generation)
            .field("state", &inner.state.snapshot())
            .finish_non_exhaustive()
    }
}
