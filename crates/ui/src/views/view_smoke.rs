use flash_core::model::{Flashcard, QuestionRecord};
use services::ReviewCard;

use super::test_harness::{StubBackend, ViewKind, setup_view_harness};

fn backend(questions: Result<Vec<QuestionRecord>, String>) -> StubBackend {
    StubBackend {
        questions,
        review: ReviewCard::Card(Flashcard::new("dog", "cão", "Inglês")),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let question = QuestionRecord::new(
        "house",
        vec!["casa".to_string(), "carro".to_string()],
        "casa",
    );
    let mut harness = setup_view_harness(ViewKind::Quiz, backend(Ok(vec![question])));
    harness.rebuild();

    let html = harness.render_until("house").await;
    assert!(html.contains("house"), "missing prompt in {html}");
    assert!(html.contains("casa"), "missing choice in {html}");
    assert!(html.contains("carro"), "missing choice in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_unavailable_message() {
    let mut harness =
        setup_view_harness(ViewKind::Quiz, backend(Err("no questions".to_string())));
    harness.rebuild();

    let html = harness.render_until("no questions").await;
    assert!(html.contains("error-message"), "missing error view in {html}");
    assert!(!html.contains("question-text"), "quiz still visible in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_results_for_empty_batch() {
    let mut harness = setup_view_harness(ViewKind::Quiz, backend(Ok(Vec::new())));
    harness.rebuild();

    let html = harness.render_until("end-screen").await;
    assert!(html.contains("final-correct"), "missing correct count in {html}");
    assert!(html.contains("final-incorrect"), "missing incorrect count in {html}");
    assert!(html.contains("Play again"), "missing restart action in {html}");
    assert!(!html.contains("question-text"), "quiz still visible in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn review_view_smoke_renders_card_front() {
    let mut harness = setup_view_harness(ViewKind::Review, backend(Ok(Vec::new())));
    harness.rebuild();

    let html = harness.render_until("Language: Inglês").await;
    assert!(html.contains("dog"), "missing front in {html}");
    assert!(html.contains("Next card"), "missing action in {html}");
}
