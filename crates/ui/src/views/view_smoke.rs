use quiz_core::model::Answer;
use services::QuizIntent;

use super::test_harness::{bank, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(bank(&[Answer::Myth, Answer::Fact]));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Timer: 10 seconds"), "missing timer in {html}");
    assert!(html.contains("😊 Score: 0"), "missing score in {html}");
    assert!(html.contains("Q0"), "missing prompt in {html}");
    assert!(html.contains("Myth"), "missing myth button in {html}");
    assert!(html.contains("Fact"), "missing fact button in {html}");
    assert!(!html.contains("Correct!"), "feedback before answering in {html}");
    assert!(!html.contains("Because 0"), "explanation before answering in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_feedback_after_answer() {
    let mut harness = setup_view_harness(bank(&[Answer::Myth, Answer::Fact]));
    harness.rebuild();

    harness.handles.send(QuizIntent::Select(Answer::Myth));
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Correct!"), "missing feedback in {html}");
    assert!(html.contains("Because 0"), "missing explanation in {html}");
    assert!(html.contains("🎉 Score: 1"), "missing score in {html}");
    assert!(html.contains("quiz-answer--correct"), "missing green button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_final_verdict_and_restart() {
    let mut harness = setup_view_harness(bank(&[Answer::Fact]));
    harness.rebuild();

    harness.handles.send(QuizIntent::Select(Answer::Myth));
    harness.handles.send(QuizIntent::Next);
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("better luck next time!"), "missing verdict in {html}");
    assert!(html.contains("Play Again"), "missing restart in {html}");
    assert!(!html.contains("Timer:"), "timer visible after end in {html}");

    harness.handles.send(QuizIntent::Restart);
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("😊 Score: 0"), "score not reset in {html}");
    assert!(html.contains("Q0"), "first question missing after restart in {html}");
}
