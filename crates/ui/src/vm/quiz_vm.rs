use quiz_core::model::Answer;
use quiz_core::{Outcome, SessionSnapshot};
use services::QuizIntent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonTone {
    Neutral,
    Correct,
    Incorrect,
}

impl ButtonTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            ButtonTone::Neutral => "quiz-answer--neutral",
            ButtonTone::Correct => "quiz-answer--correct",
            ButtonTone::Incorrect => "quiz-answer--incorrect",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerButtonVm {
    pub answer: Answer,
    pub label: &'static str,
    pub id: &'static str,
    pub tone: ButtonTone,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub text: &'static str,
    pub class: &'static str,
    pub explanation: String,
}

/// Everything the quiz screen renders, derived from a snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub ended: bool,
    pub timer_label: String,
    pub score_label: String,
    pub progress_percent: u32,
    pub progress_label: String,
    pub prompt: String,
    pub answers: [AnswerButtonVm; 2],
    pub feedback: Option<FeedbackVm>,
    pub next_enabled: bool,
    pub verdict: Option<&'static str>,
}

impl From<&SessionSnapshot> for QuizVm {
    fn from(snapshot: &SessionSnapshot) -> Self {
        Self {
            ended: snapshot.ended,
            timer_label: format!("⏳ Timer: {} seconds", snapshot.remaining_seconds),
            score_label: format!("{} Score: {}", score_emoji(snapshot), snapshot.score),
            progress_percent: progress_percent(snapshot),
            progress_label: format!(
                "Question {} of {}",
                (snapshot.current_index + 1).min(snapshot.total),
                snapshot.total
            ),
            prompt: snapshot.prompt.clone().unwrap_or_default(),
            answers: Answer::ALL.map(|answer| answer_button(snapshot, answer)),
            feedback: feedback(snapshot),
            next_enabled: !snapshot.ended && snapshot.has_answered(),
            verdict: snapshot.verdict.map(quiz_core::Verdict::message),
        }
    }
}

/// Emoji shown next to the score; follows the latest answer of the run.
#[must_use]
pub fn score_emoji(snapshot: &SessionSnapshot) -> &'static str {
    match snapshot.last_outcome {
        None => "😊",
        Some(Outcome::Correct) => "🎉",
        Some(Outcome::Incorrect) => "😢",
    }
}

#[must_use]
pub fn progress_percent(snapshot: &SessionSnapshot) -> u32 {
    let percent = (snapshot.progress_fraction() * 100.0).round();
    percent.clamp(0.0, 100.0) as u32
}

/// Green for the chosen correct answer, red for a chosen wrong one.
#[must_use]
pub fn answer_tone(snapshot: &SessionSnapshot, answer: Answer) -> ButtonTone {
    match (snapshot.selected_answer, snapshot.correct_answer) {
        (Some(selected), Some(correct)) if selected == answer && correct == answer => {
            ButtonTone::Correct
        }
        (Some(selected), _) if selected == answer => ButtonTone::Incorrect,
        _ => ButtonTone::Neutral,
    }
}

fn answer_button(snapshot: &SessionSnapshot, answer: Answer) -> AnswerButtonVm {
    AnswerButtonVm {
        answer,
        label: answer.label(),
        id: match answer {
            Answer::Myth => "quiz-answer-myth",
            Answer::Fact => "quiz-answer-fact",
        },
        tone: answer_tone(snapshot, answer),
        disabled: snapshot.ended || snapshot.has_answered(),
    }
}

fn feedback(snapshot: &SessionSnapshot) -> Option<FeedbackVm> {
    let outcome = snapshot.outcome?;
    let (text, class) = match outcome {
        Outcome::Correct => ("Correct!", "quiz-feedback quiz-feedback--correct"),
        Outcome::Incorrect => ("Incorrect!", "quiz-feedback quiz-feedback--incorrect"),
    };
    Some(FeedbackVm {
        text,
        class,
        explanation: snapshot.explanation.clone().unwrap_or_default(),
    })
}

/// Keyboard shortcut for a key name as reported by the webview
/// (`"m"`, `"Enter"`, `"ArrowRight"`, ...).
#[must_use]
pub fn intent_for_key(key: &str, ended: bool) -> Option<QuizIntent> {
    if ended {
        return matches!(key, "r" | "R" | "Enter").then_some(QuizIntent::Restart);
    }
    match key {
        "m" | "M" => Some(QuizIntent::Select(Answer::Myth)),
        "f" | "F" => Some(QuizIntent::Select(Answer::Fact)),
        "Enter" | "ArrowRight" => Some(QuizIntent::Next),
        _ => None,
    }
}
