mod quiz_vm;

pub use quiz_vm::{
    AnswerButtonVm, ButtonTone, FeedbackVm, QuizVm, answer_tone, intent_for_key,
    progress_percent, score_emoji,
};
