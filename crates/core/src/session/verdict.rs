/// End-of-quiz message tier chosen from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every question answered correctly.
    Perfect,
    /// Strictly more than half correct.
    Good,
    /// Half or fewer correct.
    TryAgain,
}

impl Verdict {
    /// Pick the tier for `score` out of `total` questions.
    ///
    /// Exactly half falls into `TryAgain`; the middle tier needs a strict majority.
    #[must_use]
    pub fn for_score(score: usize, total: usize) -> Self {
        if score == total {
            Verdict::Perfect
        } else if score.saturating_mul(2) > total {
            Verdict::Good
        } else {
            Verdict::TryAgain
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Perfect => "Amazing! You got all the questions right!",
            Verdict::Good => "Good job! You did well.",
            Verdict::TryAgain => "Don't worry, better luck next time!",
        }
    }
}
