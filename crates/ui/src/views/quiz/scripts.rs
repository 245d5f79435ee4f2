use quiz_core::Outcome;

/// Short tone played through the webview's Web Audio API when an answer lands.
pub(super) fn cue_script(outcome: Outcome) -> String {
    let (wave, frequency, seconds) = match outcome {
        Outcome::Correct => ("sine", 880, 0.18),
        Outcome::Incorrect => ("square", 196, 0.35),
    };
    format!(
        r#"(function() {{
                const Ctx = window.AudioContext || window.webkitAudioContext;
                if (!Ctx) return;
                const ctx = window.__quizCueAudio || (window.__quizCueAudio = new Ctx());
                const osc = ctx.createOscillator();
                const gain = ctx.createGain();
                const now = ctx.currentTime;
                osc.type = {wave:?};
                osc.frequency.value = {frequency};
                gain.gain.setValueAtTime(0.2, now);
                gain.gain.exponentialRampToValueAtTime(0.001, now + {seconds});
                osc.connect(gain);
                gain.connect(ctx.destination);
                osc.start(now);
                osc.stop(now + {seconds});
            }})();"#,
    )
}

pub(super) const FOCUS_ROOT_SCRIPT: &str = r#"document.getElementById("quiz-root")?.focus();"#;
