use quiz_core::{QuizSession, SessionSnapshot, Transition};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use super::workflow::{QuizIntent, QuizLoopService};
use crate::timer::{TickTimer, TimerHandle};

/// Published after every transition that changed the session.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizUpdate {
    pub transition: Transition,
    pub snapshot: SessionSnapshot,
}

/// Event loop that owns a session while it is played.
///
/// Timer ticks and player intents are serialised onto a single `select!`
/// loop, so no two transitions ever run at the same time. The tick run is
/// cancelled when the quiz ends and replaced with a fresh one whenever a
/// question starts early (player "next" or restart), so every question gets
/// full seconds. Ticks left over from a cancelled run are dropped by generation.
pub struct QuizDriver {
    service: QuizLoopService,
    timer: TickTimer,
}

impl QuizDriver {
    #[must_use]
    pub fn new(service: QuizLoopService) -> Self {
        Self {
            service,
            timer: TickTimer::default(),
        }
    }

    /// Run `session` until `intents` closes, then hand it back.
    ///
    /// `on_update` is called after every accepted transition. Must be polled
    /// inside a tokio runtime.
    pub async fn run<F>(
        mut self,
        mut session: QuizSession,
        mut intents: UnboundedReceiver<QuizIntent>,
        mut on_update: F,
    ) -> QuizSession
    where
        F: FnMut(&QuizUpdate),
    {
        let (tick_tx, mut ticks) = mpsc::unbounded_channel();
        let mut active: Option<TimerHandle> =
            (!session.is_ended()).then(|| self.timer.start(tick_tx.clone()));

        loop {
            let transition = tokio::select! {
                biased;
                intent = intents.recv() => {
                    let Some(intent) = intent else { break };
                    self.service.apply(&mut session, intent)
                }
                Some(tick) = ticks.recv() => {
                    if active.as_ref().map(TimerHandle::generation) != Some(tick.generation) {
                        tracing::trace!(generation = tick.generation, "dropping stale tick");
                        continue;
                    }
                    self.service.tick(&mut session)
                }
            };

            match transition {
                Transition::Ignored => continue,
                Transition::Ended { .. } => {
                    if let Some(handle) = active.take() {
                        handle.cancel();
                    }
                }
                // A timeout advance already sits on a tick boundary.
                Transition::Restarted
                | Transition::Advanced {
                    timed_out: false, ..
                } => {
                    if let Some(handle) = active.take() {
                        handle.cancel();
                    }
                    active = Some(self.timer.start(tick_tx.clone()));
                }
                Transition::Ticked { .. }
                | Transition::Answered(_)
                | Transition::Advanced { timed_out: true, .. } => {}
            }

            on_update(&QuizUpdate {
                transition,
                snapshot: session.snapshot(),
            });
        }

        tracing::debug!("quiz driver stopped");
        session
    }
}
