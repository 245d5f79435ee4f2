//! Cancelable once-per-second tick source.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Interval between ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// One elapsed period, stamped with the timer run that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
}

/// Starts tick runs. Every run gets a fresh generation number so a consumer
/// can drop ticks that were already in flight when a run was cancelled.
#[derive(Debug)]
pub struct TickTimer {
    period: Duration,
    next_generation: u64,
}

impl TickTimer {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_generation: 0,
        }
    }

    /// Spawn a run that sends a [`Tick`] to `sink` every period.
    ///
    /// The first tick arrives one full period after the call. The run stops
    /// when the returned handle is cancelled or dropped, or when `sink` closes.
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, sink: UnboundedSender<Tick>) -> TimerHandle {
        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let period = self.period;

        tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    () = token.cancelled() => break,
                    _ = interval.tick() => {
                        if sink.send(Tick { generation }).is_err() {
                            break;
                        }
                    }
                }
            }
            tracing::trace!(generation, "tick run stopped");
        });

        TimerHandle { generation, cancel }
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

/// Owner of a running tick run. Dropping it cancels the run.
#[derive(Debug)]
pub struct TimerHandle {
    generation: u64,
    cancel: CancellationToken,
}

impl TimerHandle {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
