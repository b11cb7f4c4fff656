//! Time source of the animation.
//!
//! [`PhaseClock`] is the bare cyclic counter. [`AnimationClock`] owns the
//! periodic timer that advances it: every tick advances the phase, rebuilds
//! the [`Frame`] and hands it to a [`FrameSink`]. The timer task belongs to
//! the handle; `stop` (or dropping the handle) releases it, and no frame is
//! delivered once `stop` has returned.

use crate::constants::TICK_INTERVAL;
use crate::frame::Frame;
use crate::layout::ConvectionLayout;
use crate::phase::Phase;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

/// Cyclic phase counter with no timing of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseClock {
    phase: Phase,
    ticks: u64,
}

impl PhaseClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(phase: Phase) -> Self {
        Self { phase, ticks: 0 }
    }

    /// Advances one degree, wrapping at 360, and returns the new phase.
    pub fn tick(&mut self) -> Phase {
        self.ticks = self.ticks.saturating_add(1);
        self.phase.advance()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Ticks taken since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Receiver of freshly generated frames.
///
/// Called on the timer task, once per tick, and never concurrently with itself.
pub trait FrameSink: Send + 'static {
    fn on_frame(&mut self, frame: &Frame);
}

impl<F> FrameSink for F
where
    F: FnMut(&Frame) + Send + 'static,
{
    fn on_frame(&mut self, frame: &Frame) {
        self(frame)
    }
}

/// Owned handle to a running animation timer.
#[derive(Debug)]
pub struct AnimationClock {
    task: Option<JoinHandle<()>>,
    phase_rx: watch::Receiver<Phase>,
    period: Duration,
}

impl AnimationClock {
    /// Starts ticking every [`TICK_INTERVAL`] from phase 0.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start<S: FrameSink>(layout: ConvectionLayout, sink: S) -> Self {
        Self::start_with(TICK_INTERVAL, PhaseClock::new(), layout, sink)
    }

    /// Starts ticking every `period` from the given clock state. The first
    /// advance happens one full period after the call.
    pub fn start_with<S: FrameSink>(
        period: Duration,
        clock: PhaseClock,
        layout: ConvectionLayout,
        mut sink: S,
    ) -> Self {
        let period = if period.is_zero() {
            warn!("zero tick period requested, falling back to {:?}", TICK_INTERVAL);
            TICK_INTERVAL
        } else {
            period
        };

        let (phase_tx, phase_rx) = watch::channel(clock.phase());

        let task = tokio::spawn(async move {
            let mut clock = clock;
            let mut timer = interval(period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // the first tick of a tokio interval completes immediately
            timer.tick().await;

            loop {
                timer.tick().await;
                let phase = clock.tick();
                let frame = Frame::generate_with(phase, &layout);
                sink.on_frame(&frame);
                debug!(phase = phase.degrees(), ticks = clock.ticks(), "frame generated");
                // the handle keeps a receiver alive for the task's whole life
                let _ = phase_tx.send(phase);
            }
        });

        info!(period_ms = period.as_millis() as u64, "animation clock started");

        AnimationClock {
            task: Some(task),
            phase_rx,
            period,
        }
    }

    /// Phase of the most recent tick.
    pub fn phase(&self) -> Phase {
        *self.phase_rx.borrow()
    }

    /// A receiver notified on every tick.
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.phase_rx.clone()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancels the timer and waits for its task to wind down. Returns the
    /// last phase reached.
    pub async fn stop(mut self) -> Phase {
        if let Some(task) = self.task.take() {
            task.abort();
            // the task only ever ends by cancellation
            if let Err(err) = task.await {
                if !err.is_cancelled() {
                    warn!(error = %err, "animation task ended abnormally");
                }
            }
        }
        let phase = self.phase();
        info!(phase = phase.degrees(), "animation clock stopped");
        phase
    }
}

impl Drop for AnimationClock {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("animation clock dropped while running; timer aborted");
        }
    }
}
