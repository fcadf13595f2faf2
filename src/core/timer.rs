//! Game timing.
//!
//! The timer accumulates wall-clock deltas between cooperative ticks posted
//! by the host event loop at [`TICK_INTERVAL`] cadence. Because it sums
//! deltas rather than counting ticks it tolerates drift; a suspended host
//! simply posts one large lump delta at the next resumed tick.
//!
//! The timer starts on the first move of a game, not on the deal, and
//! stopping it freezes the elapsed time.

use std::time::{Duration, Instant};

/// Cadence at which the host event loop should post ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Accumulating wall-clock timer for one game.
#[derive(Clone, Debug, Default)]
pub struct GameTimer {
    elapsed: Duration,
    /// `Some` while running; holds the instant of the last tick.
    last_tick: Option<Instant>,
}

impl GameTimer {
    /// Create a stopped timer at zero elapsed time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the timer at `now`. Elapsed time is kept.
    pub fn start(&mut self, now: Instant) {
        self.last_tick = Some(now);
    }

    /// Stop the timer, freezing the elapsed time.
    pub fn stop(&mut self) {
        self.last_tick = None;
    }

    /// Is the timer currently running?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.last_tick.is_some()
    }

    /// Post a tick. Adds the delta since the previous tick when running;
    /// ignored while stopped.
    pub fn tick(&mut self, now: Instant) {
        if let Some(last) = self.last_tick {
            self.elapsed += now.saturating_duration_since(last);
            self.last_tick = Some(now);
        }
    }

    /// Accumulated elapsed time.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Stop and zero the timer.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.last_tick = None;
    }
}
