use log::trace;
use thiserror::Error;

use crate::clock::{Clock, WallClock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidState {
    #[error("stopwatch was never started")]
    NotStarted,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Idle,
    Running { started: f64 },
    Stopped { started: f64, elapsed: f64 },
}

/// Measures elapsed wall-clock time between a start event and either a
/// stop event or the current instant. Durations are plain differences
/// of two clock readings, in seconds.
#[derive(Debug)]
pub struct Stopwatch<C: Clock = WallClock> {
    clock: C,
    state: State,
}

impl Stopwatch<WallClock> {
    pub fn new() -> Self {
        Self::with_clock(WallClock)
    }
}

impl Default for Stopwatch<WallClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: State::Idle,
        }
    }

    /// Opens a new measurement window at the current clock reading.
    /// Calling it again discards the previous window and starts over.
    pub fn start(&mut self) {
        let started = self.clock.now();
        trace!("stopwatch started at {}", started);
        self.state = State::Running { started };
    }

    /// Finalizes the elapsed time and returns it. The value is frozen
    /// from here on; `elapsed()` keeps returning it no matter how much
    /// real time passes. Stopping a second time recomputes against the
    /// original start reading.
    pub fn stop(&mut self) -> Result<f64, InvalidState> {
        let started = self.started()?;
        let elapsed = self.clock.now() - started;
        trace!("stopwatch stopped after {} sec", elapsed);
        self.state = State::Stopped { started, elapsed };
        Ok(elapsed)
    }

    /// The frozen duration once stopped, a live reading while running.
    /// Polling a running watch consumes one clock reading per call and
    /// does not change its state.
    pub fn elapsed(&self) -> Result<f64, InvalidState> {
        match self.state {
            State::Idle => Err(InvalidState::NotStarted),
            State::Running { started } => Ok(self.clock.now() - started),
            State::Stopped { elapsed, .. } => Ok(elapsed),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running { .. })
    }

    /// Runs `body` inside a start/stop pair. The stop is unconditional:
    /// it also runs when `body` unwinds, so exactly one stop pairs with
    /// the start on every exit path and the watch ends up finalized.
    pub fn scoped<T>(&mut self, body: impl FnOnce(&mut Self) -> T) -> T {
        self.start();
        let guard = StopGuard(self);
        body(&mut *guard.0)
    }

    fn started(&self) -> Result<f64, InvalidState> {
        match self.state {
            State::Idle => Err(InvalidState::NotStarted),
            State::Running { started } | State::Stopped { started, .. } => Ok(started),
        }
    }
}

struct StopGuard<'a, C: Clock>(&'a mut Stopwatch<C>);

impl<C: Clock> Drop for StopGuard<'_, C> {
    fn drop(&mut self) {
        // The scoped form only guarantees finalization, the duration
        // itself stays queryable through elapsed().
        let _ = self.0.stop();
    }
}
