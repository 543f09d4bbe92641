use std::time::{SystemTime, UNIX_EPOCH};

/// Source of wall-clock readings in seconds since some fixed epoch.
///
/// Nothing here requires monotonicity: if the underlying clock is
/// adjusted backward between two readings, an elapsed time computed
/// from them comes out negative.
pub trait Clock {
    fn now(&self) -> f64;
}

/// The system wall clock, read relative to the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now(&self) -> f64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs_f64(),
            // Clock set before the epoch, count down from it.
            Err(e) => -e.duration().as_secs_f64(),
        }
    }
}
