mod clock;
mod sw;

mod timed;


// Following is our public interface
pub use crate::clock::{Clock, WallClock};
pub use crate::sw::{InvalidState, Stopwatch};
pub use crate::timed::{timelog, Timed};

/// Returns a fresh, idle stopwatch over the system wall clock.
pub fn timer() -> Stopwatch {
    Stopwatch::new()
}
