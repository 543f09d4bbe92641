use std::io::{self, Write};

use crate::clock::{Clock, WallClock};
use crate::sw::Stopwatch;

/// Wraps a callable so every invocation is timed and reported as one
/// line, `{name}: {elapsed} sec`, on the output sink. Reports go to
/// stdout unless redirected with [`Timed::with_output`].
///
/// A callable of several logical arguments takes them as one tuple.
pub struct Timed<F, C = WallClock, W = io::Stdout> {
    name: String,
    func: F,
    clock: C,
    out: W,
}

impl<F> Timed<F> {
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
            clock: WallClock,
            out: io::stdout(),
        }
    }
}

impl<F, C, W> Timed<F, C, W> {
    pub fn with_clock<D: Clock>(self, clock: D) -> Timed<F, D, W> {
        Timed {
            name: self.name,
            func: self.func,
            clock,
            out: self.out,
        }
    }

    pub fn with_output<V: Write>(self, out: V) -> Timed<F, C, V> {
        Timed {
            name: self.name,
            func: self.func,
            clock: self.clock,
            out,
        }
    }

    /// Invokes the wrapped callable with `args`, timing the call. The
    /// report line carries the finalized stop value and is written
    /// after the call finishes, on the unwind path too; a panic keeps
    /// propagating once the line is out, and return values pass
    /// through untouched.
    pub fn call<A, R>(&mut self, args: A) -> R
    where
        F: FnMut(A) -> R,
        C: Clock + Clone,
        W: Write,
    {
        let Self {
            name,
            func,
            clock,
            out,
        } = self;
        let mut sw = Stopwatch::with_clock(clock.clone());
        sw.start();
        let _report = Report {
            sw,
            name: name.as_str(),
            out,
        };
        func(args)
    }
}

struct Report<'a, C: Clock, W: Write> {
    sw: Stopwatch<C>,
    name: &'a str,
    out: &'a mut W,
}

impl<C: Clock, W: Write> Drop for Report<'_, C, W> {
    fn drop(&mut self) {
        if let Ok(elapsed) = self.sw.stop() {
            // Write errors are discarded, a report is best effort.
            let _ = writeln!(self.out, "{}: {} sec", self.name, elapsed);
        }
    }
}

/// Decorator form: wraps `func` into a closure of the same calling
/// shape that reports every invocation on stdout.
pub fn timelog<A, R, F>(name: impl Into<String>, func: F) -> impl FnMut(A) -> R
where
    F: FnMut(A) -> R,
{
    let mut timed = Timed::new(name, func);
    move |args| timed.call(args)
}
