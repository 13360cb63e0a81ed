//! Wall-clock timing wrapper.

use std::time::Instant;

use deco_core::Bound;

use crate::operation::Operation;
use crate::report::{Event, Reporter};

/// Measures how long the wrapped operation takes and reports it after the call.
///
/// The measurement covers everything nested inside, so a `Timed` placed
/// outside a [`Logged`](crate::Logged) includes the logging work too.
#[derive(Debug, Clone)]
pub struct Timed<O, R> {
    inner: O,
    reporter: R,
}

impl<O: Operation, R: Reporter> Timed<O, R> {
    pub const fn new(inner: O, reporter: R) -> Self {
        Self { inner, reporter }
    }
}

impl<O: Operation, R: Reporter> Operation for Timed<O, R> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn invoke(&self, bound: Bound) -> u64 {
        let start = Instant::now();
        let count = self.inner.invoke(bound);
        let elapsed = start.elapsed();
        self.reporter.report(Event::Timed {
            operation: self.inner.name().to_owned(),
            elapsed,
        });
        count
    }
}

/// Wrap `inner` so every call is timed.
pub const fn timed<O: Operation, R: Reporter>(inner: O, reporter: R) -> Timed<O, R> {
    Timed::new(inner, reporter)
}
