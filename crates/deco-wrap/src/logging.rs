//! Call-logging wrapper.

use deco_core::Bound;

use crate::operation::Operation;
use crate::report::{Event, Reporter};

/// Reports entry before and exit after delegating to the wrapped operation.
#[derive(Debug, Clone)]
pub struct Logged<O, R> {
    inner: O,
    reporter: R,
}

impl<O: Operation, R: Reporter> Logged<O, R> {
    pub const fn new(inner: O, reporter: R) -> Self {
        Self { inner, reporter }
    }
}

impl<O: Operation, R: Reporter> Operation for Logged<O, R> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn invoke(&self, bound: Bound) -> u64 {
        let operation = self.inner.name().to_owned();
        self.reporter.report(Event::Entering {
            operation: operation.clone(),
        });
        let count = self.inner.invoke(bound);
        self.reporter.report(Event::Exiting { operation });
        count
    }
}

/// Wrap `inner` so every call is logged on entry and exit.
pub const fn logged<O: Operation, R: Reporter>(inner: O, reporter: R) -> Logged<O, R> {
    Logged::new(inner, reporter)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::operation::{counting_operation, named};
    use crate::report::RecordingReporter;

    #[test]
    fn logs_entry_and_exit_around_the_call() {
        let reporter = RecordingReporter::default();
        let op = logged(counting_operation(), &reporter);

        assert_eq!(op.invoke(Bound::new(10).expect("valid bound")), 4);
        assert_eq!(
            reporter.messages(),
            vec![
                "Calling count_primes".to_string(),
                "Finished calling count_primes".to_string(),
            ]
        );
    }

    #[test]
    fn result_is_passed_through() {
        let reporter = RecordingReporter::default();
        let op = logged(named("constant", |_| 42), &reporter);
        assert_eq!(op.invoke(Bound::DEFAULT), 42);
        assert_eq!(op.name(), "constant");
    }
}
