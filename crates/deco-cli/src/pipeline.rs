//! Composition root: build the wrapped counter, run it once, report the result.

use deco_core::Bound;
use deco_wrap::{Event, Operation, PipelineKind, Reporter, compose, counting_operation};

/// Run `count_primes` below `bound` through the wrappers named by `kind`.
///
/// All four messages of a default run go through `reporter`, in order:
/// entering, timing, exiting, then the final count.
pub fn run<R>(kind: PipelineKind, bound: Bound, reporter: R) -> u64
where
    R: Reporter + Clone,
{
    let operation = compose(kind, counting_operation(), reporter.clone());
    tracing::debug!(pipeline = %kind, %bound, operation = operation.name(), "invoking pipeline");

    let count = operation.invoke(bound);
    reporter.report(Event::Finished { count });
    count
}
