//! # deco-wrap
//!
//! Decorators for single-argument counting operations.
//!
//! An [`Operation`] maps a [`Bound`](deco_core::Bound) to a count and carries
//! a display name. Wrappers are ordinary values that own exactly one inner
//! operation and implement [`Operation`] themselves, so they nest freely:
//!
//! ```
//! use deco_core::Bound;
//! use deco_wrap::{counting_operation, Operation, OperationExt, RecordingReporter};
//!
//! let reporter = RecordingReporter::default();
//! let op = counting_operation().timed(&reporter).logged(&reporter);
//!
//! assert_eq!(op.name(), "count_primes");
//! assert_eq!(op.invoke(Bound::new(10).unwrap()), 4);
//! assert_eq!(reporter.events().len(), 3);
//! ```
//!
//! Every wrapper reports through a [`Reporter`] and delegates `name()` to the
//! operation it wraps, so messages always refer to the innermost operation.
//! Nesting order decides the order of reported events and what a [`Timed`]
//! wrapper measures.

mod compose;
mod logging;
mod operation;
mod report;
mod timing;

pub use compose::{PipelineKind, UnknownPipeline, compose};
pub use logging::{Logged, logged};
pub use operation::{NamedOperation, Operation, OperationExt, counting_operation, named};
pub use report::{Event, RecordingReporter, Reporter, TracingReporter};
pub use timing::{Timed, timed};
