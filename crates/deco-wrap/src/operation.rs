//! The operation capability and its named base implementation.

use std::borrow::Cow;
use std::fmt;

use deco_core::{Bound, count_primes};

use crate::logging::Logged;
use crate::report::Reporter;
use crate::timing::Timed;

/// Anything that turns a bound into a count.
pub trait Operation {
    /// Name used in diagnostics. Wrappers return the name of what they wrap.
    fn name(&self) -> &str;

    fn invoke(&self, bound: Bound) -> u64;
}

impl<T: Operation + ?Sized> Operation for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn invoke(&self, bound: Bound) -> u64 {
        (**self).invoke(bound)
    }
}

impl<T: Operation + ?Sized> Operation for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn invoke(&self, bound: Bound) -> u64 {
        (**self).invoke(bound)
    }
}

/// A function paired with the name it should be reported under.
#[derive(Clone)]
pub struct NamedOperation<F> {
    name: Cow<'static, str>,
    func: F,
}

impl<F> NamedOperation<F>
where
    F: Fn(Bound) -> u64,
{
    pub fn new(name: impl Into<Cow<'static, str>>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Operation for NamedOperation<F>
where
    F: Fn(Bound) -> u64,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&self, bound: Bound) -> u64 {
        (self.func)(bound)
    }
}

impl<F> fmt::Debug for NamedOperation<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedOperation")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`NamedOperation::new`].
pub fn named<F>(name: impl Into<Cow<'static, str>>, func: F) -> NamedOperation<F>
where
    F: Fn(Bound) -> u64,
{
    NamedOperation::new(name, func)
}

fn count_below(bound: Bound) -> u64 {
    count_primes(bound.get())
}

/// The undecorated prime counter, reported as `count_primes`.
#[must_use]
pub fn counting_operation() -> NamedOperation<fn(Bound) -> u64> {
    named("count_primes", count_below as fn(Bound) -> u64)
}

/// Adaptor methods so wrappers read inside-out, like iterator chains.
pub trait OperationExt: Operation + Sized {
    fn timed<R: Reporter>(self, reporter: R) -> Timed<Self, R> {
        Timed::new(self, reporter)
    }

    fn logged<R: Reporter>(self, reporter: R) -> Logged<Self, R> {
        Logged::new(self, reporter)
    }

    fn boxed<'a>(self) -> Box<dyn Operation + 'a>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<T: Operation> OperationExt for T {}
