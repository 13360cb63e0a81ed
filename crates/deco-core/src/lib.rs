//! # deco-core
//!
//! The business logic that every instrumentation wrapper decorates:
//! - [`is_prime`]: trial division up to and including the integer square root
//! - [`count_primes`]: number of primes in `[0, bound)`
//! - [`Bound`]: validated, non-negative upper limit of a scan
//! - [`CoreError`]: errors raised while validating inputs
//!
//! Both functions are pure and total over `i64`; validation only happens at
//! the edges, when text or config values are turned into a [`Bound`].

pub mod bound;
pub mod errors;
pub mod primes;

pub use bound::Bound;
pub use errors::CoreError;
pub use primes::{count_primes, is_prime};
