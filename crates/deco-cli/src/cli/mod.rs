use clap::Parser;
use deco_core::Bound;
use deco_wrap::PipelineKind;

/// Top-level CLI parser for the `primes` binary.
///
/// Every flag is optional; with none given the binary counts the primes below
/// 100000 through `logged(timed(count_primes))`.
#[derive(Debug, Parser)]
#[command(
    name = "primes",
    version,
    about = "Count primes below a bound through timing and call-logging wrappers"
)]
pub struct Cli {
    /// Exclusive upper bound of the scan (overrides `run.bound`)
    #[arg(short, long, allow_negative_numbers = true)]
    pub bound: Option<Bound>,

    /// Wrapper nesting: bare, timed, logged, logged-timed, timed-logged
    #[arg(short, long)]
    pub pipeline: Option<PipelineKind>,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
