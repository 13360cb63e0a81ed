use clap::Parser;
use deco_wrap::TracingReporter;

mod bootstrap;
mod cli;
mod pipeline;

fn main() {
    if let Err(error) = run() {
        eprintln!("primes error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = bootstrap::load_config()?;
    init_tracing(cli.quiet, cli.verbose, &config.log.level)?;

    let settings = bootstrap::resolve(&cli, &config);
    pipeline::run(settings.pipeline, settings.bound, TracingReporter);
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
