use anyhow::Context;
use deco_config::DecoConfig;
use deco_core::Bound;
use deco_wrap::PipelineKind;

use crate::cli::Cli;

/// What a single run computes, after flags are layered over config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub bound: Bound,
    pub pipeline: PipelineKind,
}

pub fn load_config() -> anyhow::Result<DecoConfig> {
    DecoConfig::load_with_dotenv().context("failed to load primes configuration")
}

/// Command-line flags win over configuration.
pub fn resolve(cli: &Cli, config: &DecoConfig) -> RunSettings {
    RunSettings {
        bound: cli.bound.unwrap_or(config.run.bound),
        pipeline: cli.pipeline.unwrap_or(config.run.pipeline),
    }
}
