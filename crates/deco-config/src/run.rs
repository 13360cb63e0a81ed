//! What to compute.

use deco_core::Bound;
use deco_wrap::PipelineKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RunConfig {
    /// Exclusive upper limit of the prime scan. Negative or non-integer
    /// values fail extraction with an `Invalid bound` message.
    #[serde(default)]
    pub bound: Bound,

    /// Wrapper nesting around the counting operation.
    #[serde(default)]
    pub pipeline: PipelineKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = RunConfig::default();
        assert_eq!(config.bound, Bound::DEFAULT);
        assert_eq!(config.pipeline, PipelineKind::LoggedTimed);
    }
}
