//! Pipeline shapes and the builder that nests wrappers accordingly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::operation::{Operation, OperationExt};
use crate::report::Reporter;

/// Which wrappers to put around the base operation, outermost first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineKind {
    /// No instrumentation.
    Bare,
    /// `timed(op)`
    Timed,
    /// `logged(op)`
    Logged,
    /// `logged(timed(op))`
    #[default]
    LoggedTimed,
    /// `timed(logged(op))`; the measurement includes the logging.
    TimedLogged,
}

impl PipelineKind {
    pub const ALL: [Self; 5] = [
        Self::Bare,
        Self::Timed,
        Self::Logged,
        Self::LoggedTimed,
        Self::TimedLogged,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bare => "bare",
            Self::Timed => "timed",
            Self::Logged => "logged",
            Self::LoggedTimed => "logged-timed",
            Self::TimedLogged => "timed-logged",
        }
    }
}

impl fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pipeline '{0}' (expected one of: bare, timed, logged, logged-timed, timed-logged)")]
pub struct UnknownPipeline(pub String);

impl FromStr for PipelineKind {
    type Err = UnknownPipeline;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPipeline(s.to_string()))
    }
}

/// Nest `base` inside the wrappers described by `kind`.
pub fn compose<'a, O, R>(kind: PipelineKind, base: O, reporter: R) -> Box<dyn Operation + 'a>
where
    O: Operation + 'a,
    R: Reporter + Clone + 'a,
{
    match kind {
        PipelineKind::Bare => base.boxed(),
        PipelineKind::Timed => base.timed(reporter).boxed(),
        PipelineKind::Logged => base.logged(reporter).boxed(),
        PipelineKind::LoggedTimed => base.timed(reporter.clone()).logged(reporter).boxed(),
        PipelineKind::TimedLogged => base.logged(reporter.clone()).timed(reporter).boxed(),
    }
}
