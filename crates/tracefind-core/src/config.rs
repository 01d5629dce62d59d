//! Search-path configuration.

use std::env;

/// The two independently configured search paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathKind {
    /// Trace (chromatogram) data files; `TRACE_PATH` in the environment.
    Trace,
    /// Experiment files; `EXP_PATH` in the environment.
    Experiment,
}

impl PathKind {
    /// Environment variable consulted when no value was set explicitly.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::Trace => "TRACE_PATH",
            Self::Experiment => "EXP_PATH",
        }
    }
}

/// Explicitly configured search paths with environment fallback.
///
/// Values are opaque strings; nothing is validated until a resolution
/// actually walks the path. Typically set once while wiring up a
/// [`Resolver`](crate::Resolver) and read on every call after that.
#[derive(Clone, Debug, Default)]
pub struct PathConfig {
    trace: Option<String>,
    experiment: Option<String>,
}

impl PathConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, kind: PathKind, value: impl Into<String>) {
        *self.slot(kind) = Some(value.into());
    }

    /// The explicitly set value, else the same-named environment
    /// variable, else `None`.
    pub fn get(&self, kind: PathKind) -> Option<String> {
        let explicit = match kind {
            PathKind::Trace => &self.trace,
            PathKind::Experiment => &self.experiment,
        };
        explicit
            .clone()
            .or_else(|| env::var(kind.env_var()).ok())
    }

    fn slot(&mut self, kind: PathKind) -> &mut Option<String> {
        match kind {
            PathKind::Trace => &mut self.trace,
            PathKind::Experiment => &mut self.experiment,
        }
    }
}
