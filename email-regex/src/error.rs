use thiserror::Error;

/// The safe engine could not be loaded.
///
/// [`EngineSelector`](crate::engine::EngineSelector) logs this once and falls back for the rest
/// of its lifetime. It is never returned by the build functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("the `safe-engine` feature is disabled")]
    Disabled,
    #[error("safe engine probe failed: {0}")]
    Probe(String),
}

/// An engine rejected a pattern.
///
/// Patterns are assembled from static fragments, so this only happens if a fragment is
/// malformed.
#[derive(Debug, Error)]
pub enum BuildError {
    #[cfg(feature = "safe-engine")]
    #[error("safe engine rejected the pattern: {0}")]
    Safe(#[from] regex_automata::meta::BuildError),
    #[error("fallback engine rejected the pattern: {0}")]
    Fallback(#[from] fancy_regex::Error),
    #[error(transparent)]
    Load(#[from] LoadError),
}
