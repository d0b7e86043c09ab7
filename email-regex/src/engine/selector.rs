use std::sync::OnceLock;

use tracing::{debug, warn};

use super::{Engine, FallbackEngine, Flags, SafeEngine};
use crate::{engine::EmailRegex, error::BuildError, error::LoadError};

/// Loads the safe engine. Called at most once per [`EngineSelector`].
pub type Loader = fn() -> Result<SafeEngine, LoadError>;

/// Whether the safe engine has been loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    /// Nobody has asked for the safe engine yet.
    Unknown,
    Available,
    /// Loading failed. Every later request gets the fallback engine without retrying.
    Unavailable,
}

/// Chooses between [`SafeEngine`] and [`FallbackEngine`], loading the safe engine lazily.
///
/// The load result is latched: once loading has failed the selector never tries again, so a
/// broken safe engine costs one probe per selector rather than one per compiled regex. Load
/// failures are logged, not returned.
///
/// Most code uses the process-wide [`EngineSelector::global()`]. A separate selector with its
/// own [`Loader`] is useful for tests or for isolating a subsystem.
///
/// # Example
/// ```
/// use email_regex::{
///     engine::{Availability, EngineKind, EngineSelector},
///     error::LoadError,
///     Config,
/// };
///
/// let selector = EngineSelector::new(|| Err(LoadError::Probe("simulated".into())));
/// assert_eq!(selector.availability(), Availability::Unknown);
///
/// let re = Config::default().compile_with(&selector).unwrap();
/// assert_eq!(re.engine(), EngineKind::Fallback);
/// assert_eq!(selector.availability(), Availability::Unavailable);
/// ```
#[derive(Debug)]
pub struct EngineSelector {
    loader: Loader,
    safe: OnceLock<Option<SafeEngine>>,
}

static GLOBAL: EngineSelector = EngineSelector::new(SafeEngine::load);

impl EngineSelector {
    pub const fn new(loader: Loader) -> Self {
        Self {
            loader,
            safe: OnceLock::new(),
        }
    }

    /// The selector shared by the whole process, loading with [`SafeEngine::load`].
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    pub fn availability(&self) -> Availability {
        match self.safe.get() {
            None => Availability::Unknown,
            Some(Some(_)) => Availability::Available,
            Some(None) => Availability::Unavailable,
        }
    }

    /// Returns the safe engine, loading it on first use.
    ///
    /// Concurrent first calls block until one of them has finished loading, and all observe
    /// the same result.
    pub fn safe_engine(&self) -> Option<&SafeEngine> {
        self.safe
            .get_or_init(|| match (self.loader)() {
                Ok(engine) => {
                    debug!("safe engine loaded");
                    Some(engine)
                }
                Err(e) => {
                    warn!(error = %e, "safe engine unavailable, using fallback engine from now on");
                    None
                }
            })
            .as_ref()
    }

    /// Picks the engine for one compilation.
    ///
    /// With `use_safe_engine` false the safe engine is not loaded at all.
    pub fn select(&self, use_safe_engine: bool) -> &dyn Engine {
        if use_safe_engine {
            if let Some(engine) = self.safe_engine() {
                return engine;
            }
        }
        &FallbackEngine
    }

    /// Compiles `pattern` with the selected engine.
    ///
    /// If the safe engine rejects this particular pattern, the fallback engine gets a try
    /// before an error is returned. That doesn't affect [`availability`](Self::availability).
    pub fn compile(
        &self,
        pattern: &str,
        flags: Flags,
        use_safe_engine: bool,
    ) -> Result<EmailRegex, BuildError> {
        let engine = self.select(use_safe_engine);
        match engine.compile(pattern, flags) {
            Ok(re) => Ok(re),
            Err(e) if engine.kind() == super::EngineKind::Safe => {
                warn!(error = %e, "safe engine rejected pattern, retrying with fallback engine");
                FallbackEngine.compile(pattern, flags)
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for EngineSelector {
    fn default() -> Self {
        Self::new(SafeEngine::load)
    }
}
