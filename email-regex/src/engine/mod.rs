/*!
Regex engines that compile a composed pattern into an [`EmailRegex`].

- [`SafeEngine`]: [`regex_automata::meta::Regex`]. Search time is linear in the haystack no
  matter how adversarial it is. Requires the `safe-engine` feature.
- [`FallbackEngine`]: [`fancy_regex::Regex`]. Always available.

Patterns from [`compose`](crate::compose) only use syntax both engines share, so the engines
return the same matches; only their worst-case performance differs.

[`EngineSelector`] decides which engine to use and remembers whether the safe engine could be
loaded.

## Example
```
use email_regex::engine::{Engine, EngineKind, FallbackEngine, Flags};

let re = FallbackEngine
    .compile("[a-z]+@[a-z]+", Flags::CASE_INSENSITIVE | Flags::GLOBAL)
    .unwrap();
assert_eq!(re.engine(), EngineKind::Fallback);
assert_eq!(re.find_all("a@b, C@D"), ["a@b", "C@D"]);
```
*/
mod regex;
mod selector;

use bitflags::bitflags;
use tracing::debug;

use crate::error::{BuildError, LoadError};

pub use regex::{EmailRegex, FindIter, Match};
pub use selector::{Availability, EngineSelector, Loader};

bitflags! {
    /// Compile flags, the `i` and `g` of a flag string like `"ig"`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// `i`: ASCII and Unicode case insensitivity.
        const CASE_INSENSITIVE = 1;
        /// `g`: report every non-overlapping match instead of only the first.
        const GLOBAL = 1 << 1;
    }
}

impl Flags {
    /// Parses a flag string. Unknown flags are ignored.
    ///
    /// ```
    /// use email_regex::engine::Flags;
    ///
    /// assert_eq!(Flags::parse("ig"), Flags::CASE_INSENSITIVE | Flags::GLOBAL);
    /// assert_eq!(Flags::parse("im"), Flags::CASE_INSENSITIVE);
    /// ```
    pub fn parse(flags: &str) -> Self {
        flags.chars().fold(Self::empty(), |acc, c| match c {
            'i' => acc | Self::CASE_INSENSITIVE,
            'g' => acc | Self::GLOBAL,
            _ => acc,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    Safe,
    Fallback,
}

/// Something that can turn a pattern string and [`Flags`] into an [`EmailRegex`].
pub trait Engine: crate::Sealed {
    fn kind(&self) -> EngineKind;

    fn compile(&self, pattern: &str, flags: Flags) -> Result<EmailRegex, BuildError>;
}

/// Compiles `(?:a)` when loaded to make sure the engine works at all.
#[cfg(feature = "safe-engine")]
const PROBE: &str = "(?:a)";

/// The linear-time engine.
#[derive(Debug, Clone)]
pub struct SafeEngine {
    #[cfg(feature = "safe-engine")]
    meta: regex_automata::meta::Config,
    #[cfg(not(feature = "safe-engine"))]
    _private: (),
}

impl SafeEngine {
    /// Loads the engine and runs its probe.
    ///
    /// This is the default [`Loader`]. It fails with [`LoadError::Disabled`] if the crate is
    /// built without the `safe-engine` feature.
    pub fn load() -> Result<Self, LoadError> {
        #[cfg(not(feature = "safe-engine"))]
        return Err(LoadError::Disabled);
        #[cfg(feature = "safe-engine")]
        {
            let engine = Self {
                meta: regex_automata::meta::Config::new(),
            };
            regex_automata::meta::Regex::builder()
                .configure(engine.meta.clone())
                .build(PROBE)
                .map_err(|e| LoadError::Probe(e.to_string()))?;
            Ok(engine)
        }
    }
}

impl crate::Sealed for SafeEngine {}

impl Engine for SafeEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Safe
    }

    fn compile(&self, pattern: &str, flags: Flags) -> Result<EmailRegex, BuildError> {
        #[cfg(not(feature = "safe-engine"))]
        return Err(LoadError::Disabled.into());
        #[cfg(feature = "safe-engine")]
        {
            use regex_automata::util::syntax;

            let re = regex_automata::meta::Regex::builder()
                .syntax(
                    syntax::Config::new()
                        .case_insensitive(flags.contains(Flags::CASE_INSENSITIVE)),
                )
                .configure(self.meta.clone())
                .build(pattern)?;
            debug!(engine = "safe", ?flags, len = pattern.len(), "compiled");
            Ok(EmailRegex::safe(re, pattern, flags))
        }
    }
}

/// The general-purpose engine, used when the safe one is unavailable or not wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackEngine;

impl crate::Sealed for FallbackEngine {}

impl Engine for FallbackEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Fallback
    }

    fn compile(&self, pattern: &str, flags: Flags) -> Result<EmailRegex, BuildError> {
        let re = fancy_regex::RegexBuilder::new(pattern)
            .case_insensitive(flags.contains(Flags::CASE_INSENSITIVE))
            .build()?;
        debug!(engine = "fallback", ?flags, len = pattern.len(), "compiled");
        Ok(EmailRegex::fallback(re, pattern, flags))
    }
}
