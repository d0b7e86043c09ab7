use std::{ops::Range, sync::Arc};

use tracing::warn;

use super::{EngineKind, Flags};

/// A compiled email pattern.
///
/// Searches are stateless: unlike a JavaScript `RegExp` with the `g` flag, repeated calls to
/// [`is_match`](Self::is_match) on the same haystack always return the same result.
///
/// Cloning is cheap and clones may be used from different threads.
///
/// # Example
/// ```
/// use email_regex::Config;
///
/// let re = Config::default().compile().unwrap();
/// assert!(re.is_match("say hello@example.com now"));
/// assert_eq!(
///     re.find_all("fazboop <foo@bar.com> beep baz@boop.com"),
///     ["foo@bar.com", "baz@boop.com"]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct EmailRegex {
    imp: EmailRegexI,
    pattern: Arc<str>,
    flags: Flags,
}

#[derive(Clone, Debug)]
enum EmailRegexI {
    #[cfg(feature = "safe-engine")]
    Safe(regex_automata::meta::Regex),
    Fallback(fancy_regex::Regex),
}

impl EmailRegex {
    #[cfg(feature = "safe-engine")]
    pub(super) fn safe(re: regex_automata::meta::Regex, pattern: &str, flags: Flags) -> Self {
        Self {
            imp: EmailRegexI::Safe(re),
            pattern: pattern.into(),
            flags,
        }
    }

    pub(super) fn fallback(re: fancy_regex::Regex, pattern: &str, flags: Flags) -> Self {
        Self {
            imp: EmailRegexI::Fallback(re),
            pattern: pattern.into(),
            flags,
        }
    }

    /// The pattern this regex was compiled from, including anchors in exact mode.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Which engine compiled this regex.
    pub fn engine(&self) -> EngineKind {
        match &self.imp {
            #[cfg(feature = "safe-engine")]
            EmailRegexI::Safe(_) => EngineKind::Safe,
            EmailRegexI::Fallback(_) => EngineKind::Fallback,
        }
    }

    /// Returns true if the pattern matches anywhere in `haystack`.
    ///
    /// For an exact-mode regex this means the whole haystack is an address.
    pub fn is_match(&self, haystack: &str) -> bool {
        match &self.imp {
            #[cfg(feature = "safe-engine")]
            EmailRegexI::Safe(re) => re.is_match(haystack),
            EmailRegexI::Fallback(re) => re.is_match(haystack).unwrap_or_else(|e| {
                warn!(error = %e, "fallback engine gave up, treating as no match");
                false
            }),
        }
    }

    /// Returns the leftmost match in `haystack`, if any.
    pub fn find<'h>(&self, haystack: &'h str) -> Option<Match<'h>> {
        self.find_iter(haystack).next()
    }

    /// Returns an iterator over successive non-overlapping matches in `haystack`.
    ///
    /// Without [`Flags::GLOBAL`] the iterator stops after the first match.
    pub fn find_iter<'r, 'h>(&'r self, haystack: &'h str) -> FindIter<'r, 'h> {
        let imp = match &self.imp {
            #[cfg(feature = "safe-engine")]
            EmailRegexI::Safe(re) => FindIterI::Safe(re.find_iter(haystack)),
            EmailRegexI::Fallback(re) => FindIterI::Fallback(re.find_iter(haystack)),
        };
        FindIter {
            imp,
            haystack,
            single: !self.flags.contains(Flags::GLOBAL),
            done: false,
        }
    }

    /// Collects the text of every match, in order.
    pub fn find_all<'h>(&self, haystack: &'h str) -> Vec<&'h str> {
        self.find_iter(haystack).map(|m| m.as_str()).collect()
    }
}

/// A match found by [`EmailRegex`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Match<'h> {
    haystack: &'h str,
    start: usize,
    end: usize,
}

impl<'h> Match<'h> {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched address.
    pub fn as_str(&self) -> &'h str {
        &self.haystack[self.range()]
    }
}

/// Iterator returned by [`EmailRegex::find_iter`].
pub struct FindIter<'r, 'h> {
    imp: FindIterI<'r, 'h>,
    haystack: &'h str,
    single: bool,
    done: bool,
}

enum FindIterI<'r, 'h> {
    #[cfg(feature = "safe-engine")]
    Safe(regex_automata::meta::FindMatches<'r, 'h>),
    Fallback(fancy_regex::Matches<'r, 'h>),
}

impl<'r, 'h> Iterator for FindIter<'r, 'h> {
    type Item = Match<'h>;

    fn next(&mut self) -> Option<Match<'h>> {
        if self.done {
            return None;
        }
        let span = match &mut self.imp {
            #[cfg(feature = "safe-engine")]
            FindIterI::Safe(it) => it.next().map(|m| (m.start(), m.end())),
            FindIterI::Fallback(it) => match it.next() {
                Some(Ok(m)) => Some((m.start(), m.end())),
                Some(Err(e)) => {
                    warn!(error = %e, "fallback engine gave up, stopping search");
                    None
                }
                None => None,
            },
        };
        if span.is_none() || self.single {
            self.done = true;
        }
        span.map(|(start, end)| Match {
            haystack: self.haystack,
            start,
            end,
        })
    }
}
