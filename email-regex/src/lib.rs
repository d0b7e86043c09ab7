/*!
Find email addresses in arbitrary text with a regular expression that can't be made to
backtrack catastrophically.

## Features
- Extraction-oriented grammar, tuned for recall on real-world text rather than for strict
  RFC 5322 validation.
  - Webmail (Gmail-style), Unicode or ASCII username rules.
  - `localhost`, IPv4 and IPv6 literals as domains.
  - Top-level domains from a whitelist (every ICANN TLD by default) or any alphabetic label.
- ReDoS resistance: patterns are compiled with a [linear-time engine](regex_automata::meta)
  when available, with a transparent [fallback](fancy_regex) otherwise. See [`engine`].
- The raw pattern string can be obtained for embedding into a larger pattern.
*/
//! ## Usage
//! ```
//! use email_regex::Config;
//!
//! let re = Config::default().compile().unwrap();
//! assert_eq!(
//!     re.find_all("some long string with foo@bar.com in it"),
//!     ["foo@bar.com"]
//! );
//!
//! let re = Config::builder().exact(true).build().compile().unwrap();
//! assert!(re.is_match("hello@example.com"));
//! assert!(!re.is_match("say hello@example.com now"));
//! ```
/*!
Getting the pattern only:
```
use email_regex::{build, Config, Output};

let config = Config::builder()
    .strict(true)
    .return_pattern_only(true)
    .build();
let Output::Pattern(pattern) = build(&config).unwrap() else {
    unreachable!()
};
let re = fancy_regex::Regex::new(&format!(r"(?i)<{pattern}>")).unwrap();
assert!(re.is_match("From: Foo <foo@bar.baz>").unwrap());
```

## Known quirks
The top-level domain is the last thing in the pattern and nothing has to follow it, so a
whitelisted prefix of a longer label is accepted: `foo@com.jpeg` yields `foo@com.jp`. This
keeps results compatible with earlier releases.
*/
//! ## Crate features
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]

pub mod compose;
mod config;
pub mod engine;
pub mod error;
pub mod fragment;

pub use config::Config;
pub use engine::EmailRegex;
pub use error::BuildError;

use engine::EngineSelector;

mod private {
    pub trait Sealed {}
}
use private::Sealed;

/// What [`build`] produced.
#[derive(Clone, Debug)]
pub enum Output {
    /// [`Config::return_pattern_only`] was set.
    Pattern(String),
    Regex(EmailRegex),
}

impl Output {
    /// The pattern string, anchored if the regex is in exact mode.
    pub fn as_str(&self) -> &str {
        match self {
            Output::Pattern(pattern) => pattern,
            Output::Regex(re) => re.as_str(),
        }
    }

    pub fn into_regex(self) -> Option<EmailRegex> {
        match self {
            Output::Pattern(_) => None,
            Output::Regex(re) => Some(re),
        }
    }
}

/// Composes the pattern for `config` and, unless [`Config::return_pattern_only`] is set,
/// compiles it with the [global](EngineSelector::global) engine selector.
///
/// Failing to load the safe engine is not an error; the fallback engine is used instead. An
/// error is only possible if a fragment is malformed.
pub fn build(config: &Config) -> Result<Output, BuildError> {
    build_with(config, EngineSelector::global())
}

/// [`build`] with an explicit engine selector.
pub fn build_with(config: &Config, selector: &EngineSelector) -> Result<Output, BuildError> {
    if config.return_pattern_only {
        return Ok(Output::Pattern(config.pattern()));
    }
    config.compile_with(selector).map(Output::Regex)
}

impl EmailRegex {
    /// Compiles the default [`Config`].
    pub fn new() -> Result<Self, BuildError> {
        Config::default().compile()
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::{
        engine::{Engine, EngineKind, EngineSelector, SafeEngine},
        error::LoadError,
    };

    use super::*;

    const CORPUS: &str = "
__boop@beep.com
foo@foo.com
foo@f.com
foo@.com
some@sub.domain.jpg.co.uk.com.jpeg
_._boop@beep.com
bepp.test@boop.com
beep....foo@foo.com
beep..@foo.com
beep@bar.com.
beep.boop.boop.@foo.com
beep@boop.com .@foo.com
foo@_ $foobar@gmail.com
+foo@gmail.com
+$foo@gmail.com
+@test.com
++@test.com+@testtest.com
url\u{ef}\u{bc}\u{161}www.example.com reserved.[subscribe.example.com/subscribe.aspx?foo=zaaaa@example.io&beep=foo124123@example.nl
##rfc822;beep@test.co.uk
/images/some_logo@2x.jp
/images/foobar@2x.jpeg ----------------------------------------[beep.boop.net/foo.cfm?email=beep@example.ai\nwww.foo-beep.es was invalid
cid:image001.png@01bazz23.mx1e6980]www.facebook.com/example[cid:image002.png@03j570cf.ee1e6980]twitter.com/foobar[cid:image000.png@03j570cfzaaaazz.ee1e6980]http://www.linkedin.com/company/beep?trk=company_logo[cid:image005.png@03j570cf.es
foo@bar example.@gmail.com
foo+test@gmail.com
f=nr@context\",c=e(\"gos\") 'text@example.com, some text'
fazboop <foo@bar.com> beep baz@boop.com
foo@fe.com admin@2606:4700:4700::1111
fe@fe az@as test@1.2.3.4 foo@com.jpeg
foo@com.jpeg";

    const CORPUS_MATCHES: [&str; 34] = [
        "boop@beep.com",
        "foo@foo.com",
        "foo@f.com",
        "some@sub.domain.jpg.co.uk.com.jp",
        "boop@beep.com",
        "bepp.test@boop.com",
        "beep....foo@foo.com",
        "beep..@foo.com",
        "beep@bar.com",
        "beep.boop.boop.@foo.com",
        "beep@boop.com",
        "foobar@gmail.com",
        "foo@gmail.com",
        "foo@gmail.com",
        "test.com+@testtest.com",
        "zaaaa@example.io",
        "foo124123@example.nl",
        "beep@test.co.uk",
        "some_logo@2x.jp",
        "foobar@2x.jp",
        "beep@example.ai",
        "image001.png@01bazz23.mx",
        "image002.png@03j570cf.ee",
        "image000.png@03j570cfzaaaazz.ee",
        "image005.png@03j570cf.es",
        "example.@gmail.com",
        "foo+test@gmail.com",
        "text@example.com",
        "foo@bar.com",
        "baz@boop.com",
        "foo@fe.com",
        "test@1.2.3.4",
        "foo@com.jp",
        "foo@com.jp",
    ];

    fn unavailable() -> EngineSelector {
        EngineSelector::new(|| Err(LoadError::Probe("simulated".into())))
    }

    #[test]
    fn corpus() {
        let re = EmailRegex::new().unwrap();
        #[cfg(feature = "safe-engine")]
        assert_eq!(re.engine(), EngineKind::Safe);
        assert_eq!(re.find_all(CORPUS), CORPUS_MATCHES);
    }

    #[test]
    fn corpus_fallback() {
        let re = Config::builder()
            .use_safe_engine(false)
            .build()
            .compile()
            .unwrap();
        assert_eq!(re.engine(), EngineKind::Fallback);
        assert_eq!(re.find_all(CORPUS), CORPUS_MATCHES);

        let re = Config::default().compile_with(&unavailable()).unwrap();
        assert_eq!(re.engine(), EngineKind::Fallback);
        assert_eq!(re.find_all(CORPUS), CORPUS_MATCHES);
    }

    /// Both engines agree on every option combination.
    #[test]
    fn parity() {
        let Ok(safe) = SafeEngine::load() else {
            return;
        };
        let haystacks = [
            CORPUS,
            "root@localhost admin@[::1] admin@::1 x@fe80::1%eth0 y@2001:db8::8a2e:370:7334",
            "józef@bücher.de jose@example.中国 \u{1F600}@smile.com MIXED@Case.Org",
            "a-b=c@x.org ~tilde@x.org {curly}@x.org _under@x.org",
        ];
        let selector = EngineSelector::new(SafeEngine::load);
        assert_eq!(selector.select(true).kind(), safe.kind());
        for bits in 0u8..64 {
            let bit = |i: u8| bits & (1 << i) != 0;
            let config = Config::builder()
                .exact(bit(0))
                .strict(bit(1))
                .gmail_rules(bit(2))
                .allow_utf8_username(bit(3))
                .allow_ipv4(bit(4))
                .allow_ipv6(bit(5))
                .build();
            let safe = config.compile_with(&selector).unwrap();
            let fallback = config.compile_with(&unavailable()).unwrap();
            assert_eq!(safe.engine(), EngineKind::Safe);
            assert_eq!(fallback.engine(), EngineKind::Fallback);
            for haystack in haystacks {
                assert_eq!(
                    safe.find_all(haystack),
                    fallback.find_all(haystack),
                    "{config:?}"
                );
                assert_eq!(safe.is_match(haystack), fallback.is_match(haystack));
            }
        }
    }

    #[test]
    fn exact() {
        let re = Config::builder().exact(true).build().compile().unwrap();
        assert!(re.is_match("hello@example.com"));
        assert!(re.is_match("HELLO@EXAMPLE.COM"));
        assert!(!re.is_match("say hello@example.com now"));
        assert!(!re.is_match("hello@example.com\n"));
        assert_eq!(re.find_all("hello@example.com"), ["hello@example.com"]);

        let re = EmailRegex::new().unwrap();
        assert!(re.is_match("say hello@example.com now"));
        assert_eq!(re.find_all("say hello@example.com now"), ["hello@example.com"]);
    }

    #[test]
    fn tld_order() {
        let re = Config::builder()
            .top_level_domains(vec!["uk".into(), "co.uk".into()])
            .build()
            .compile()
            .unwrap();
        assert!(re.as_str().contains(r"(?:co\.uk|uk)"));
        assert_eq!(re.find_all("xx@y.co.uk"), ["xx@y.co.uk"]);
        assert_eq!(re.find_all("xx@y.uk"), ["xx@y.uk"]);
        // Usernames need two characters.
        assert!(re.find_all("x@y.co.uk").is_empty());

        let re = Config::builder()
            .top_level_domains(vec!["uk".into(), "co.uk".into(), "uk".into()])
            .build()
            .compile()
            .unwrap();
        assert_eq!(
            re.find_all("xx@y.co.uk, xx@y.uk"),
            ["xx@y.co.uk", "xx@y.uk"]
        );

        let re = Config::builder()
            .top_level_domains(vec!["co".into(), "com".into()])
            .build()
            .compile()
            .unwrap();
        assert_eq!(re.find_all("foo@bar.com"), ["foo@bar.com"]);
    }

    #[test]
    fn domain_toggles() {
        let re = Config::builder()
            .allow_localhost(true)
            .allow_ipv4(false)
            .allow_ipv6(false)
            .build()
            .compile()
            .unwrap();
        assert_eq!(re.find_all("root@localhost"), ["root@localhost"]);
        assert!(re.find_all("root@127.0.0.1").is_empty());

        let re = Config::builder()
            .allow_localhost(false)
            .build()
            .compile()
            .unwrap();
        assert!(re.find_all("root@localhost").is_empty());
        assert_eq!(re.find_all("root@127.0.0.1"), ["root@127.0.0.1"]);

        let re = Config::builder()
            .allow_ipv6(true)
            .build()
            .compile()
            .unwrap();
        assert_eq!(
            re.find_all("foo@fe.com admin@2606:4700:4700::1111"),
            ["foo@fe.com", "admin@2606:4700:4700::1111"]
        );
    }

    #[test]
    fn strict() {
        let re = Config::builder().strict(true).build().compile().unwrap();
        assert_eq!(re.find_all("foo@bar.qqqq"), ["foo@bar.qqqq"]);
        assert_eq!(re.find_all("foo@com.jpeg"), ["foo@com.jpeg"]);
        assert!(re.find_all("foo@bar.c").is_empty());

        let re = EmailRegex::new().unwrap();
        assert!(re.find_all("foo@bar.qqqq").is_empty());
    }

    #[test]
    fn username_rules() {
        let hay = "józef@example.com ab-cd@example.com";

        let re = EmailRegex::new().unwrap();
        assert_eq!(re.find_all(hay), ["zef@example.com", "cd@example.com"]);

        let re = Config::builder()
            .gmail_rules(false)
            .build()
            .compile()
            .unwrap();
        assert_eq!(re.find_all(hay), ["józef@example.com", "ab-cd@example.com"]);

        let re = Config::builder()
            .gmail_rules(false)
            .allow_utf8_username(false)
            .build()
            .compile()
            .unwrap();
        assert_eq!(re.find_all(hay), ["zef@example.com", "ab-cd@example.com"]);
    }

    #[test]
    fn empty_whitelist() {
        let re = Config::builder()
            .top_level_domains(Vec::new())
            .build()
            .compile()
            .unwrap();
        assert!(re.find_all("foo@bar.com foo@bar.").is_empty());
        assert_eq!(re.find_all("root@localhost"), ["root@localhost"]);
    }

    #[test]
    fn return_pattern_only() {
        let config = Config::builder().return_pattern_only(true).build();
        match build(&config).unwrap() {
            Output::Pattern(pattern) => assert_eq!(pattern, config.pattern()),
            Output::Regex(_) => panic!("compiled"),
        }

        // No anchoring either.
        let config = Config::builder()
            .exact(true)
            .return_pattern_only(true)
            .build();
        let output = build(&config).unwrap();
        assert_eq!(output.as_str(), config.pattern());
        assert!(output.into_regex().is_none());

        let output = build_with(&Config::default(), &unavailable()).unwrap();
        let re = output.into_regex().unwrap();
        assert_eq!(re.engine(), EngineKind::Fallback);
    }

    #[test]
    fn deterministic() {
        let config = Config::builder()
            .top_level_domains(vec![Cow::Borrowed("com"), Cow::Owned("co.uk".to_owned())])
            .build();
        assert_eq!(config.pattern(), config.pattern());
        assert_eq!(Config::default().pattern(), Config::default().pattern());
    }
}
