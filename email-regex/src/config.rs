use std::borrow::Cow;

use bon::Builder;

use crate::{
    compose,
    engine::{EmailRegex, EngineSelector, Flags},
    error::BuildError,
};

/// Options for building an email pattern.
///
/// Every option has a default. Unset builder fields, and `None` passed to the `maybe_*`
/// setters, keep it:
/// ```
/// use email_regex::Config;
///
/// let config = Config::builder().maybe_exact(None).allow_ipv6(true).build();
/// assert!(!config.exact);
/// assert!(config.allow_ipv6);
/// assert_eq!(config, Config::builder().allow_ipv6(true).build());
/// ```
///
/// With the `serde` feature, a config can also be read from a sparse map. Keys follow the
/// camelCase option names, unknown keys are ignored:
/// ```
/// # #[cfg(feature = "serde")] {
/// use email_regex::Config;
///
/// let config: Config = serde_json::from_str(r#"{ "exact": true, "allowIPv4": false }"#).unwrap();
/// assert_eq!(config, Config::builder().exact(true).allow_ipv4(false).build());
/// # }
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Config {
    /// Compile with the linear-time engine when it is available.
    ///
    /// Default: `true`
    #[builder(default = true)]
    pub use_safe_engine: bool,

    /// Only match if the whole haystack is an address, instead of searching for addresses in
    /// it.
    ///
    /// Default: `false`
    #[builder(default)]
    pub exact: bool,

    /// Accept any top-level domain of two or more letters instead of only those in
    /// [`top_level_domains`](Self::top_level_domains).
    ///
    /// Default: `false`
    #[builder(default)]
    pub strict: bool,

    /// Use the [webmail username](crate::fragment::USERNAME_GMAIL) grammar. Takes priority
    /// over [`allow_utf8_username`](Self::allow_utf8_username).
    ///
    /// Default: `true`
    #[builder(default = true)]
    #[cfg_attr(feature = "serde", serde(alias = "gmail"))]
    pub gmail_rules: bool,

    /// Allow Unicode letters in usernames. Only used when `gmail_rules` is false.
    ///
    /// Default: `true`
    #[builder(default = true)]
    #[cfg_attr(feature = "serde", serde(alias = "utf8"))]
    pub allow_utf8_username: bool,

    /// Accept `localhost` as the domain.
    ///
    /// Default: `true`
    #[builder(default = true)]
    #[cfg_attr(feature = "serde", serde(alias = "localhost"))]
    pub allow_localhost: bool,

    /// Accept an IPv4 address as the domain.
    ///
    /// Default: `true`
    #[builder(default = true)]
    #[cfg_attr(feature = "serde", serde(alias = "allowIPv4", alias = "ipv4"))]
    pub allow_ipv4: bool,

    /// Accept an IPv6 address as the domain.
    ///
    /// Default: `false`
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(alias = "allowIPv6", alias = "ipv6"))]
    pub allow_ipv6: bool,

    /// Accepted top-level domains, lowercase and without the leading dot. Ignored in
    /// [`strict`](Self::strict) mode.
    ///
    /// Default: [`email_tlds::TLDS`]
    #[builder(default = default_tlds())]
    #[cfg_attr(feature = "serde", serde(alias = "tlds"))]
    pub top_level_domains: Vec<Cow<'static, str>>,

    /// Make [`build`](crate::build) return the pattern string instead of compiling it.
    ///
    /// Default: `false`
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(alias = "returnString"))]
    pub return_pattern_only: bool,
}

fn default_tlds() -> Vec<Cow<'static, str>> {
    email_tlds::TLDS.iter().map(|&tld| Cow::Borrowed(tld)).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Config {
    /// The unanchored pattern string. See [`compose`](crate::compose).
    pub fn pattern(&self) -> String {
        compose::compose(self)
    }

    /// The pattern and flags that [`compile`](Self::compile) hands to the engine.
    ///
    /// Exact mode anchors the pattern and matches once; otherwise the pattern is used as is and
    /// every match is reported.
    pub fn compile_args(&self) -> (String, Flags) {
        let pattern = self.pattern();
        if self.exact {
            (compose::anchor(&pattern), Flags::CASE_INSENSITIVE)
        } else {
            (pattern, Flags::CASE_INSENSITIVE | Flags::GLOBAL)
        }
    }

    /// Compiles the pattern with the [global](EngineSelector::global) engine selector,
    /// regardless of [`return_pattern_only`](Self::return_pattern_only).
    pub fn compile(&self) -> Result<EmailRegex, BuildError> {
        self.compile_with(EngineSelector::global())
    }

    pub fn compile_with(&self, selector: &EngineSelector) -> Result<EmailRegex, BuildError> {
        let (pattern, flags) = self.compile_args();
        selector.compile(&pattern, flags, self.use_safe_engine)
    }
}
