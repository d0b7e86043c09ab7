/*!
Assembles the email pattern from a [`Config`] and the [`fragment`] library.

The result has the shape `(?:USERNAME@(?:DOMAIN))`, where `DOMAIN` is an alternation tried in
this order:
1. `localhost`, if [`Config::allow_localhost`]
2. an IPv4 literal, if [`Config::allow_ipv4`]
3. an IPv6 literal, if [`Config::allow_ipv6`]
4. a hostname followed by a top-level domain

Composition is a pure function of the config and never fails. A config that can't match
anything (e.g. an empty whitelist) still yields a valid pattern; it just finds no matches.

## Example
```
use email_regex::{compose::compose, Config};

let pattern = compose(
    &Config::builder()
        .allow_ipv4(false)
        .top_level_domains(vec!["uk".into(), "co.uk".into()])
        .build(),
);
assert!(pattern.starts_with("(?:[a-z0-9]"));
assert!(pattern.ends_with(r"(?:\.(?:co\.uk|uk))))"));
```
*/
use std::borrow::Cow;

use itertools::Itertools;

use crate::{
    fragment::{self, Username},
    Config,
};

/// Builds the unanchored pattern string for `config`.
///
/// Equal configs always produce byte-identical patterns.
pub fn compose(config: &Config) -> String {
    let username = Username::select(config.gmail_rules, config.allow_utf8_username).fragment();
    let tld = tld(config);

    let mut pattern = String::with_capacity(
        username.len() + tld.len() + fragment::HOST.len() + fragment::DOMAIN.len() + 512,
    );
    pattern.push_str("(?:");
    pattern.push_str(username);
    pattern.push_str("@(?:");
    if config.allow_localhost {
        pattern.push_str(fragment::LOCALHOST);
        pattern.push('|');
    }
    if config.allow_ipv4 {
        pattern.push_str(fragment::IPV4);
        pattern.push('|');
    }
    if config.allow_ipv6 {
        pattern.push_str(fragment::IPV6);
        pattern.push('|');
    }
    pattern.push_str(fragment::HOST);
    pattern.push_str(fragment::DOMAIN);
    pattern.push_str(&tld);
    pattern.push_str("))");
    pattern
}

/// Wraps a composed pattern so that it only matches the whole haystack.
pub fn anchor(pattern: &str) -> String {
    format!("(?:^{pattern}$)")
}

/// `(?:\.(?:...))`, with either the strict rule or the whitelist inside.
fn tld(config: &Config) -> String {
    let body = if config.strict {
        Cow::Borrowed(fragment::TLD_STRICT)
    } else {
        Cow::Owned(format!("(?:{})", whitelist(&config.top_level_domains)))
    };
    format!(r"(?:\.{body})")
}

/// A class that matches no character. An alternation with no branches.
pub const NEVER: &str = r"[^\x00-\x{10FFFF}]";

/// Joins the whitelist into an alternation, longest first.
///
/// Alternation is leftmost-first and nothing follows the TLD, so with `co` listed before `com`
/// the address `foo@bar.com` would be cut to `foo@bar.co`. Sorting is stable: equal lengths
/// keep the caller's order. Entries are escaped, so they are always matched literally.
///
/// An empty whitelist yields [`NEVER`] rather than an empty group, which would match the
/// empty string and accept `foo@bar.` as an address.
pub fn whitelist<S: AsRef<str>>(tlds: &[S]) -> String {
    if tlds.is_empty() {
        return NEVER.to_owned();
    }
    tlds.iter()
        .map(AsRef::as_ref)
        .sorted_by_key(|tld| std::cmp::Reverse(tld.len()))
        .map(regex_syntax::escape)
        .join("|")
}
