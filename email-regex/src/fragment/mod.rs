/*!
Pattern fragments that [`compose`](crate::compose) assembles into an email pattern.

Every fragment is a static string in the common subset of the
[`regex-automata`](regex_automata) and [`fancy-regex`](fancy_regex) syntaxes: no capture
groups, no backreferences, no look-around. Both engines therefore produce the same matches for
any pattern built from them.

`\w` and `\d` are never used. They are Unicode-aware in both engines, while the grammar wants
ASCII word characters for usernames, so ASCII classes are spelled out instead. Case
insensitivity comes from the compile flags, so only lowercase letters appear here.

## Example
```
use email_regex::fragment::{self, Username};

assert_eq!(Username::Gmail.fragment(), fragment::USERNAME_GMAIL);
assert!(fragment::HOST.starts_with("(?:"));
```
*/
pub mod ip;

pub use ip::{IPV4, IPV6};

/// A hostname label chain: segments of letters and digits, optionally joined by runs of `-`
/// or `_`.
///
/// `\x{a1}-\x{ffff}` admits internationalized hostnames.
pub const HOST: &str = r"(?:(?:[a-z\x{a1}-\x{ffff}0-9][-_]*)*[a-z\x{a1}-\x{ffff}0-9]+)";

/// Zero or more `.`-prefixed domain labels following [`HOST`].
pub const DOMAIN: &str = r"(?:\.(?:[a-z\x{a1}-\x{ffff}0-9]-*)*[a-z\x{a1}-\x{ffff}0-9]+)*";

/// Any label of two or more letters, used as the top-level domain in strict mode.
pub const TLD_STRICT: &str = r"(?:[a-z\x{a1}-\x{ffff}]{2,})";

/// The `localhost` domain literal.
pub const LOCALHOST: &str = "localhost";

/// Username accepted by common webmail providers.
///
/// The first character is an ASCII letter or digit; the rest may also contain `_`, `.` and
/// `+`. Consecutive dots and a trailing dot are allowed because webmail accepts them when
/// rendering, even though signup forms don't.
pub const USERNAME_GMAIL: &str = r"[a-z0-9](?:[a-z0-9_.+]+)";

/// RFC 5322 `atext` username plus Unicode letters from the BMP.
pub const USERNAME_UTF8: &str = concat!(
    r"[a-z0-9](?:[a-z0-9!#$%&'.*+\-/=?^_`{|}~",
    r"\x{a0}-\x{d7ff}\x{f900}-\x{fdcf}\x{fdf0}-\x{ffef}",
    "]+)"
);

/// RFC 5322 `atext` username, ASCII only.
pub const USERNAME_ASCII: &str = r"[a-z0-9](?:[a-z0-9!#$%&'.*+\-/=?^_`{|}~]+)";

/// Username grammar variants. Exactly one is used per pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Username {
    /// [`USERNAME_GMAIL`]
    Gmail,
    /// [`USERNAME_UTF8`]
    Utf8,
    /// [`USERNAME_ASCII`]
    Ascii,
}

impl Username {
    /// Picks the variant by priority: provider rules win over Unicode, Unicode over ASCII.
    pub fn select(gmail_rules: bool, allow_utf8: bool) -> Self {
        if gmail_rules {
            Self::Gmail
        } else if allow_utf8 {
            Self::Utf8
        } else {
            Self::Ascii
        }
    }

    pub fn fragment(self) -> &'static str {
        match self {
            Self::Gmail => USERNAME_GMAIL,
            Self::Utf8 => USERNAME_UTF8,
            Self::Ascii => USERNAME_ASCII,
        }
    }
}
