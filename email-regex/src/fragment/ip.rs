//! IP address literals usable as the domain part.
//!
//! The fragments match exactly one address and carry no anchors or boundary assertions; the
//! composer places them inside its own alternation.

/// One dotted-decimal octet, `0` to `255`, without leading zeros.
macro_rules! octet {
    () => {
        "(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])"
    };
}

/// A dotted-quad IPv4 address.
pub const IPV4: &str = concat!(octet!(), r"(?:\.", octet!(), "){3}");

/// One to four hexadecimal digits.
macro_rules! seg {
    () => {
        "[a-fA-F0-9]{1,4}"
    };
}

macro_rules! v4 {
    () => {
        concat!(octet!(), r"(?:\.", octet!(), "){3}")
    };
}

/// An IPv6 address in full, compressed (`::`) or IPv4-embedded form, with an optional
/// `%zone` suffix.
pub const IPV6: &str = concat!(
    "(?:",
    // 1:2:3:4:5:6:7:8  1:2:3:4:5:6:7::
    "(?:", seg!(), ":){7}(?:", seg!(), "|:)|",
    // 1:2:3:4:5:6::8  1:2:3:4:5:6::  1:2:3:4:5:6:1.2.3.4
    "(?:", seg!(), ":){6}(?:", v4!(), "|:", seg!(), "|:)|",
    // 1:2:3:4:5::7:8  1:2:3:4:5::  1:2:3:4:5::1.2.3.4
    "(?:", seg!(), ":){5}(?::", v4!(), "|(?::", seg!(), "){1,2}|:)|",
    "(?:", seg!(), ":){4}(?:(?::", seg!(), "){0,1}:", v4!(), "|(?::", seg!(), "){1,3}|:)|",
    "(?:", seg!(), ":){3}(?:(?::", seg!(), "){0,2}:", v4!(), "|(?::", seg!(), "){1,4}|:)|",
    "(?:", seg!(), ":){2}(?:(?::", seg!(), "){0,3}:", v4!(), "|(?::", seg!(), "){1,5}|:)|",
    "(?:", seg!(), ":){1}(?:(?::", seg!(), "){0,4}:", v4!(), "|(?::", seg!(), "){1,6}|:)|",
    // ::2:3:4:5:6:7:8  ::8  ::1.2.3.4  ::
    "(?::(?:(?::", seg!(), "){0,5}:", v4!(), "|(?::", seg!(), "){1,7}|:))",
    ")",
    // %eth0
    "(?:%[0-9a-zA-Z]{1,})?"
);
