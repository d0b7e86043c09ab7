//! RUST_LOG=email_regex=debug cargo run --example basic
use email_regex::{
    build,
    engine::{EngineKind, EngineSelector},
    error::LoadError,
    Config, EmailRegex, Output,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let re = EmailRegex::new().unwrap();
    assert_eq!(
        re.find_all("fazboop <foo@bar.com> beep baz@boop.com"),
        ["foo@bar.com", "baz@boop.com"]
    );

    let re = Config::builder().exact(true).build().compile().unwrap();
    assert!(re.is_match("hello@example.com"));
    assert!(!re.is_match("hello@example.com, bye@example.com"));

    // Any alphabetic TLD, and IPv6 literals.
    let re = Config::builder()
        .strict(true)
        .allow_ipv6(true)
        .build()
        .compile()
        .unwrap();
    for m in re.find_iter("ping admin@2606:4700:4700::1111 or ops@corp.internal") {
        println!("{:?}: {}", m.range(), m.as_str());
    }

    let config = Config::builder().return_pattern_only(true).build();
    if let Output::Pattern(pattern) = build(&config).unwrap() {
        println!("pattern: {} bytes", pattern.len());
    }

    // A selector whose safe engine can't be loaded falls back without failing.
    let selector = EngineSelector::new(|| Err(LoadError::Probe("not here".into())));
    let re = Config::default().compile_with(&selector).unwrap();
    assert_eq!(re.engine(), EngineKind::Fallback);
    assert_eq!(re.find_all("foo@bar.com"), ["foo@bar.com"]);
}
