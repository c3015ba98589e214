//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a given verbosity.
///
/// ```
/// assert_eq!(muybridge::default_directive(false), "info");
/// assert_eq!(muybridge::default_directive(true), "debug");
/// ```
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks between `info` and
/// `debug`. Output goes to stderr so `--json` reports stay parseable.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
