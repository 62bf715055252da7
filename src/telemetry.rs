//! Tracing subscriber setup shared by the server and the CLI.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `level` is an `EnvFilter` directive string (e.g. `info` or
/// `helpdesk_portal=debug,tower_http=info`); `format` is `text` or `json`.
/// An unparsable directive falls back to `info`.
pub fn init(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    if format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
