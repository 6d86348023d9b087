//! Tracing setup for native binaries.
//!
//! The web app logs through the Dioxus logger instead; this module only
//! installs a `tracing-subscriber` formatter on native targets.

/// Log filter for a `-v` count: warn, info, debug, then trace.
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a global formatter. `RUST_LOG` takes precedence over `verbosity`.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = filter_for_verbosity(verbosity);
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .try_init();
}
