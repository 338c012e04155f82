//! Logging initialisation.

use tracing_subscriber::EnvFilter;

/// Installs a stderr fmt subscriber. `RUST_LOG` takes precedence over
/// `default_filter`. Safe to call more than once.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    // Only fails when a global subscriber is already set; that one stays.
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_keeps_first_subscriber() {
        init("warn");
        init("debug");
        tracing::info!("still logging after second init");
    }
}
