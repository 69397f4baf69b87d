//! Logging setup utilities for the chat relay.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// Every crate in `crate_names` gets `default_log_level`. The filter can be
/// overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `crate_names` - Crate or binary names to enable (e.g., `["chatrelay-server", "tower_http"]`)
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use chatrelay_shared::logger::setup_logger;
///
/// setup_logger(&["chatrelay-server"], "debug");
/// ```
pub fn setup_logger(crate_names: &[&str], default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(crate_names, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build `target=level` directives; tracing targets use `_` where package names use `-`.
fn default_directives(crate_names: &[&str], default_log_level: &str) -> String {
    crate_names
        .iter()
        .map(|name| format!("{}={}", name.replace('-', "_"), default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_normalizes_names() {
        // given:
        let names = ["chatrelay-server", "tower_http"];

        // when:
        let directives = default_directives(&names, "debug");

        // then:
        assert_eq!(directives, "chatrelay_server=debug,tower_http=debug");
    }

    #[test]
    fn test_default_directives_empty() {
        assert_eq!(default_directives(&[], "info"), "");
    }
}
