//! Tracing subscriber setup.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Pick the effective level: --verbose, then --log-level, then config, then warn
pub fn resolve_level(
    verbose: bool,
    cli_level: Option<LogLevel>,
    config_level: Option<LogLevel>,
) -> LevelFilter {
    if verbose {
        return LevelFilter::DEBUG;
    }
    cli_level
        .or(config_level)
        .map(LevelFilter::from)
        .unwrap_or(LevelFilter::WARN)
}

/// Install the global subscriber. `RUST_LOG` wins when set.
pub fn init(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("facetdsl_cli={level},facetdsl_query={level}"))
    });

    // A subscriber may already be installed (tests); keep the existing one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
