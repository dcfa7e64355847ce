//! Logging setup
//!
//! Diagnostics go to stderr so that generated source printed on stdout can be
//! piped or redirected unchanged.

use clap::ValueEnum;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that overrides the verbosity flags
pub const LOG_ENV: &str = "FIELDGEN_LOG";

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable compact lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Default filter directive for a `-v` count
#[must_use]
pub const fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the global subscriber
///
/// `FIELDGEN_LOG` takes precedence over `verbose` when it holds a valid
/// filter.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use fieldgen_cli::observability::{self, LogFormat};
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init(1, LogFormat::Text)?;
/// tracing::info!("generator started");
/// # Ok(())
/// # }
/// ```
pub fn init(verbose: u8, format: LogFormat) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
    }

    Ok(())
}
