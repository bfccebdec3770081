use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use playlist_manager::config::LoggingSettings;

/// Build the log filter: `RUST_LOG` when set, otherwise this crate at the
/// configured level and everything else at `warn`.
fn build_filter(settings: &LoggingSettings) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let level = settings.level.to_ascii_lowercase();
    let directive = format!("warn,{}={}", env!("CARGO_CRATE_NAME"), level);
    EnvFilter::try_new(&directive).with_context(|| format!("invalid log filter {directive:?}"))
}

/// Install the global subscriber. Logs go to stderr so stdout only carries
/// playback output.
pub fn init(settings: &LoggingSettings) -> Result<()> {
    let filter = build_filter(settings)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .context("failed to initialize logging")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_filter_accepts_every_configured_level() {
        for level in ["trace", "debug", "INFO", "warn", "error"] {
            let settings = LoggingSettings {
                level: level.to_string(),
            };
            assert!(build_filter(&settings).is_ok(), "level {level}");
        }
    }
}
