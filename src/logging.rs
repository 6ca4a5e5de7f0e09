//! Tracing subscriber setup for the command-line tool

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{LOG_ENV, LOG_FILE_NAME, LogConfig, data_dir};

/// Install the global subscriber.
///
/// `CONDA_VERSION_LOG` takes precedence over the configured level. File
/// logging writes JSON lines to `LOG_FILE_NAME` under `data_dir()`; the returned guard must be
/// kept alive until exit so buffered lines are flushed.
pub fn init(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = build_filter(std::env::var(LOG_ENV).ok(), &config.level)?;

    if !config.file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install subscriber: {e}"))?;
        return Ok(None);
    }

    let dir = data_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {:?}", dir))?;
    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install subscriber: {e}"))?;
    Ok(Some(guard))
}

fn build_filter(from_env: Option<String>, configured: &str) -> anyhow::Result<EnvFilter> {
    let directive = from_env
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| configured.to_string());
    EnvFilter::try_new(&directive).with_context(|| format!("Invalid log filter '{directive}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("debug"), "warn", "debug")]
    #[case(None, "warn", "warn")]
    #[case(Some("  "), "info", "info")]
    fn build_filter_prefers_environment(
        #[case] from_env: Option<&str>,
        #[case] configured: &str,
        #[case] expected: &str,
    ) {
        let filter = build_filter(from_env.map(str::to_string), configured).unwrap();

        assert_eq!(filter.to_string(), expected);
    }

    #[test]
    fn build_filter_rejects_invalid_directive() {
        assert!(build_filter(Some("conda_version=loud".to_string()), "warn").is_err());
    }
}
