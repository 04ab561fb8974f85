use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Route `tracing` output to a file; the terminal belongs to the UI.
///
/// The returned guard flushes pending lines on drop and must outlive the UI.
pub fn init(log_path: &Path, verbose: bool) -> Result<WorkerGuard> {
    let dir = log_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_name = log_path
        .file_name()
        .context("Log path has no file name")?;
    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directive(verbose)))
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(guard)
}

fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "apod=debug,warn"
    } else {
        "apod=info,warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_crate_level() {
        assert_eq!(filter_directive(true), "apod=debug,warn");
        assert_eq!(filter_directive(false), "apod=info,warn");
    }
}
