use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling;
use tracing_subscriber::fmt::{self, format};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Setup console logging with an optional rotating file appender.
///
/// # Arguments
/// * `log_dir` - Directory for daily-rotated log files; console only when `None`
/// * `log_prefix` - Prefix for log files (e.g., "site-index")
/// * `debug_mode` - If true, use debug level; otherwise use info level
///
/// # Returns
/// The file appender guard, which must be held for the duration of the program
/// to keep file logging active
pub fn setup_logging(
    log_dir: Option<&Utf8Path>,
    log_prefix: &str,
    debug_mode: bool,
) -> Result<Option<WorkerGuard>> {
    let env_filter = level_filter(debug_mode);

    let Some(log_dir) = log_dir else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer())
            .try_init()
            .context("Failed to install logging subscriber")?;

        tracing::debug!("Logging initialized: console only, debug={}", debug_mode);
        return Ok(None);
    };

    ensure_log_dir(log_dir)?;

    let file_appender = rolling::daily(log_dir, log_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer(non_blocking))
        .with(console_layer())
        .try_init()
        .context("Failed to install logging subscriber")?;

    tracing::info!(
        "Logging initialized: dir={}, prefix={}, debug={}",
        log_dir,
        log_prefix,
        debug_mode
    );

    Ok(Some(guard))
}

// Generic over the subscriber so each registry stack gets its own layer type
fn console_layer<S>() -> fmt::Layer<S>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fmt::layer().with_ansi(true).with_target(false)
}

fn file_layer<S>(writer: NonBlocking) -> fmt::Layer<S, format::DefaultFields, format::Format, NonBlocking>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fmt::layer()
        .with_writer(writer)
        .with_ansi(false) // No ANSI codes in log files
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
}

fn level_filter(debug_mode: bool) -> EnvFilter {
    if debug_mode {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

fn ensure_log_dir(log_dir: &Utf8Path) -> Result<()> {
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_log_directory_created() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = Utf8PathBuf::try_from(temp_dir.path().join("logs")).unwrap();

        // Only the directory step; installing a global subscriber would
        // conflict with other tests in the same process
        ensure_log_dir(&log_dir).unwrap();
        assert!(log_dir.is_dir());

        // Idempotent on an existing directory
        ensure_log_dir(&log_dir).unwrap();
    }

    #[test]
    fn test_file_and_console_layers_share_a_registry() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();

        let (writer, guard) = tracing_appender::non_blocking(rolling::daily(&log_dir, "site-index"));
        let subscriber = tracing_subscriber::registry()
            .with(level_filter(false))
            .with(file_layer(writer))
            .with(console_layer());

        // Scoped to this thread, so no global subscriber is installed
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("indexed one directory");
            tracing::debug!("filtered out at info level");
        });
        drop(guard);

        let mut contents = String::new();
        for entry in fs::read_dir(&log_dir).unwrap() {
            let entry = entry.unwrap();
            assert!(entry.file_name().to_string_lossy().starts_with("site-index"));
            contents.push_str(&fs::read_to_string(entry.path()).unwrap());
        }
        assert!(contents.contains("indexed one directory"));
        assert!(!contents.contains("filtered out"));
        assert!(!contents.contains("\x1b["));
    }
}
