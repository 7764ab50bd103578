use std::path::{Path, PathBuf};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Set up tracing output: compact stderr always, plus a daily-rolling JSON
/// file when `log_file` is given. `RUST_LOG` overrides the default level.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("storycraft={}", default_level)));

    let file_layer = log_file.map(|path| {
        fmt::layer()
            .with_writer(file_appender(&path))
            .with_ansi(false)
            .json()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .with(file_layer)
        .init();
}

fn file_appender(path: &Path) -> RollingFileAppender {
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    let _ = std::fs::create_dir_all(directory);
    let file_name = path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("storycraft.log"));
    tracing_appender::rolling::daily(directory, file_name)
}
