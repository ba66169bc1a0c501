use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Initialise logging. Without `debug` the level is forced to `info`; with it
/// the default is `debug` and `RUST_LOG` may override it.
///
/// When `log_file` is given output is appended to that file instead of
/// stdout. Calling this more than once keeps the first subscriber.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if let Some(path) = log_file {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "villa_dashboard.log".into());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let _ = builder.with_writer(appender).with_ansi(false).try_init();
    } else {
        let _ = builder.try_init();
    }
}
