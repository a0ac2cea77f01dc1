use crate::app_dirs::AppDirs;
use std::{
    fs::{self, OpenOptions},
    sync::Mutex,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Route tracing output to the log file.
///
/// The terminal is owned by the tui, so when no log file can be opened the
/// subscriber gets no writer at all rather than falling back to stderr.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let Some(path) = AppDirs::log_path() else {
        tracing_subscriber::registry().with(env_filter).init();
        return;
    };

    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::info!(path = %path.display(), "Logging initialized");
        }
        Err(_) => {
            tracing_subscriber::registry().with(env_filter).init();
        }
    }
}
