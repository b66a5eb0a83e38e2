use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application
///
/// Entries are kept in memory for the logs dialog and forwarded to the `log`
/// facade. When file logging is enabled a `fern` dispatch writes them to the
/// log file; the terminal is never written to while the UI owns it.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            log_file: None,
        }
    }

    /// Build the logger described by the `[logging]` section
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        if !config.enabled {
            return Ok(Self::new());
        }
        Self::with_log_file(config.level_filter()?, Self::get_log_file_path()?)
    }

    /// Install a global file dispatch writing to `path`
    pub fn with_log_file<P: AsRef<Path>>(level: log::LevelFilter, path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let mut logger = Self::new();
        match Self::dispatch(level, path)?.apply() {
            Ok(()) => logger.log_file = Some(path.to_path_buf()),
            // A dispatch was installed earlier in this process; keep using it.
            Err(e) => logger.log(format!("Log file not attached: {e}")),
        }
        Ok(logger)
    }

    /// File dispatch formatting records as `[time LEVEL target] message`
    pub fn dispatch<P: AsRef<Path>>(level: log::LevelFilter, path: P) -> Result<fern::Dispatch> {
        let file = fern::log_file(path.as_ref())
            .with_context(|| format!("Failed to open log file: {}", path.as_ref().display()))?;

        Ok(fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(file))
    }

    /// Get the log file path
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
            .map(|dir| dir.join("todobox").join("todobox.log"))
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!(target: "todobox::ui", "{}", message);

        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Whether records are being written to a log file
    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
