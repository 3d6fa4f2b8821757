// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

// Log files larger than this are rotated on start-up
const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

/// Build the `env_logger` builder described by the config.
///
/// Output goes to stderr unless `log_file` is set, in which case the file is
/// rotated if too large and opened in append mode.
pub fn builder(config: &Config) -> Result<env_logger::Builder> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(path) = &config.log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        rotate_if_needed(path, MAX_LOG_SIZE)?;

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    Ok(builder)
}

pub fn init(config: &Config) -> Result<()> {
    builder(config)?.try_init()?;
    log::debug!(
        "Logging initialised at {} ({})",
        config.log_level,
        config
            .log_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stderr".to_string())
    );
    Ok(())
}

/// Move `path` aside to `<stem>-<timestamp>.log` once it grows past `max_size`.
///
/// Returns the rotated path when a rotation happened.
pub fn rotate_if_needed(path: &Path, max_size: u64) -> Result<Option<PathBuf>> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    if metadata.len() <= max_size {
        return Ok(None);
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "devtools".to_string());
    let rotated = path.with_file_name(format!("{}-{}.log", stem, Utc::now().format("%Y%m%d%H%M%S")));
    fs::rename(path, &rotated)?;

    Ok(Some(rotated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_target_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("devtools.log");
        let config = Config {
            log_file: Some(path.clone()),
            ..Config::default()
        };

        builder(&config).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn oversized_file_is_rotated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::File::create(&path).unwrap().write_all(&[b'x'; 64]).unwrap();

        assert!(rotate_if_needed(&path, 1024).unwrap().is_none());

        let rotated = rotate_if_needed(&path, 16).unwrap().unwrap();
        assert!(!path.exists());
        assert!(rotated.exists());
        assert!(rotated.file_name().unwrap().to_string_lossy().starts_with("app-"));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(rotate_if_needed(&dir.path().join("absent.log"), 1).unwrap().is_none());
    }
}
