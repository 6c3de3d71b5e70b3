//! Configuration loading and representation.
//!
//! [`SorterConfig`] is stored as pretty-printed JSON:
//!
//! ```json
//! {
//!   "disabled_sorters": ["Price (ascending)"],
//!   "default_page_size": 20
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use shelfsort_sorting::SorterConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config path {0}: parent directory components are not allowed")]
    InvalidPath(PathBuf),

    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Reject paths that climb out of their directory with `..`.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(ConfigError::InvalidPath(path.to_path_buf()));
    }
    Ok(())
}

/// Read a [`SorterConfig`] from a JSON file. Missing fields take defaults.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<SorterConfig, ConfigError> {
    let path = path.as_ref();
    validate_path(path)?;

    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config: SorterConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        disabled = config.disabled_sorters.len(),
        default_page_size = config.default_page_size,
        "loaded sorter configuration"
    );
    Ok(config)
}

/// Write `config` as pretty-printed JSON, owner read/write only on Unix.
pub fn save_to_file(config: &SorterConfig, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    validate_path(path)?;

    let mut json = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    json.push('\n');

    write_private(path, json.as_bytes()).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "saved sorter configuration");
    Ok(())
}

#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    fs::write(path, contents)
}
