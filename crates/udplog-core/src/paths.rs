//! Log directory creation and verification.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while preparing the log directory.
#[derive(Debug, Error)]
pub enum PathError {
    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Failed to create the directory.
    #[error("failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// The directory is not writable.
    #[error("directory {path} is not writable: {reason}")]
    NotWritable { path: PathBuf, reason: String },
}

/// Ensure the log directory exists and is writable.
///
/// `create_dir_all` is idempotent, so concurrent startup paths can race
/// through here safely.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
    } else {
        fs::create_dir_all(path).map_err(|err| PathError::CreateFailed {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
    }

    verify_writable(path)
}

/// Verify a directory is writable by creating and removing a probe file.
pub fn verify_writable(path: &Path) -> Result<(), PathError> {
    let probe = path.join(".udplog_write_test");
    let opened = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&probe);

    match opened {
        Ok(mut file) => {
            file.write_all(b"test").map_err(|err| PathError::NotWritable {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;
            drop(file);
            let _ = fs::remove_file(&probe);
            Ok(())
        }
        Err(err) => Err(PathError::NotWritable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }),
    }
}
