//! Error types for headdiff operations

use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeaderDiffError>;

#[derive(Error, Debug)]
pub enum HeaderDiffError {
    #[error("Cannot open {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a regular file: {path}")]
    NotAFile { path: PathBuf },

    #[error("No header record in {path}: file is empty")]
    EmptyFile { path: PathBuf },

    #[error("CSV parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HeaderDiffError {
    pub fn file_access(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn not_a_file(path: impl AsRef<Path>) -> Self {
        Self::NotAFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn empty_file(path: impl AsRef<Path>) -> Self {
        Self::EmptyFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn parse(path: impl AsRef<Path>, source: csv::Error) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True for failures to open or read the underlying file
    pub fn is_file_access(&self) -> bool {
        matches!(self, Self::FileAccess { .. } | Self::NotAFile { .. })
    }

    /// True for failures to obtain a record from readable input
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::EmptyFile { .. } | Self::Parse { .. })
    }
}
