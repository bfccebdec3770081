//! Error types for playlist storage.

use std::io;
use std::path::PathBuf;

/// Failures surfaced by save, list and load.
///
/// Per-line parse failures are not part of this enum: they are logged and
/// counted while loading (see [`crate::playlist::LineError`]).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not inspect playlist directory {path}: {source}")]
    DirectoryAccess { path: PathBuf, source: io::Error },

    #[error("could not create playlist directory {path}: {source}")]
    DirectoryCreate { path: PathBuf, source: io::Error },

    #[error("playlist file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("could not create playlist file {path}: {source}")]
    FileCreate { path: PathBuf, source: io::Error },

    #[error("could not write playlist file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("could not open playlist file {path}: {source}")]
    FileOpen { path: PathBuf, source: io::Error },

    #[error("invalid playlist file {0}: empty file")]
    EmptyFile(PathBuf),

    #[error("invalid playlist file {0}: blank playlist name")]
    BlankName(PathBuf),

    #[error("could not read playlist file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
