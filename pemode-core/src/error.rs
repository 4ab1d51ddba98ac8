//! Error types shared by the decoder, the byte source and [`crate::Image`].

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The supplied buffer ended before a field the decoder needed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("input truncated: {width} bytes at offset {offset:#x} lie beyond the {len}-byte buffer")]
    Truncated {
        offset: usize,
        width: usize,
        len: usize,
    },
}

/// The byte source could not produce a buffer for a path.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("{} does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("access to {} was denied", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("I/O error while reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound { path },
            io::ErrorKind::PermissionDenied => SourceError::PermissionDenied { path },
            _ => SourceError::Io { path, source: err },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            SourceError::NotFound { path }
            | SourceError::PermissionDenied { path }
            | SourceError::Io { path, .. } => path,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub type Result<T> = std::result::Result<T, Error>;
