use crate::error::SourceError;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Number of leading bytes read by default; large enough for any DOS stub a
/// well-formed image carries.
pub const DEFAULT_PREFIX_LEN: usize = 4096;

/// Smallest prefix that still holds a complete DOS header.
pub const MIN_PREFIX_LEN: usize = 64;

/// Largest prefix worth reading for header validation (64 KiB).
pub const MAX_PREFIX_LEN: usize = 64 * 1024;

/// Produces raw bytes for a path.
///
/// Reads return *up to* `len` bytes: a file shorter than the request yields a
/// short buffer, never padding.
pub trait ByteSource {
    fn read_at(&self, path: &Path, offset: u64, len: usize) -> Result<Vec<u8>, SourceError>;

    fn read_prefix(&self, path: &Path, len: usize) -> Result<Vec<u8>, SourceError> {
        self.read_at(path, 0, len)
    }
}

/// [`ByteSource`] over the local filesystem. Each read opens and closes its
/// own handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl ByteSource for FileSource {
    fn read_at(&self, path: &Path, offset: u64, len: usize) -> Result<Vec<u8>, SourceError> {
        let mut file = File::open(path).map_err(|e| SourceError::from_io(path, e))?;
        if offset != 0 {
            file.seek(SeekFrom::Start(offset))
                .map_err(|e| SourceError::from_io(path, e))?;
        }

        // `len` is caller-supplied; only reserve what a header prefix needs.
        let mut buf = Vec::with_capacity(len.min(DEFAULT_PREFIX_LEN));
        file.take(len as u64)
            .read_to_end(&mut buf)
            .map_err(|e| SourceError::from_io(path, e))?;

        if buf.len() < len {
            log::debug!(
                "Short read from {}: {} of {} bytes at {:#x}",
                path.display(),
                buf.len(),
                len,
                offset
            );
        }
        Ok(buf)
    }
}
