use crate::decoder::{decode_header, Decoded, DecodedHeader};
use crate::error::Result;
use crate::mode::Classification;
use crate::source::{ByteSource, FileSource, DEFAULT_PREFIX_LEN};
use std::path::{Path, PathBuf};

/// Outcome of probing one file. The header bytes are dropped once decoded.
#[derive(Debug, Clone)]
pub struct Image {
    pub path: PathBuf,
    pub bytes_read: usize,
    pub decoded: Decoded,
}

impl Image {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_source(path, &FileSource, DEFAULT_PREFIX_LEN)
    }

    pub fn with_source<P, S>(path: P, source: &S, prefix_len: usize) -> Result<Self>
    where
        P: AsRef<Path>,
        S: ByteSource + ?Sized,
    {
        let path = path.as_ref();
        let buf = source.read_prefix(path, prefix_len)?;
        log::info!("Read {} header bytes from {}", buf.len(), path.display());

        let decoded = decode_header(&buf)?;
        if let Decoded::Invalid(reason) = &decoded {
            log::warn!("{} is not a PE image: {}", path.display(), reason);
        }

        Ok(Self {
            path: path.to_path_buf(),
            bytes_read: buf.len(),
            decoded,
        })
    }

    pub fn classification(&self) -> Classification {
        self.decoded.classification()
    }

    pub fn header(&self) -> Option<&DecodedHeader> {
        self.decoded.header()
    }
}
