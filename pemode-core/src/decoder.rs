//! Header decoder: walks DOS header → NT headers → optional header → CLR
//! directory over a bounds-checked view and classifies the image.

use crate::error::DecodeError;
use crate::header::{
    DataDirectory, DosHeader, FileHeader, Header, NtHeaders, OptionalHeaderLayout,
};
use crate::mode::{Classification, CompilationMode, InvalidReason, RuntimeKind};
use crate::view::ByteView;

/// Everything learned from a header chain that passed every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedHeader {
    pub nt_offset: usize,
    pub file_header: FileHeader,
    pub layout: &'static OptionalHeaderLayout,
    pub clr_directory: DataDirectory,
}

impl DecodedHeader {
    pub fn mode(&self) -> CompilationMode {
        let runtime = if self.clr_directory.is_present() {
            RuntimeKind::Managed
        } else {
            RuntimeKind::Native
        };
        CompilationMode::new(runtime, self.layout.bitness)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    Image(DecodedHeader),
    Invalid(InvalidReason),
}

impl Decoded {
    pub fn classification(&self) -> Classification {
        match self {
            Decoded::Image(header) => Classification::Image(header.mode()),
            Decoded::Invalid(reason) => Classification::Invalid(*reason),
        }
    }

    pub fn header(&self) -> Option<&DecodedHeader> {
        match self {
            Decoded::Image(header) => Some(header),
            Decoded::Invalid(_) => None,
        }
    }
}

/// Classifies the leading bytes of a file as native/managed and 32/64-bit.
///
/// Signature mismatches are reported as [`Classification::Invalid`]; a buffer
/// too short to hold a field the chain points at is a [`DecodeError`].
pub fn classify(buf: &[u8]) -> Result<Classification, DecodeError> {
    decode_header(buf).map(|decoded| decoded.classification())
}

pub fn decode_header(buf: &[u8]) -> Result<Decoded, DecodeError> {
    let view = ByteView::new(buf);

    // The magic is checked before the 64-byte DOS header is required, so short
    // non-PE input is "invalid" rather than "truncated".
    let e_magic = view.read_u16_at(0)?;
    if e_magic != DosHeader::MAGIC {
        log::debug!("Rejected: DOS magic {:#06x}", e_magic);
        return Ok(Decoded::Invalid(InvalidReason::BadDosMagic(e_magic)));
    }
    let dos = DosHeader::parse(&view, 0)?;

    let nt_offset = match usize::try_from(dos.e_lfanew) {
        Ok(offset) => offset,
        Err(_) => {
            log::warn!("Rejected: e_lfanew is negative ({})", dos.e_lfanew);
            return Ok(Decoded::Invalid(InvalidReason::NegativeNtOffset(
                dos.e_lfanew,
            )));
        }
    };
    log::debug!("{} header ok, NT headers at {:#x}", dos.name(), nt_offset);

    let nt = NtHeaders::parse(&view, nt_offset)?;
    if !nt.has_valid_signature() {
        log::debug!("Rejected: NT signature {:#010x}", nt.signature);
        return Ok(Decoded::Invalid(InvalidReason::BadNtSignature(
            nt.signature,
        )));
    }

    let Some(layout) = OptionalHeaderLayout::from_magic(nt.optional_magic) else {
        log::debug!("Rejected: optional header magic {:#06x}", nt.optional_magic);
        return Ok(Decoded::Invalid(InvalidReason::UnknownOptionalMagic(
            nt.optional_magic,
        )));
    };
    log::debug!(
        "{} headers ok, {} optional header, machine {}",
        nt.name(),
        layout.name(),
        nt.file_header.machine_name()
    );

    let clr_offset = nt_offset + NtHeaders::OPTIONAL_HEADER_OFFSET + layout.clr_directory_offset;
    let clr_directory = DataDirectory::parse(&view, clr_offset)?;
    log::debug!(
        "CLR {} at {:#x}: rva {:#x}, size {}",
        clr_directory.name(),
        clr_offset,
        clr_directory.virtual_address,
        clr_directory.size
    );

    let header = DecodedHeader {
        nt_offset,
        file_header: nt.file_header,
        layout,
        clr_directory,
    };
    log::info!("Classified image as {}", header.mode());
    Ok(Decoded::Image(header))
}
