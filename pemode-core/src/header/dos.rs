use crate::error::DecodeError;
use crate::header::Header;
use crate::view::ByteView;
use goblin::pe::header::{DOS_MAGIC, PE_POINTER_OFFSET};

/// The two fields of the legacy MS-DOS header (`IMAGE_DOS_HEADER`) that matter
/// for locating the real PE header.
///
/// The full structure is 64 bytes long and sits at offset 0 of every PE file.
/// Everything between `e_magic` and `e_lfanew` describes the DOS stub program
/// and is ignored here.
///
/// Reference: [PE Format](https://learn.microsoft.com/en-us/windows/win32/debug/pe-format#ms-dos-stub-image-only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DosHeader {
    /// Magic number, `0x5A4D` ("MZ") for any PE image.
    pub e_magic: u16,

    /// Signed file offset of the NT headers.
    ///
    /// Stored at byte 60 (`0x3C`). Only meaningful once `e_magic` has been
    /// checked, and must still be bounds-checked before it is dereferenced.
    pub e_lfanew: i32,
}

impl DosHeader {
    pub const MAGIC: u16 = DOS_MAGIC;
    pub const E_LFANEW_OFFSET: usize = PE_POINTER_OFFSET as usize;
}

impl Header for DosHeader {
    const SIZE: usize = 64;

    fn name(&self) -> &'static str {
        "DOS"
    }

    fn parse(view: &ByteView<'_>, offset: usize) -> Result<Self, DecodeError> {
        view.ensure(offset, Self::SIZE)?;
        Ok(DosHeader {
            e_magic: view.read_u16_at(offset)?,
            e_lfanew: view.read_i32_at(offset + Self::E_LFANEW_OFFSET)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_magic_and_lfanew() {
        let mut buf = vec![0u8; 64];
        buf[0] = b'M';
        buf[1] = b'Z';
        buf[60..64].copy_from_slice(&0x80i32.to_le_bytes());

        let dos = DosHeader::parse(&ByteView::new(&buf), 0).unwrap();
        assert_eq!(dos.e_magic, DosHeader::MAGIC);
        assert_eq!(dos.e_lfanew, 0x80);
        assert_eq!(dos.name(), "DOS");
    }

    #[test]
    fn needs_full_header() {
        let buf = [b'M', b'Z', 0, 0];
        assert!(DosHeader::parse(&ByteView::new(&buf), 0).is_err());
        assert!(DosHeader::parse(&ByteView::new(&[0u8; 63]), 0).is_err());
    }
}
