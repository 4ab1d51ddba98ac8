use crate::error::DecodeError;
use crate::header::Header;
use crate::view::ByteView;
use goblin::pe::characteristic::IMAGE_FILE_DLL;
use goblin::pe::header::{
    COFF_MACHINE_ARM, COFF_MACHINE_ARM64, COFF_MACHINE_ARMNT, COFF_MACHINE_X86,
    COFF_MACHINE_X86_64, PE_MAGIC, SIZEOF_COFF_HEADER, SIZEOF_PE_MAGIC,
};

/// Subset of the COFF file header (`IMAGE_FILE_HEADER`) that follows the
/// `PE\0\0` signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Target machine type, e.g. `0x14c` for x86 or `0x8664` for x86-64.
    pub machine: u16,

    /// Image characteristic flags (`IMAGE_FILE_*`).
    pub characteristics: u16,
}

impl FileHeader {
    const MACHINE_OFFSET: usize = 0;
    const CHARACTERISTICS_OFFSET: usize = 18;

    pub fn is_dll(&self) -> bool {
        self.characteristics & IMAGE_FILE_DLL != 0
    }

    pub fn machine_name(&self) -> String {
        match self.machine {
            COFF_MACHINE_X86 => "x86".to_string(),
            COFF_MACHINE_X86_64 => "x86-64".to_string(),
            COFF_MACHINE_ARM | COFF_MACHINE_ARMNT => "ARM".to_string(),
            COFF_MACHINE_ARM64 => "ARM64".to_string(),
            other => format!("{:#06x}", other),
        }
    }
}

/// The fixed-size prefix of `IMAGE_NT_HEADERS`: the signature, the COFF file
/// header and the optional header's magic discriminator.
///
/// The rest of the optional header depends on the magic and is read through an
/// [`crate::header::OptionalHeaderLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NtHeaders {
    /// Must be `0x00004550` ("PE\0\0").
    pub signature: u32,
    pub file_header: FileHeader,
    /// First two bytes of the optional header, `0x10B` (PE32) or `0x20B` (PE32+).
    pub optional_magic: u16,
}

impl NtHeaders {
    pub const FILE_HEADER_OFFSET: usize = SIZEOF_PE_MAGIC;
    pub const OPTIONAL_HEADER_OFFSET: usize = SIZEOF_PE_MAGIC + SIZEOF_COFF_HEADER;

    pub fn has_valid_signature(&self) -> bool {
        self.signature == PE_MAGIC
    }
}

impl Header for NtHeaders {
    const SIZE: usize = Self::OPTIONAL_HEADER_OFFSET + 2;

    fn name(&self) -> &'static str {
        "NT"
    }

    fn parse(view: &ByteView<'_>, offset: usize) -> Result<Self, DecodeError> {
        view.ensure(offset, Self::SIZE)?;
        let file_header = offset + Self::FILE_HEADER_OFFSET;

        Ok(NtHeaders {
            signature: view.read_u32_at(offset)?,
            file_header: FileHeader {
                machine: view.read_u16_at(file_header + FileHeader::MACHINE_OFFSET)?,
                characteristics: view
                    .read_u16_at(file_header + FileHeader::CHARACTERISTICS_OFFSET)?,
            },
            optional_magic: view.read_u16_at(offset + Self::OPTIONAL_HEADER_OFFSET)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nt_bytes(machine: u16, characteristics: u16, magic: u16) -> Vec<u8> {
        let mut buf = vec![0u8; NtHeaders::SIZE];
        buf[0..4].copy_from_slice(b"PE\0\0");
        buf[4..6].copy_from_slice(&machine.to_le_bytes());
        buf[22..24].copy_from_slice(&characteristics.to_le_bytes());
        buf[24..26].copy_from_slice(&magic.to_le_bytes());
        buf
    }

    #[test]
    fn layout_constants() {
        assert_eq!(NtHeaders::OPTIONAL_HEADER_OFFSET, 24);
        assert_eq!(NtHeaders::SIZE, 26);
    }

    #[test]
    fn parses_prefix() {
        let buf = nt_bytes(0x8664, 0x2022, 0x20b);
        let nt = NtHeaders::parse(&ByteView::new(&buf), 0).unwrap();
        assert!(nt.has_valid_signature());
        assert_eq!(nt.optional_magic, 0x20b);
        assert_eq!(nt.file_header.machine_name(), "x86-64");
        assert!(nt.file_header.is_dll());
    }

    #[test]
    fn unknown_machine_is_hex() {
        let fh = FileHeader {
            machine: 0x1234,
            characteristics: 0x0102,
        };
        assert_eq!(fh.machine_name(), "0x1234");
        assert!(!fh.is_dll());
    }

    #[test]
    fn truncated_prefix() {
        let buf = nt_bytes(0x14c, 0, 0x10b);
        assert!(NtHeaders::parse(&ByteView::new(&buf[..25]), 0).is_err());
        assert!(NtHeaders::parse(&ByteView::new(&buf), 1).is_err());
    }
}
