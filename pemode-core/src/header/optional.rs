use crate::error::DecodeError;
use crate::header::Header;
use crate::mode::Bitness;
use crate::view::ByteView;
use goblin::pe::optional_header::{MAGIC_32, MAGIC_64};

/// Offset table for one optional header variant.
///
/// The PE32 and PE32+ layouts differ in the width of several fields before the
/// data directory table, which moves the CLR runtime header entry
/// (`IMAGE_DIRECTORY_ENTRY_COM_DESCRIPTOR`, index 14) by 16 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalHeaderLayout {
    pub magic: u16,
    pub bitness: Bitness,
    /// Offset of the CLR directory entry, relative to the optional header start.
    pub clr_directory_offset: usize,
}

impl OptionalHeaderLayout {
    pub const PE32: OptionalHeaderLayout = OptionalHeaderLayout {
        magic: MAGIC_32,
        bitness: Bitness::Bit32,
        clr_directory_offset: 208,
    };

    pub const PE32_PLUS: OptionalHeaderLayout = OptionalHeaderLayout {
        magic: MAGIC_64,
        bitness: Bitness::Bit64,
        clr_directory_offset: 224,
    };

    pub fn from_magic(magic: u16) -> Option<&'static OptionalHeaderLayout> {
        match magic {
            MAGIC_32 => Some(&Self::PE32),
            MAGIC_64 => Some(&Self::PE32_PLUS),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self.bitness {
            Bitness::Bit32 => "PE32",
            Bitness::Bit64 => "PE32+",
        }
    }
}

/// One `IMAGE_DATA_DIRECTORY` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataDirectory {
    pub virtual_address: u32,
    pub size: u32,
}

impl DataDirectory {
    pub fn is_present(&self) -> bool {
        self.size != 0
    }
}

impl Header for DataDirectory {
    const SIZE: usize = 8;

    fn name(&self) -> &'static str {
        "data directory"
    }

    fn parse(view: &ByteView<'_>, offset: usize) -> Result<Self, DecodeError> {
        view.ensure(offset, Self::SIZE)?;
        Ok(DataDirectory {
            virtual_address: view.read_u32_at(offset)?,
            size: view.read_u32_at(offset + 4)?,
        })
    }
}
