use std::fmt;

/// Whether the image carries CLR metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeKind {
    Native,
    Managed,
}

/// Pointer width selected by the optional header magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bitness {
    Bit32,
    Bit64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompilationMode {
    pub runtime: RuntimeKind,
    pub bitness: Bitness,
}

impl CompilationMode {
    pub fn new(runtime: RuntimeKind, bitness: Bitness) -> Self {
        Self { runtime, bitness }
    }

    pub fn is_managed(&self) -> bool {
        self.runtime == RuntimeKind::Managed
    }

    pub fn is_64(&self) -> bool {
        self.bitness == Bitness::Bit64
    }
}

/// Why a buffer was rejected as not being a PE image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    BadDosMagic(u16),
    NegativeNtOffset(i32),
    BadNtSignature(u32),
    UnknownOptionalMagic(u16),
}

/// Result of classifying a header buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Invalid(InvalidReason),
    Image(CompilationMode),
}

impl Classification {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Classification::Invalid(_))
    }

    pub fn mode(&self) -> Option<CompilationMode> {
        match self {
            Classification::Image(mode) => Some(*mode),
            Classification::Invalid(_) => None,
        }
    }
}

impl fmt::Display for RuntimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuntimeKind::Native => "Native",
            RuntimeKind::Managed => "Managed",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Bitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Bitness::Bit32 => "32-bit",
            Bitness::Bit64 => "64-bit",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for CompilationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.runtime, self.bitness)
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::BadDosMagic(found) => {
                write!(f, "missing MZ signature (found {:#06x})", found)
            }
            InvalidReason::NegativeNtOffset(offset) => {
                write!(f, "negative NT header offset ({})", offset)
            }
            InvalidReason::BadNtSignature(found) => {
                write!(f, "missing PE signature (found {:#010x})", found)
            }
            InvalidReason::UnknownOptionalMagic(found) => {
                write!(f, "unknown optional header magic {:#06x}", found)
            }
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Invalid(reason) => write!(f, "invalid ({})", reason),
            Classification::Image(mode) => write!(f, "{}", mode),
        }
    }
}
