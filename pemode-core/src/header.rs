pub mod dos;
pub mod nt;
pub mod optional;

use crate::error::DecodeError;
use crate::view::ByteView;

pub use dos::DosHeader;
pub use nt::{FileHeader, NtHeaders};
pub use optional::{DataDirectory, OptionalHeaderLayout};

/// A fixed-layout header that can be lifted out of a [`ByteView`].
///
/// Implementations only decode raw fields; deciding whether those fields
/// describe a valid image is left to [`crate::decoder`].
pub trait Header: Sized + std::fmt::Debug + Send + Sync {
    /// Number of bytes that must be readable at the header's start.
    const SIZE: usize;

    /// Returns a short human-readable name, e.g. "DOS" or "NT".
    fn name(&self) -> &'static str;

    /// Decodes the header at `offset`, failing if `SIZE` bytes are not available.
    fn parse(view: &ByteView<'_>, offset: usize) -> Result<Self, DecodeError>;
}
