//! Helpers for synthesising PE header prefixes.

#![allow(dead_code)]

pub const PE32: u16 = 0x10b;
pub const PE32_PLUS: u16 = 0x20b;

/// Builds a zero-filled buffer holding just enough of a PE header chain for
/// the decoder.
#[derive(Debug, Clone)]
pub struct PeBuilder {
    len: usize,
    dos_magic: [u8; 2],
    nt_offset: i32,
    signature: [u8; 4],
    machine: u16,
    characteristics: u16,
    magic: u16,
    clr_rva: u32,
    clr_size: u32,
}

impl Default for PeBuilder {
    fn default() -> Self {
        Self {
            len: 4096,
            dos_magic: *b"MZ",
            nt_offset: 128,
            signature: *b"PE\0\0",
            machine: 0x14c,
            characteristics: 0x0102,
            magic: PE32,
            clr_rva: 0,
            clr_size: 0,
        }
    }
}

impl PeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    pub fn dos_magic(mut self, magic: [u8; 2]) -> Self {
        self.dos_magic = magic;
        self
    }

    pub fn nt_offset(mut self, offset: i32) -> Self {
        self.nt_offset = offset;
        self
    }

    pub fn signature(mut self, signature: [u8; 4]) -> Self {
        self.signature = signature;
        self
    }

    pub fn machine(mut self, machine: u16) -> Self {
        self.machine = machine;
        self
    }

    pub fn characteristics(mut self, characteristics: u16) -> Self {
        self.characteristics = characteristics;
        self
    }

    pub fn magic(mut self, magic: u16) -> Self {
        self.magic = magic;
        self
    }

    pub fn clr(mut self, rva: u32, size: u32) -> Self {
        self.clr_rva = rva;
        self.clr_size = size;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = vec![0u8; self.len];
        put(&mut buf, 0, &self.dos_magic);
        put(&mut buf, 60, &self.nt_offset.to_le_bytes());

        if self.nt_offset < 0 {
            return buf;
        }
        let nt = self.nt_offset as usize;
        put(&mut buf, nt, &self.signature);
        put(&mut buf, nt + 4, &self.machine.to_le_bytes());
        put(&mut buf, nt + 22, &self.characteristics.to_le_bytes());
        put(&mut buf, nt + 24, &self.magic.to_le_bytes());

        let dir = nt + 24 + if self.magic == PE32_PLUS { 224 } else { 208 };
        put(&mut buf, dir, &self.clr_rva.to_le_bytes());
        put(&mut buf, dir + 4, &self.clr_size.to_le_bytes());
        buf
    }
}

/// Writes `bytes` at `offset`, dropping whatever does not fit.
fn put(buf: &mut [u8], offset: usize, bytes: &[u8]) {
    for (i, b) in bytes.iter().enumerate() {
        if let Some(slot) = buf.get_mut(offset + i) {
            *slot = *b;
        }
    }
}
