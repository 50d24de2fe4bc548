//! Bounds-checked big-endian cursor over option bytes.
//!
//! [`Cursor`] reads fixed-width integers and byte runs out of a borrowed
//! slice. Every read past the end fails with [`Error::BufferTooShort`],
//! whatever the shortfall, and consumes nothing. Fixed-layout decoders end
//! with [`Cursor::finish`], which reports [`Error::TrailingData`] when bytes
//! remain.
//!
//! [`Writer`] is the encoding counterpart. It grows an owned `Vec<u8>`, so
//! writes never fail.

use crate::error::Error;
use alloc::vec::Vec;
use byteorder::{ByteOrder, NetworkEndian};

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Read cursor over a byte slice.
///
/// # Example
/// ```
/// use dhcpv6_opt_wire::buffer::Cursor;
/// use dhcpv6_opt_wire::error::Error;
///
/// let mut cursor = Cursor::new(&[0x00, 0x03, 0xAA]);
/// assert_eq!(cursor.read_u16(), Ok(3));
/// assert_eq!(cursor.read_u16(), Err(Error::BufferTooShort));
/// assert_eq!(cursor.read_all(), &[0xAA]);
/// assert_eq!(cursor.finish(), Ok(()));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the first byte of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Cursor { data, pos: 0 }
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if at least one byte has not been consumed.
    pub fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    /// Consume `n` bytes.
    ///
    /// # Returns
    /// * `Ok(&[u8])` - The consumed bytes, borrowed from the input
    /// * `Err(Error::BufferTooShort)` - Fewer than `n` bytes remain
    pub fn read_n(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(Error::BufferTooShort);
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Consume exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_n(N)?);
        Ok(out)
    }

    /// Read one byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_n(1)?[0])
    }

    /// Read a big-endian u16.
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(NetworkEndian::read_u16(self.read_n(2)?))
    }

    /// Read a big-endian u32.
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(NetworkEndian::read_u32(self.read_n(4)?))
    }

    /// Consume and return every remaining byte. May be empty.
    pub fn read_all(&mut self) -> &'a [u8] {
        let rest = &self.data[self.pos..];
        self.pos = self.data.len();
        rest
    }

    /// Terminal check for fixed-layout decodes.
    ///
    /// # Returns
    /// * `Ok(())` if every byte was consumed
    /// * `Err(Error::TrailingData)` otherwise
    pub fn finish(self) -> Result<()> {
        if self.has_remaining() {
            return Err(Error::TrailingData);
        }
        Ok(())
    }
}

/// Growable big-endian writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Create an empty writer.
    pub fn new() -> Self {
        Writer { buf: Vec::new() }
    }

    /// Create an empty writer that can hold `capacity` bytes without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Writer {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Append one byte.
    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Append a big-endian u16.
    pub fn write_u16(&mut self, value: u16) {
        let mut bytes = [0u8; 2];
        NetworkEndian::write_u16(&mut bytes, value);
        self.buf.extend_from_slice(&bytes);
    }

    /// Append a big-endian u32.
    pub fn write_u32(&mut self, value: u32) {
        let mut bytes = [0u8; 4];
        NetworkEndian::write_u32(&mut bytes, value);
        self.buf.extend_from_slice(&bytes);
    }

    /// Append raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// The bytes written so far, for patching fields written ahead of
    /// their value.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Drop everything written after the first `len` bytes.
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    /// Take the written bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
