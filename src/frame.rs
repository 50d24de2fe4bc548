//! Frame module
//!
//! This module contains [`OptionFrame`], a read/write wrapper around one
//! `(code, length, value)` option record, an iterator that splits an options
//! area into frames, and the emitter used by the encoders.

use crate::buffer::Writer;
use crate::error::Error;
use crate::field;
use crate::iana::OptionCode;
use crate::options::Dhcpv6Option;
use byteorder::{ByteOrder, NetworkEndian};
use core::fmt;

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// A read/write wrapper around a single DHCPv6 option frame.
///
/// Option frame format:
/// - Option code (2 bytes)
/// - Option length (2 bytes)
/// - Option data (option length bytes)
///
/// The buffer may extend past the end of the frame; [`OptionFrame::total_len`]
/// tells where the next frame starts.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct OptionFrame<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> OptionFrame<T> {
    /// Creates a new unchecked `OptionFrame`.
    ///
    /// # Arguments
    ///
    /// * `buffer` - A buffer starting with the frame header.
    pub const fn new_unchecked(buffer: T) -> OptionFrame<T> {
        OptionFrame { buffer }
    }

    /// Creates a new checked `OptionFrame`.
    ///
    /// # Returns
    ///
    /// * `Result<OptionFrame>` - A new `OptionFrame` if the buffer holds the
    ///   complete header and every value byte the header declares.
    pub fn new_checked(buffer: T) -> Result<OptionFrame<T>> {
        let frame = Self::new_unchecked(buffer);
        frame.check_len()?;
        Ok(frame)
    }

    /// Checks the length of the frame.
    ///
    /// # Returns
    ///
    /// * `Result<()>` - Ok if the header and the declared value fit in the
    ///   buffer, otherwise `Error::BufferTooShort`.
    pub fn check_len(&self) -> Result<()> {
        let len = self.buffer.as_ref().len();
        if len < field::option::HEADER_LEN {
            return Err(Error::BufferTooShort);
        }
        if len < self.total_len() {
            return Err(Error::BufferTooShort);
        }
        Ok(())
    }

    /// Returns the inner buffer.
    pub fn into_inner(self) -> T {
        self.buffer
    }

    /// Returns the option code.
    pub fn code(&self) -> OptionCode {
        OptionCode::from(NetworkEndian::read_u16(&self.buffer.as_ref()[field::option::CODE]))
    }

    /// Returns the option length field.
    pub fn length(&self) -> u16 {
        NetworkEndian::read_u16(&self.buffer.as_ref()[field::option::LENGTH])
    }

    /// Returns the option data.
    pub fn value(&self) -> &[u8] {
        &self.buffer.as_ref()[field::option::VALUE(self.length() as usize)]
    }

    /// Size of the whole frame, header included.
    pub fn total_len(&self) -> usize {
        field::option::VALUE(self.length() as usize).end
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> OptionFrame<T> {
    /// Sets the option code.
    pub fn set_code(&mut self, code: OptionCode) {
        NetworkEndian::write_u16(&mut self.buffer.as_mut()[field::option::CODE], code.into());
    }

    /// Sets the option length field.
    pub fn set_length(&mut self, length: u16) {
        NetworkEndian::write_u16(&mut self.buffer.as_mut()[field::option::LENGTH], length);
    }

    /// Returns a mutable slice to the option data.
    ///
    /// The length field must already be set.
    pub fn value_mut(&mut self) -> &mut [u8] {
        let range = field::option::VALUE(self.length() as usize);
        &mut self.buffer.as_mut()[range]
    }
}

impl<T: AsRef<[u8]>> fmt::Display for OptionFrame<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DHCPv6 option: code={}, len={}", u16::from(self.code()), self.length())
    }
}

/// Iterator over the frames of an options area.
///
/// Yields `Err(Error::BufferTooShort)` once, and then stops, if the data ends
/// inside a frame.
#[derive(Debug, Clone)]
pub struct FrameIter<'a> {
    data: &'a [u8],
}

impl<'a> FrameIter<'a> {
    /// Create an iterator over `data`.
    pub fn new(data: &'a [u8]) -> Self {
        FrameIter { data }
    }
}

impl<'a> Iterator for FrameIter<'a> {
    type Item = Result<OptionFrame<&'a [u8]>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.data.is_empty() {
            return None;
        }

        let data = self.data;
        match OptionFrame::new_checked(data) {
            Ok(frame) => {
                let (head, rest) = data.split_at(frame.total_len());
                self.data = rest;
                Some(Ok(OptionFrame::new_unchecked(head)))
            }
            Err(err) => {
                self.data = &[];
                Some(Err(err))
            }
        }
    }
}

/// Split an options area into frames.
///
/// # Example
/// ```
/// use dhcpv6_opt_wire::frame::frames;
/// use dhcpv6_opt_wire::iana::OptionCode;
///
/// let data = [0x00, 0x08, 0x00, 0x02, 0x00, 0x0A];
/// let frame = frames(&data).next().unwrap().unwrap();
/// assert_eq!(frame.code(), OptionCode::ElapsedTime);
/// assert_eq!(frame.value(), &[0x00, 0x0A]);
/// ```
pub fn frames(data: &[u8]) -> FrameIter<'_> {
    FrameIter::new(data)
}

/// Append one option, framed, to `writer`.
///
/// The length field is taken from the bytes the option actually emitted.
///
/// # Errors
/// `Error::LengthOverflow` if the value is longer than `u16::MAX` bytes.
/// Nothing is left in `writer` in that case.
pub fn emit_frame<O: Dhcpv6Option + ?Sized>(option: &O, writer: &mut Writer) -> Result<()> {
    let start = writer.len();
    writer.write_u16(option.code().into());
    writer.write_u16(0);
    option.emit(writer);

    let value_len = writer.len() - start - field::option::HEADER_LEN;
    let Ok(length) = u16::try_from(value_len) else {
        writer.truncate(start);
        return Err(Error::LengthOverflow);
    };
    OptionFrame::new_unchecked(&mut writer.as_mut_slice()[start..]).set_length(length);
    Ok(())
}
