//! Field offset definitions for DHCPv6 option wire format structures.
//!
//! All offsets are defined as const ranges or const functions so they can be
//! evaluated at compile time.
//!
//! # Wire Format Structure
//!
//! DHCPv6 option (RFC 8415 section 21.1):
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          option-code          |           option-len          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          option-data                          |
//! |                      (option-len octets)                      |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```

#![allow(non_snake_case)]

/// Type alias for a byte range (slice index range).
pub type Field = ::core::ops::Range<usize>;

/// Option frame field offsets.
pub mod option {
    use crate::field::Field;

    /// Option code (2 bytes at offset 0-1).
    pub const CODE: Field = 0..2;

    /// Length of the option data (2 bytes at offset 2-3).
    ///
    /// Counts only the data, not the 4-byte header.
    pub const LENGTH: Field = 2..4;

    /// Size of the header preceding the option data.
    pub const HEADER_LEN: usize = LENGTH.end;

    /// Option data field (variable length after the header).
    ///
    /// # Parameters
    ///
    /// * `length` - The value of the LENGTH field
    pub const fn VALUE(length: usize) -> Field {
        HEADER_LEN..(HEADER_LEN + length)
    }
}

/// DUID sizes (RFC 8415 section 11).
pub mod duid {
    /// Size of the leading DUID type tag.
    pub const TYPE_LEN: usize = 2;

    /// Size of the UUID carried by DUID-UUID (RFC 6355).
    pub const UUID_LEN: usize = 16;
}

/// Label sequence limits (RFC 1035 section 3.1).
pub mod label {
    /// Longest label text.
    pub const MAX_LABEL_LEN: usize = 63;

    /// Longest encoded name, terminator included.
    pub const MAX_NAME_LEN: usize = 255;

    /// Length byte values with either of the top two bits set are pointers
    /// or reserved label types.
    pub const POINTER_MASK: u8 = 0xC0;
}
