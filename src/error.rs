/// Error type for DHCPv6 option parsing and serialization.
///
/// Every failure is a plain value so callers can compare it against the
/// variants directly.
///
/// # Examples
///
/// ```
/// use dhcpv6_opt_wire::error::Error;
/// use dhcpv6_opt_wire::registry::Options;
///
/// // Three bytes cannot hold the four-byte frame header.
/// let result = Options::from_bytes(&[0x00, 0x01, 0x00]);
/// assert_eq!(result, Err(Error::BufferTooShort));
/// assert!(Error::BufferTooShort.is_truncated());
/// ```
#[derive(PartialEq, Debug, Clone, Copy, Eq)]
pub enum Error {
    /// A read or a bounded write would run past the end of the buffer.
    ///
    /// This occurs when:
    /// - The input ends inside a frame header
    /// - A frame declares more value bytes than remain
    /// - An option value is shorter than its fixed fields
    /// - An output slice is smaller than the encoded options
    BufferTooShort,

    /// A fixed-layout value carried bytes past its last field.
    TrailingData,

    /// The DUID type tag is not one of LLT (1), EN (2), LL (3) or UUID (4).
    UnknownVariant(u16),

    /// The label sequence of a domain name could not be consumed exactly.
    ///
    /// This variant wraps label-specific errors.
    MalformedLabelSequence(LabelError),

    /// An option value is too long for the 16-bit length field.
    LengthOverflow,

    /// The buffer carried more options than the decode configuration allows.
    TooManyOptions,
}

impl Error {
    /// Returns true if the input may become decodable with more bytes.
    ///
    /// Only [`Error::BufferTooShort`] qualifies. Every other variant means the
    /// bytes present are themselves invalid.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Error::BufferTooShort)
    }
}

/// Label-sequence specific error types.
///
/// These errors occur while decoding or building RFC 1035 domain names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelError {
    /// The data ended before the zero-length terminator.
    UnexpectedEnd,

    /// A label length byte points past the end of the data.
    LengthOverflow,

    /// Bytes remain after the terminator of a single domain name.
    TrailingData,

    /// A compression pointer (top two length bits set) was found.
    ///
    /// Option payloads never use name compression.
    CompressionPointer,

    /// A label is longer than 63 bytes.
    LabelTooLong,

    /// The encoded name is longer than 255 bytes.
    NameTooLong,

    /// A label with no text was given to a constructor.
    EmptyLabel,
}

impl From<LabelError> for Error {
    fn from(err: LabelError) -> Self {
        Error::MalformedLabelSequence(err)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::BufferTooShort => write!(f, "buffer too short for expected structure"),
            Error::TrailingData => write!(f, "unexpected trailing data"),
            Error::UnknownVariant(t) => write!(f, "unknown DUID type: {}", t),
            Error::MalformedLabelSequence(e) => write!(f, "malformed label sequence: {}", e),
            Error::LengthOverflow => write!(f, "option length field overflow"),
            Error::TooManyOptions => write!(f, "too many options"),
        }
    }
}

impl core::fmt::Display for LabelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LabelError::UnexpectedEnd => write!(f, "unexpected end of data"),
            LabelError::LengthOverflow => write!(f, "label length overflow"),
            LabelError::TrailingData => write!(f, "data after terminator"),
            LabelError::CompressionPointer => write!(f, "compression pointers are not allowed"),
            LabelError::LabelTooLong => write!(f, "label too long"),
            LabelError::NameTooLong => write!(f, "domain name too long"),
            LabelError::EmptyLabel => write!(f, "empty label"),
        }
    }
}

impl core::error::Error for Error {}

impl core::error::Error for LabelError {}
