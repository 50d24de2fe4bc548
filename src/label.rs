//! RFC 1035 label sequences as carried in DHCPv6 options.
//!
//! Wire format:
//! ```text
//! [len1][label1][len2][label2]...[0x00]
//! ```
//!
//! Each label is prefixed with a u8 length and the name ends with a
//! zero-length label. Option payloads never use compression (RFC 8415
//! section 10), so a length byte with either of the top two bits set is
//! rejected instead of followed.
//!
//! Label text is kept as raw bytes. [`fmt::Display`] escapes anything that
//! is not printable ASCII as `\DDD`, and a literal `.` or `\` inside a
//! label as `\.` or `\\`.

use crate::buffer::Writer;
use crate::error::LabelError;
use crate::field;
use alloc::vec::Vec;
use core::fmt;

/// An uncompressed domain name.
///
/// Labels are owned copies of the bytes they were parsed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DomainName {
    labels: Vec<Vec<u8>>,
}

impl DomainName {
    /// The root name, encoded as a single zero byte.
    pub fn root() -> Self {
        DomainName { labels: Vec::new() }
    }

    /// Build a name from its labels, most specific first.
    ///
    /// # Returns
    /// * `Ok(DomainName)` if every label is 1-63 bytes and the encoded name
    ///   fits in 255 bytes
    /// * `Err(LabelError)` otherwise
    pub fn new<I, S>(labels: I) -> Result<Self, LabelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut name = DomainName::root();
        for label in labels {
            let label = label.as_ref();
            if label.is_empty() {
                return Err(LabelError::EmptyLabel);
            }
            if label.len() > field::label::MAX_LABEL_LEN {
                return Err(LabelError::LabelTooLong);
            }
            name.labels.push(label.to_vec());
        }
        if name.buffer_len() > field::label::MAX_NAME_LEN {
            return Err(LabelError::NameTooLong);
        }
        Ok(name)
    }

    /// Build a name from dotted text such as `"www.example.com."`.
    ///
    /// A single trailing dot is optional. `"."` and `""` are the root.
    ///
    /// # Example
    /// ```
    /// use dhcpv6_opt_wire::label::DomainName;
    ///
    /// let name = DomainName::from_dotted("www.example.com").unwrap();
    /// assert_eq!(name.labels().len(), 3);
    /// assert_eq!(name.to_string(), "www.example.com.");
    /// ```
    pub fn from_dotted(name: &str) -> Result<Self, LabelError> {
        let trimmed = name.strip_suffix('.').unwrap_or(name);
        if trimmed.is_empty() {
            return Ok(DomainName::root());
        }
        Self::new(trimmed.split('.'))
    }

    /// The labels, most specific first. Empty for the root.
    pub fn labels(&self) -> &[Vec<u8>] {
        &self.labels
    }

    /// Returns true for the root name.
    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Parse exactly one name that occupies all of `data`.
    ///
    /// # Returns
    /// * `Ok(DomainName)` if `data` is one terminated label sequence
    /// * `Err(LabelError::TrailingData)` if bytes follow the terminator
    /// * `Err(LabelError)` for any other malformation
    pub fn parse(data: &[u8]) -> Result<Self, LabelError> {
        let (name, consumed) = Self::parse_prefix(data)?;
        if consumed != data.len() {
            return Err(LabelError::TrailingData);
        }
        Ok(name)
    }

    /// Parse one name from the start of `data`.
    ///
    /// Returns the name and the number of bytes it occupied, terminator
    /// included.
    fn parse_prefix(data: &[u8]) -> Result<(Self, usize), LabelError> {
        let mut labels = Vec::new();
        let mut pos = 0;

        loop {
            let Some(&length) = data.get(pos) else {
                return Err(LabelError::UnexpectedEnd);
            };
            if length & field::label::POINTER_MASK != 0 {
                return Err(LabelError::CompressionPointer);
            }
            pos += 1;

            if length == 0 {
                break;
            }

            let length = length as usize;
            if pos + length > data.len() {
                return Err(LabelError::LengthOverflow);
            }

            labels.push(data[pos..pos + length].to_vec());
            pos += length;

            // One more byte is still needed for the terminator.
            if pos >= field::label::MAX_NAME_LEN {
                return Err(LabelError::NameTooLong);
            }
        }

        Ok((DomainName { labels }, pos))
    }

    /// Size of the encoded name, terminator included.
    pub fn buffer_len(&self) -> usize {
        self.labels.iter().map(|label| 1 + label.len()).sum::<usize>() + 1
    }

    /// Append the encoded name to `writer`.
    pub fn emit(&self, writer: &mut Writer) {
        for label in &self.labels {
            writer.write_u8(label.len() as u8);
            writer.write_bytes(label);
        }
        writer.write_u8(0);
    }

    /// Encode the name into a new buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(self.buffer_len());
        self.emit(&mut writer);
        writer.into_inner()
    }
}

impl fmt::Display for DomainName {
    /// Dotted form with a trailing dot; the root is `"."`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return write!(f, ".");
        }
        for label in &self.labels {
            for &byte in label {
                match byte {
                    b'.' | b'\\' => write!(f, "\\{}", byte as char)?,
                    0x21..=0x7E => write!(f, "{}", byte as char)?,
                    _ => write!(f, "\\{:03}", byte)?,
                }
            }
            write!(f, ".")?;
        }
        Ok(())
    }
}

/// A run of concatenated domain names, as in the Domain Search List option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DomainNameList {
    names: Vec<DomainName>,
}

impl DomainNameList {
    /// Create a list from names in wire order.
    pub fn new(names: Vec<DomainName>) -> Self {
        DomainNameList { names }
    }

    /// The names in wire order.
    pub fn names(&self) -> &[DomainName] {
        &self.names
    }

    /// Append a name.
    pub fn push(&mut self, name: DomainName) {
        self.names.push(name);
    }

    /// Number of names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the list holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Parse names until `data` is exhausted. Empty data is an empty list.
    ///
    /// # Errors
    /// Any name that is not terminated inside `data` fails the whole parse.
    pub fn parse(data: &[u8]) -> Result<Self, LabelError> {
        let mut names = Vec::new();
        let mut pos = 0;
        while pos < data.len() {
            let (name, consumed) = DomainName::parse_prefix(&data[pos..])?;
            names.push(name);
            pos += consumed;
        }
        Ok(DomainNameList { names })
    }

    /// Size of all encoded names.
    pub fn buffer_len(&self) -> usize {
        self.names.iter().map(DomainName::buffer_len).sum()
    }

    /// Append every encoded name to `writer`.
    pub fn emit(&self, writer: &mut Writer) {
        for name in &self.names {
            name.emit(writer);
        }
    }

    /// Encode the list into a new buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(self.buffer_len());
        self.emit(&mut writer);
        writer.into_inner()
    }
}

impl FromIterator<DomainName> for DomainNameList {
    fn from_iter<I: IntoIterator<Item = DomainName>>(iter: I) -> Self {
        DomainNameList::new(iter.into_iter().collect())
    }
}

impl fmt::Display for DomainNameList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", name)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WWW_EXAMPLE_COM: [u8; 17] = [
        3, b'w', b'w', b'w', 7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0,
    ];

    #[test]
    fn test_parse_and_display() {
        let name = DomainName::parse(&WWW_EXAMPLE_COM).unwrap();
        assert_eq!(name.labels(), [b"www".to_vec(), b"example".to_vec(), b"com".to_vec()]);
        assert_eq!(name.to_string(), "www.example.com.");
        assert_eq!(name.buffer_len(), WWW_EXAMPLE_COM.len());
        assert_eq!(name.to_bytes(), WWW_EXAMPLE_COM);
    }

    #[test]
    fn test_root() {
        let name = DomainName::parse(&[0]).unwrap();
        assert!(name.is_root());
        assert_eq!(name.to_string(), ".");
        assert_eq!(name.to_bytes(), [0]);
        assert_eq!(DomainName::from_dotted(".").unwrap(), name);
    }

    #[test]
    fn test_parse_errors() {
        // No terminator
        assert_eq!(DomainName::parse(&[3, b'c', b'o', b'm']), Err(LabelError::UnexpectedEnd));
        assert_eq!(DomainName::parse(&[]), Err(LabelError::UnexpectedEnd));

        // Label overruns the data
        assert_eq!(DomainName::parse(&[9, b'c', b'o', b'm', 0]), Err(LabelError::LengthOverflow));

        // Bytes after the terminator
        assert_eq!(DomainName::parse(&[3, b'c', b'o', b'm', 0, 0]), Err(LabelError::TrailingData));

        // Compression pointer
        assert_eq!(DomainName::parse(&[0xC0, 0x0C]), Err(LabelError::CompressionPointer));
    }

    #[test]
    fn test_non_ascii_label_round_trip() {
        let data = [4, b'c', b'a', b'f', 0xE9, 2, 0xFF, b'.', 0];
        let name = DomainName::parse(&data).unwrap();
        assert_eq!(name.labels(), [vec![b'c', b'a', b'f', 0xE9], vec![0xFF, b'.']]);
        assert_eq!(name.to_bytes(), data);
        assert_eq!(name.to_string(), "caf\\233.\\255\\..");

        let built = DomainName::new([&[b'c', b'a', b'f', 0xE9][..], &[0xFF, b'.'][..]]).unwrap();
        assert_eq!(built, name);
    }

    #[test]
    fn test_display_escapes() {
        let name = DomainName::new(["a b", "back\\slash"]).unwrap();
        assert_eq!(name.to_string(), "a\\032b.back\\\\slash.");
    }

    /// A well-formed name whose encoding is exactly `encoded` bytes long.
    fn name_of_len(encoded: usize) -> Vec<u8> {
        // Three full 63-byte labels take 192 bytes, the last label fills the rest.
        let mut data = Vec::new();
        for _ in 0..3 {
            data.push(63);
            data.extend_from_slice(&[b'a'; 63]);
        }
        let last = encoded - data.len() - 2;
        data.push(last as u8);
        data.extend(core::iter::repeat_n(b'b', last));
        data.push(0);
        assert_eq!(data.len(), encoded);
        data
    }

    #[test]
    fn test_name_length_limit_parse() {
        let longest = name_of_len(255);
        let name = DomainName::parse(&longest).unwrap();
        assert_eq!(name.buffer_len(), 255);
        assert_eq!(name.to_bytes(), longest);

        assert_eq!(DomainName::parse(&name_of_len(256)), Err(LabelError::NameTooLong));
    }

    #[test]
    fn test_name_length_limit_new() {
        let a = "a".repeat(63);
        let fits = "b".repeat(61);
        let overflows = "b".repeat(62);
        // 3 * 64 + (1 + 61) + 1 = 255
        let name = DomainName::new([a.as_str(), a.as_str(), a.as_str(), fits.as_str()]).unwrap();
        assert_eq!(name.buffer_len(), 255);
        assert_eq!(
            DomainName::new([a.as_str(), a.as_str(), a.as_str(), overflows.as_str()]),
            Err(LabelError::NameTooLong)
        );
    }

    #[test]
    fn test_parse_name_too_long() {
        let mut data = Vec::new();
        for _ in 0..5 {
            data.push(63);
            data.extend_from_slice(&[b'a'; 63]);
        }
        data.push(0);
        assert_eq!(DomainName::parse(&data), Err(LabelError::NameTooLong));
    }

    #[test]
    fn test_construction_validation() {
        assert_eq!(DomainName::from_dotted("a..b"), Err(LabelError::EmptyLabel));
        let long_label = "x".repeat(64);
        assert_eq!(DomainName::new([long_label]), Err(LabelError::LabelTooLong));
        let labels = ["y".repeat(63), "y".repeat(63), "y".repeat(63), "y".repeat(63)];
        assert_eq!(DomainName::new(labels), Err(LabelError::NameTooLong));
        assert!(DomainName::from_dotted("example.com.").is_ok());
    }

    #[test]
    fn test_name_list() {
        let mut data = Vec::new();
        data.extend_from_slice(&WWW_EXAMPLE_COM);
        data.extend_from_slice(&[3, b'o', b'r', b'g', 0]);

        let list = DomainNameList::parse(&data).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_string(), "[www.example.com., org.]");
        assert_eq!(list.to_bytes(), data);
        assert_eq!(list.buffer_len(), data.len());
    }

    #[test]
    fn test_name_list_empty_and_truncated() {
        let list = DomainNameList::parse(&[]).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "[]");

        let data = [3, b'o', b'r', b'g', 0, 3, b'n', b'e', b't'];
        assert_eq!(DomainNameList::parse(&data), Err(LabelError::UnexpectedEnd));
    }
}
