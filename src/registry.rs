//! Option registry and the decoded options collection.
//!
//! The registry maps an [`OptionCode`] to the decoder for its value. It is a
//! `static` table built at compile time and never modified, so any number of
//! decodes may consult it at once.
//!
//! [`Options`] is the ordered collection a whole options area decodes to.
//! Codes without a decoder are kept as [`OptUnknown`] and re-encode to the
//! same bytes.

use crate::buffer::Writer;
use crate::config::DecodeConfig;
use crate::duid::Duid;
use crate::error::Error;
use crate::field;
use crate::frame::{emit_frame, frames};
use crate::iana::OptionCode;
use crate::label::DomainNameList;
use crate::options::{
    Dhcpv6Option, OptClientId, OptDomainSearchList, OptElapsedTime, OptFqdn, OptPreference,
    OptServerId, OptUnknown, OptionValue, ParseOption,
};
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Decodes the value bytes of one frame.
pub type DecodeFn = fn(&[u8]) -> Result<OptionValue>;

fn decode_as<O>(data: &[u8]) -> Result<OptionValue>
where
    O: ParseOption + Into<OptionValue>,
{
    O::from_bytes(data).map(Into::into)
}

static DECODERS: &[(OptionCode, DecodeFn)] = &[
    (OptClientId::CODE, decode_as::<OptClientId>),
    (OptServerId::CODE, decode_as::<OptServerId>),
    (OptPreference::CODE, decode_as::<OptPreference>),
    (OptElapsedTime::CODE, decode_as::<OptElapsedTime>),
    (OptDomainSearchList::CODE, decode_as::<OptDomainSearchList>),
    (OptFqdn::CODE, decode_as::<OptFqdn>),
];

/// Look up the decoder registered for `code`.
///
/// # Example
/// ```
/// use dhcpv6_opt_wire::iana::OptionCode;
/// use dhcpv6_opt_wire::registry::decoder_for;
///
/// let decode = decoder_for(OptionCode::Preference).unwrap();
/// assert_eq!(decode(&[0xFF]).unwrap().to_string(), "Preference: 255");
/// assert!(decoder_for(OptionCode::Unknown(0x1234)).is_none());
/// ```
pub fn decoder_for(code: OptionCode) -> Option<DecodeFn> {
    DECODERS
        .iter()
        .find(|(registered, _)| *registered == code)
        .map(|(_, decode)| *decode)
}

/// Returns true if `code` decodes to a typed option rather than [`OptUnknown`].
pub fn is_registered(code: OptionCode) -> bool {
    decoder_for(code).is_some()
}

/// An ordered collection of decoded options.
///
/// The order is the order the options were found on the wire, or added in,
/// and is exactly the order they are encoded in. Several options may share a
/// code.
///
/// # Example
/// ```
/// use dhcpv6_opt_wire::registry::Options;
///
/// let data = [
///     0x00, 0x01, 0x00, 0x0A, 0x00, 0x03, 0x00, 0x01, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05,
/// ];
/// let options = Options::from_bytes(&data).unwrap();
/// assert_eq!(options.len(), 1);
/// assert_eq!(options.to_bytes().unwrap(), data);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    options: Vec<OptionValue>,
}

impl Options {
    /// Create an empty collection.
    pub fn new() -> Self {
        Options {
            options: Vec::new(),
        }
    }

    /// Decode an options area with the default [`DecodeConfig`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with(data, &DecodeConfig::default())
    }

    /// Decode an options area.
    ///
    /// # Returns
    /// * `Ok(Options)` - Every frame, in wire order
    /// * `Err(Error::BufferTooShort)` - The data ends inside a frame
    /// * `Err(Error::TooManyOptions)` - More than `config.max_options` frames
    /// * `Err(_)` - A registered decoder rejected its value; the error is
    ///   returned as the decoder reported it
    ///
    /// No options are returned when any frame fails.
    pub fn from_bytes_with(data: &[u8], config: &DecodeConfig) -> Result<Self> {
        let mut options = Vec::new();

        for frame in frames(data) {
            let frame = frame.map_err(|err| {
                net_debug!("dhcpv6: truncated option frame: {}", err);
                err
            })?;
            if options.len() >= config.max_options {
                net_debug!("dhcpv6: more than {} options", config.max_options);
                return Err(Error::TooManyOptions);
            }

            let code = frame.code();
            net_trace!("dhcpv6: {}", frame);

            let value = match decoder_for(code) {
                Some(decode) => decode(frame.value()).map_err(|err| {
                    net_debug!("dhcpv6: cannot decode {}: {}", code, err);
                    err
                })?,
                None => {
                    net_debug!("dhcpv6: passing through {}", code);
                    OptionValue::Unknown(OptUnknown {
                        code,
                        data: frame.value().to_vec(),
                    })
                }
            };
            options.push(value);
        }

        Ok(Options { options })
    }

    /// Size of the encoded collection, frame headers included.
    pub fn buffer_len(&self) -> usize {
        self.options
            .iter()
            .map(|opt| field::option::HEADER_LEN + opt.buffer_len())
            .sum()
    }

    /// Encode every option, in order.
    ///
    /// # Errors
    /// `Error::LengthOverflow` if some value does not fit a 16-bit length.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::with_capacity(self.buffer_len());
        for opt in &self.options {
            emit_frame(opt, &mut writer)?;
        }
        Ok(writer.into_inner())
    }

    /// Encode into `buf`, returning the number of bytes written.
    ///
    /// # Errors
    /// * `Error::BufferTooShort` - `buf` is smaller than [`Options::buffer_len`]
    /// * `Error::LengthOverflow` - some value does not fit a 16-bit length
    pub fn emit(&self, buf: &mut [u8]) -> Result<usize> {
        let bytes = self.to_bytes()?;
        let Some(out) = buf.get_mut(..bytes.len()) else {
            return Err(Error::BufferTooShort);
        };
        out.copy_from_slice(&bytes);
        Ok(bytes.len())
    }

    /// Append an option.
    pub fn add(&mut self, option: impl Into<OptionValue>) {
        self.options.push(option.into());
    }

    /// Replace every option with the same code by `option`.
    ///
    /// The new option takes the position of the first one replaced, or is
    /// appended when the code is absent.
    pub fn update(&mut self, option: impl Into<OptionValue>) {
        let option = option.into();
        let code = option.code();
        match self.options.iter().position(|opt| opt.code() == code) {
            Some(index) => {
                self.options[index] = option;
                let mut seen = 0;
                self.options.retain(|opt| {
                    if opt.code() != code {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.options.push(option),
        }
    }

    /// Remove every option with `code`.
    pub fn del(&mut self, code: OptionCode) {
        self.options.retain(|opt| opt.code() != code);
    }

    /// All options with `code`, in order.
    pub fn get(&self, code: OptionCode) -> impl Iterator<Item = &OptionValue> + '_ {
        self.options.iter().filter(move |opt| opt.code() == code)
    }

    /// The first option with `code`.
    pub fn get_one(&self, code: OptionCode) -> Option<&OptionValue> {
        self.get(code).next()
    }

    /// Iterate over every option, in order.
    pub fn iter(&self) -> core::slice::Iter<'_, OptionValue> {
        self.options.iter()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if the collection holds no option.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// DUID of the first Client Identifier option.
    pub fn client_id(&self) -> Option<&Duid> {
        match self.get_one(OptionCode::ClientId) {
            Some(OptionValue::ClientId(opt)) => Some(&opt.duid),
            _ => None,
        }
    }

    /// DUID of the first Server Identifier option.
    pub fn server_id(&self) -> Option<&Duid> {
        match self.get_one(OptionCode::ServerId) {
            Some(OptionValue::ServerId(opt)) => Some(&opt.duid),
            _ => None,
        }
    }

    /// Value of the first Preference option.
    pub fn preference(&self) -> Option<u8> {
        match self.get_one(OptionCode::Preference) {
            Some(OptionValue::Preference(opt)) => Some(opt.preference),
            _ => None,
        }
    }

    /// Value of the first Elapsed Time option.
    pub fn elapsed_time(&self) -> Option<Duration> {
        match self.get_one(OptionCode::ElapsedTime) {
            Some(OptionValue::ElapsedTime(opt)) => Some(opt.as_duration()),
            _ => None,
        }
    }

    /// Domains of the first Domain Search List option.
    pub fn domain_search_list(&self) -> Option<&DomainNameList> {
        match self.get_one(OptionCode::DomainSearchList) {
            Some(OptionValue::DomainSearchList(opt)) => Some(&opt.domains),
            _ => None,
        }
    }

    /// The first Client FQDN option.
    pub fn fqdn(&self) -> Option<&OptFqdn> {
        match self.get_one(OptionCode::Fqdn) {
            Some(OptionValue::Fqdn(opt)) => Some(opt),
            _ => None,
        }
    }
}

impl FromIterator<OptionValue> for Options {
    fn from_iter<I: IntoIterator<Item = OptionValue>>(iter: I) -> Self {
        Options {
            options: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = &'a OptionValue;
    type IntoIter = core::slice::Iter<'a, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Options: [")?;
        for (i, opt) in self.options.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", opt)?;
        }
        write!(f, "]")
    }
}
