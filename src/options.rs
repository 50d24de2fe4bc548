//! Option types for DHCPv6
//!
//! This module defines the uniform option contract and the option types the
//! registry knows how to decode. Every type owns its data, so a decoded
//! option outlives the buffer it came from.
//!
//! Options whose code has no registered decoder are kept as [`OptUnknown`],
//! which stores the raw value for a byte-identical re-encode.

use crate::buffer::{Cursor, Writer};
use crate::duid::Duid;
use crate::error::Error;
use crate::iana::OptionCode;
use crate::label::{DomainName, DomainNameList};
use crate::registry::is_registered;
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Behaviour shared by every DHCPv6 option.
///
/// Implementors encode only the option value; the `(code, length)` header is
/// added by the frame layer.
pub trait Dhcpv6Option: fmt::Display {
    /// The option code this value is framed with.
    fn code(&self) -> OptionCode;

    /// Size of the encoded value in bytes, header excluded.
    fn buffer_len(&self) -> usize;

    /// Append the encoded value to `writer`.
    fn emit(&self, writer: &mut Writer);

    /// Encode the value into a new buffer.
    fn to_bytes(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(self.buffer_len());
        self.emit(&mut writer);
        writer.into_inner()
    }
}

/// An option that can be decoded from its value bytes.
pub trait ParseOption: Dhcpv6Option + Sized {
    /// The code this type is registered under.
    const CODE: OptionCode;

    /// Decode the value bytes of one frame.
    fn from_bytes(data: &[u8]) -> Result<Self>;
}

/// Client Identifier option (code 1).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptClientId {
    /// The client's DUID.
    pub duid: Duid,
}

impl OptClientId {
    /// Create a Client Identifier carrying `duid`.
    pub fn new(duid: Duid) -> Self {
        OptClientId { duid }
    }
}

impl Dhcpv6Option for OptClientId {
    fn code(&self) -> OptionCode {
        Self::CODE
    }

    fn buffer_len(&self) -> usize {
        self.duid.buffer_len()
    }

    fn emit(&self, writer: &mut Writer) {
        self.duid.emit(writer);
    }
}

impl ParseOption for OptClientId {
    const CODE: OptionCode = OptionCode::ClientId;

    fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(OptClientId {
            duid: Duid::parse(data)?,
        })
    }
}

impl fmt::Display for OptClientId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.duid)
    }
}

/// Server Identifier option (code 2).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptServerId {
    /// The server's DUID.
    pub duid: Duid,
}

impl OptServerId {
    /// Create a Server Identifier carrying `duid`.
    pub fn new(duid: Duid) -> Self {
        OptServerId { duid }
    }
}

impl Dhcpv6Option for OptServerId {
    fn code(&self) -> OptionCode {
        Self::CODE
    }

    fn buffer_len(&self) -> usize {
        self.duid.buffer_len()
    }

    fn emit(&self, writer: &mut Writer) {
        self.duid.emit(writer);
    }
}

impl ParseOption for OptServerId {
    const CODE: OptionCode = OptionCode::ServerId;

    fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(OptServerId {
            duid: Duid::parse(data)?,
        })
    }
}

impl fmt::Display for OptServerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.duid)
    }
}

/// Preference option (code 7).
///
/// Wire format: a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptPreference {
    /// Server preference, 255 being the highest.
    pub preference: u8,
}

impl Dhcpv6Option for OptPreference {
    fn code(&self) -> OptionCode {
        Self::CODE
    }

    fn buffer_len(&self) -> usize {
        1
    }

    fn emit(&self, writer: &mut Writer) {
        writer.write_u8(self.preference);
    }
}

impl ParseOption for OptPreference {
    const CODE: OptionCode = OptionCode::Preference;

    fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data);
        let preference = cursor.read_u8()?;
        cursor.finish()?;
        Ok(OptPreference { preference })
    }
}

impl fmt::Display for OptPreference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.preference)
    }
}

/// Elapsed Time option (code 8).
///
/// Wire format: a u16 in hundredths of a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptElapsedTime {
    /// Time since the client began the exchange, in hundredths of a second.
    pub centiseconds: u16,
}

impl OptElapsedTime {
    /// The elapsed time as a `Duration`.
    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.centiseconds) * 10)
    }
}

impl Dhcpv6Option for OptElapsedTime {
    fn code(&self) -> OptionCode {
        Self::CODE
    }

    fn buffer_len(&self) -> usize {
        2
    }

    fn emit(&self, writer: &mut Writer) {
        writer.write_u16(self.centiseconds);
    }
}

impl ParseOption for OptElapsedTime {
    const CODE: OptionCode = OptionCode::ElapsedTime;

    fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data);
        let centiseconds = cursor.read_u16()?;
        cursor.finish()?;
        Ok(OptElapsedTime { centiseconds })
    }
}

impl fmt::Display for OptElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {:?}", self.code(), self.as_duration())
    }
}

/// Domain Search List option (code 24, RFC 3646).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OptDomainSearchList {
    /// Search domains in wire order.
    pub domains: DomainNameList,
}

impl Dhcpv6Option for OptDomainSearchList {
    fn code(&self) -> OptionCode {
        Self::CODE
    }

    fn buffer_len(&self) -> usize {
        self.domains.buffer_len()
    }

    fn emit(&self, writer: &mut Writer) {
        self.domains.emit(writer);
    }
}

impl ParseOption for OptDomainSearchList {
    const CODE: OptionCode = OptionCode::DomainSearchList;

    fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(OptDomainSearchList {
            domains: DomainNameList::parse(data)?,
        })
    }
}

impl fmt::Display for OptDomainSearchList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.domains)
    }
}

/// Client FQDN option (code 39, RFC 4704).
///
/// Wire format:
/// ```text
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |     flags     |                                               |
/// +-+-+-+-+-+-+-+-+                                               |
/// .                  domain-name (label sequence)                 .
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The flag bits are carried as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptFqdn {
    /// The flags byte.
    pub flags: u8,
    /// The domain name. It must fill the rest of the option exactly.
    pub domain_name: DomainName,
}

impl Dhcpv6Option for OptFqdn {
    fn code(&self) -> OptionCode {
        Self::CODE
    }

    fn buffer_len(&self) -> usize {
        1 + self.domain_name.buffer_len()
    }

    fn emit(&self, writer: &mut Writer) {
        writer.write_u8(self.flags);
        self.domain_name.emit(writer);
    }
}

impl ParseOption for OptFqdn {
    const CODE: OptionCode = OptionCode::Fqdn;

    fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data);
        let flags = cursor.read_u8()?;
        let domain_name = DomainName::parse(cursor.read_all())?;
        cursor.finish()?;
        Ok(OptFqdn { flags, domain_name })
    }
}

impl fmt::Display for OptFqdn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {{Flags={} DomainName={}}}", self.code(), self.flags, self.domain_name)
    }
}

/// An option whose code has no registered decoder.
///
/// The code must not be one the registry decodes: such bytes would come back
/// as the typed option, or fail to decode at all. [`OptUnknown::new`] checks
/// this; building the struct by hand does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptUnknown {
    /// Option code as found on the wire.
    pub code: OptionCode,
    /// Raw option value.
    pub data: Vec<u8>,
}

impl OptUnknown {
    /// Create an opaque option.
    ///
    /// Returns `None` if `code` has a registered decoder.
    ///
    /// # Example
    /// ```
    /// use dhcpv6_opt_wire::iana::OptionCode;
    /// use dhcpv6_opt_wire::options::OptUnknown;
    ///
    /// assert!(OptUnknown::new(OptionCode::VendorOpts, vec![0, 0, 0, 9]).is_some());
    /// assert!(OptUnknown::new(OptionCode::Preference, vec![1, 2]).is_none());
    /// ```
    pub fn new(code: OptionCode, data: Vec<u8>) -> Option<Self> {
        if is_registered(code) {
            return None;
        }
        Some(OptUnknown { code, data })
    }
}

impl Dhcpv6Option for OptUnknown {
    fn code(&self) -> OptionCode {
        self.code
    }

    fn buffer_len(&self) -> usize {
        self.data.len()
    }

    fn emit(&self, writer: &mut Writer) {
        writer.write_bytes(&self.data);
    }
}

impl fmt::Display for OptUnknown {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {:02x?}", self.code, self.data)
    }
}

/// Any decoded option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    /// Client Identifier (1)
    ClientId(OptClientId),
    /// Server Identifier (2)
    ServerId(OptServerId),
    /// Preference (7)
    Preference(OptPreference),
    /// Elapsed Time (8)
    ElapsedTime(OptElapsedTime),
    /// Domain Search List (24)
    DomainSearchList(OptDomainSearchList),
    /// Client FQDN (39)
    Fqdn(OptFqdn),
    /// Any code without a registered decoder
    Unknown(OptUnknown),
}

impl OptionValue {
    fn inner(&self) -> &dyn Dhcpv6Option {
        match self {
            OptionValue::ClientId(opt) => opt,
            OptionValue::ServerId(opt) => opt,
            OptionValue::Preference(opt) => opt,
            OptionValue::ElapsedTime(opt) => opt,
            OptionValue::DomainSearchList(opt) => opt,
            OptionValue::Fqdn(opt) => opt,
            OptionValue::Unknown(opt) => opt,
        }
    }
}

impl Dhcpv6Option for OptionValue {
    fn code(&self) -> OptionCode {
        self.inner().code()
    }

    fn buffer_len(&self) -> usize {
        self.inner().buffer_len()
    }

    fn emit(&self, writer: &mut Writer) {
        self.inner().emit(writer);
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl From<OptClientId> for OptionValue {
    fn from(opt: OptClientId) -> Self {
        OptionValue::ClientId(opt)
    }
}

impl From<OptServerId> for OptionValue {
    fn from(opt: OptServerId) -> Self {
        OptionValue::ServerId(opt)
    }
}

impl From<OptPreference> for OptionValue {
    fn from(opt: OptPreference) -> Self {
        OptionValue::Preference(opt)
    }
}

impl From<OptElapsedTime> for OptionValue {
    fn from(opt: OptElapsedTime) -> Self {
        OptionValue::ElapsedTime(opt)
    }
}

impl From<OptDomainSearchList> for OptionValue {
    fn from(opt: OptDomainSearchList) -> Self {
        OptionValue::DomainSearchList(opt)
    }
}

impl From<OptFqdn> for OptionValue {
    fn from(opt: OptFqdn) -> Self {
        OptionValue::Fqdn(opt)
    }
}

impl From<OptUnknown> for OptionValue {
    fn from(opt: OptUnknown) -> Self {
        OptionValue::Unknown(opt)
    }
}
